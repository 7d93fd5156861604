use super::super::messages::{EditorTab, ImageSlot, InfoField, InfoFlag, Message};
use super::super::state::{
    App, CONTENT_MAX_WIDTH_PX, EDITOR_SCROLL_ID, EditorState, PREVIEW_SECTION_HEIGHT_PX,
    PREVIEW_WIDTH_PX, data_uri_handle,
};
use super::{hero_block, picture};
use crate::content::{HeroField, WEEKDAYS};
use crate::i18n::{Label, Language, day_label, tr};
use crate::navigation::visuals::render_scrub;
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, button, checkbox, column, container, horizontal_space, mouse_area, row,
    scrollable, text, text_input,
};
use iced::{Element, Length};

impl App {
    pub(super) fn editor_view(&self) -> Element<'_, Message> {
        let lang = self.language;
        let Some(editor) = self.editor.as_ref() else {
            return container(
                column![
                    text(tr(Label::AdminSignedOut, lang)).color(theme::MUTED),
                    button(text(tr(Label::AdminBack, lang))).on_press(Message::ShowLanding),
                ]
                .spacing(16)
                .align_x(Horizontal::Center),
            )
            .center(Length::Fill)
            .into();
        };

        let tabs = EditorTab::ALL
            .into_iter()
            .fold(row![].spacing(8), |tabs, tab| {
                tabs.push(
                    button(text(tr(tab_label(tab), lang)))
                        .padding([6, 14])
                        .style(theme::pill_button(tab == editor.tab))
                        .on_press(Message::EditorTabSelected(tab)),
                )
            });

        let mut page: Column<'_, Message> = column![
            text(tr(Label::AdminTitle, lang))
                .size(28.0)
                .color(theme::PRIMARY),
            tabs,
        ]
        .spacing(20)
        .width(Length::Fill);

        if let Some(flash) = editor.flash.as_ref() {
            page = page.push(
                container(text(flash.text.as_str()).color(theme::PRIMARY))
                    .padding(12)
                    .width(Length::Fill)
                    .style(theme::panel),
            );
        }

        if editor.info.enable_multi_lang {
            page = page.push(
                row![
                    text("Input").size(14.0).color(theme::MUTED),
                    self.language_pills(editor.input_language, Message::InputLanguageSelected),
                ]
                .spacing(12)
                .align_y(Vertical::Center),
            );
        }

        let body = match editor.tab {
            EditorTab::News => self.news_tab(editor),
            EditorTab::Info => self.info_tab(editor),
            EditorTab::Hero => self.hero_tab(editor),
        };
        page = page.push(body);

        scrollable(
            container(container(page).max_width(CONTENT_MAX_WIDTH_PX).padding(24))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .id(EDITOR_SCROLL_ID.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn news_tab<'a>(&'a self, editor: &'a EditorState) -> Element<'a, Message> {
        let lang = self.language;
        let input = editor.active_input_language();
        let form = &editor.news;
        let editing = editor.is_editing_news();

        let heading = if editing {
            Label::AdminNewsEdit
        } else {
            Label::AdminNewsNew
        };
        let submit_label = match (editor.saving, editing) {
            (true, true) => Label::AdminMsgSaving,
            (true, false) => Label::AdminMsgUploading,
            (false, true) => Label::AdminBtnSave,
            (false, false) => Label::AdminBtnSubmit,
        };

        let mut actions: Row<'a, Message> = row![
            button(text(tr(submit_label, lang)))
                .on_press_maybe((!editor.saving).then_some(Message::NewsSubmit)),
        ]
        .spacing(8);
        if editing {
            actions = actions.push(
                button(text(tr(Label::AdminBtnCancel, lang)))
                    .style(theme::nav_button(false))
                    .on_press(Message::NewsEditCancelled),
            );
        }

        let mut image_row: Row<'a, Message> = row![
            text_input("/path/to/image.jpg", &form.image_path)
                .on_input(Message::NewsImagePathChanged)
                .width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Vertical::Center);
        if form.image_path.trim().is_empty() {
            if let Some(existing) = form.existing_image.as_deref() {
                image_row = image_row.push(picture(
                    data_uri_handle(existing),
                    Length::Fixed(48.0),
                    Length::Fixed(48.0),
                ));
            }
        }

        let form_panel = container(
            column![
                text(tr(heading, lang)).size(20.0),
                field(
                    tr(Label::AdminLabelTitle, lang),
                    text_input("", form.title.get(input))
                        .on_input(Message::NewsTitleChanged)
                        .into(),
                ),
                field(
                    tr(Label::AdminLabelContent, lang),
                    text_input("", form.content.get(input))
                        .on_input(Message::NewsContentChanged)
                        .into(),
                ),
                field(tr(Label::AdminLabelImage, lang), image_row.into()),
                actions,
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fill)
        .style(theme::panel);

        let mut list: Column<'a, Message> =
            column![text(tr(Label::AdminNewsExisting, lang)).size(20.0)].spacing(8);
        if editor.news_loading && editor.news_list.is_empty() {
            list = list.push(text(tr(Label::NewsLoading, lang)).color(theme::MUTED));
        } else if editor.news_list.is_empty() {
            list = list.push(text(tr(Label::NewsEmpty, lang)).color(theme::MUTED));
        }
        for item in &editor.news_list {
            let selected = form.editing_id.as_deref() == Some(item.id.as_str());
            list = list.push(
                container(
                    row![
                        text(item.created_at.format("%Y.%m.%d").to_string())
                            .size(12.0)
                            .color(theme::MUTED),
                        text(item.title.resolve(lang)).width(Length::Fill),
                        button(text(tr(Label::AdminBtnEdit, lang)).size(12.0))
                            .style(theme::nav_button(selected))
                            .on_press(Message::NewsEditStarted(item.id.clone())),
                        button(text(tr(Label::AdminBtnDelete, lang)).size(12.0))
                            .style(theme::danger_button)
                            .on_press(Message::DeleteNews(item.id.clone())),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
                .padding(12)
                .style(theme::card),
            );
        }

        column![form_panel, list].spacing(24).into()
    }

    fn info_tab<'a>(&'a self, editor: &'a EditorState) -> Element<'a, Message> {
        let lang = self.language;
        let input = editor.active_input_language();
        let info = &editor.info;

        let logo_preview = picture(
            info.logo_url.as_deref().and_then(data_uri_handle),
            Length::Fixed(48.0),
            Length::Fixed(48.0),
        );
        let logo = field(
            tr(Label::AdminInfoLogo, lang),
            row![
                logo_preview,
                text_input("/path/to/logo.png", &info.logo_path)
                    .on_input(|value| Message::InfoTextChanged(InfoField::LogoPath, value))
                    .width(Length::Fill),
            ]
            .spacing(12)
            .align_y(Vertical::Center)
            .into(),
        );

        let flags = column![
            checkbox(tr(Label::AdminLabelTodayClosed, lang), info.today_closed)
                .on_toggle(|value| Message::InfoFlagToggled(InfoFlag::TodayClosed, value)),
            checkbox(tr(Label::AdminLabelHoliday, lang), info.holiday_closed)
                .on_toggle(|value| Message::InfoFlagToggled(InfoFlag::HolidayClosed, value)),
            checkbox(
                tr(Label::AdminLabelEnableMultiLang, lang),
                info.enable_multi_lang
            )
            .on_toggle(|value| Message::InfoFlagToggled(InfoFlag::EnableMultiLang, value)),
        ]
        .spacing(8);

        let mut schedule: Column<'a, Message> =
            column![text(tr(Label::AdminHoursSchedule, lang)).size(18.0)].spacing(8);
        for (index, entry) in info.schedule.iter().enumerate() {
            let days = entry
                .open_days()
                .into_iter()
                .map(|day| day_label(day, lang))
                .collect::<Vec<_>>()
                .join(", ");
            schedule = schedule.push(
                row![
                    text(days).width(Length::Fill),
                    text(entry.time.as_str()),
                    button(text("×"))
                        .style(theme::danger_button)
                        .on_press(Message::ScheduleRemove(index)),
                ]
                .spacing(12)
                .align_y(Vertical::Center),
            );
        }

        let day_toggles = WEEKDAYS.into_iter().fold(row![].spacing(4), |days, day| {
            days.push(
                button(text(day_label(day, lang)))
                    .padding([4, 10])
                    .style(theme::pill_button(info.selected_days.contains(&day)))
                    .on_press(Message::ScheduleDayToggled(day)),
            )
        });
        schedule = schedule
            .push(text(tr(Label::AdminHoursDays, lang)).size(14.0))
            .push(day_toggles)
            .push(text(tr(Label::AdminHoursTime, lang)).size(14.0))
            .push(
                row![
                    text_input("10:00 - 18:00", &info.new_time)
                        .on_input(|value| Message::InfoTextChanged(InfoField::ScheduleTime, value))
                        .width(Length::Fill),
                    button(text(tr(Label::AdminHoursAdd, lang))).on_press(Message::ScheduleAdd),
                ]
                .spacing(8),
            );

        let address = column![
            text(tr(Label::AdminSecAddress, lang)).size(18.0),
            info_input(tr(Label::AdminLabelZip, lang), &info.zip, InfoField::Zip),
            info_input(
                tr(Label::AdminLabelPrefecture, lang),
                &info.prefecture,
                InfoField::Prefecture
            ),
            info_input(tr(Label::AdminLabelCity, lang), &info.city, InfoField::City),
            info_input(
                tr(Label::AdminLabelStreet, lang),
                info.street.get(input),
                InfoField::Street
            ),
        ]
        .spacing(8);

        let contact = column![
            text(tr(Label::AdminSecContact, lang)).size(18.0),
            info_input(tr(Label::AdminLabelPhone, lang), &info.phone, InfoField::Phone),
            info_input(tr(Label::AdminLabelEmail, lang), &info.email, InfoField::Email),
        ]
        .spacing(8);

        container(
            column![
                logo,
                flags,
                schedule,
                address,
                contact,
                save_button(editor, lang, Message::InfoSubmit),
            ]
            .spacing(24),
        )
        .padding(20)
        .width(Length::Fill)
        .style(theme::panel)
        .into()
    }

    fn hero_tab<'a>(&'a self, editor: &'a EditorState) -> Element<'a, Message> {
        let lang = self.language;
        let input = editor.active_input_language();
        let hero = &editor.hero;

        let mut form: Column<'a, Message> = column![
            field(
                tr(Label::AdminHeroImage, lang),
                text_input("/path/to/hero.jpg", &hero.hero_image_path)
                    .on_input(|value| Message::HeroImagePathChanged(ImageSlot::Hero, value))
                    .into(),
            ),
            field(
                tr(Label::AdminAboutImage, lang),
                text_input("/path/to/about.jpg", &hero.about_image_path)
                    .on_input(|value| Message::HeroImagePathChanged(ImageSlot::About, value))
                    .into(),
            ),
        ]
        .spacing(12)
        .width(Length::FillPortion(1));

        for hero_field in HeroField::ALL {
            form = form.push(field(
                hero_field_label(hero_field),
                text_input(tr(hero_field.fallback(), input), hero.copy(hero_field, input))
                    .on_input(move |value| Message::HeroTextChanged(hero_field, value))
                    .into(),
            ));
        }
        form = form.push(save_button(editor, lang, Message::HeroSubmit));

        row![
            container(form)
                .padding(20)
                .width(Length::FillPortion(1))
                .style(theme::panel),
            self.scrub_preview(editor, input),
        ]
        .spacing(24)
        .into()
    }

    /// Two stacked preview sections; the wheel over them drives the scrub
    /// instead of scrolling the page.
    fn scrub_preview<'a>(&'a self, editor: &'a EditorState, input: Language) -> Element<'a, Message> {
        let hero = &editor.hero;
        let progress = editor.scrub.progress();
        let preview_copy = |field: HeroField| {
            let value = hero.copy(field, input);
            if value.trim().is_empty() {
                tr(field.fallback(), input).to_string()
            } else {
                value.to_string()
            }
        };

        let hero_image = hero
            .hero_preview
            .clone()
            .or_else(|| hero.hero_image.as_deref().and_then(data_uri_handle));
        let about_image = hero
            .about_preview
            .clone()
            .or_else(|| hero.about_image.as_deref().and_then(data_uri_handle));

        let top = hero_block(
            render_scrub(progress),
            Length::Fixed(PREVIEW_WIDTH_PX),
            PREVIEW_SECTION_HEIGHT_PX,
            theme::BACKGROUND,
            hero_image,
            preview_copy(HeroField::HeroTitle),
            preview_copy(HeroField::HeroSubtitle),
            24.0,
        );
        let bottom = container(
            row![
                picture(
                    about_image,
                    Length::Fixed(120.0),
                    Length::Fixed(PREVIEW_SECTION_HEIGHT_PX - 40.0)
                ),
                column![
                    text(preview_copy(HeroField::AboutTitle))
                        .size(16.0)
                        .color(theme::PRIMARY),
                    text(preview_copy(HeroField::AboutDesc1)).size(11.0),
                    text(preview_copy(HeroField::AboutDesc2)).size(11.0),
                ]
                .spacing(6),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fixed(PREVIEW_WIDTH_PX))
        .height(Length::Fixed(PREVIEW_SECTION_HEIGHT_PX))
        .clip(true)
        .style(theme::filled(theme::PANEL));

        column![
            row![
                text(tr(Label::AdminPreview, self.language))
                    .size(14.0)
                    .color(theme::MUTED),
                horizontal_space(),
                text(format!("{progress:.0}%")).size(14.0).color(theme::MUTED),
            ]
            .width(Length::Fixed(PREVIEW_WIDTH_PX)),
            mouse_area(
                container(column![top, bottom])
                    .width(Length::Fixed(PREVIEW_WIDTH_PX))
                    .height(Length::Fixed(PREVIEW_SECTION_HEIGHT_PX * 2.0))
                    .clip(true)
                    .style(theme::card),
            )
            .on_scroll(Message::PreviewWheel),
        ]
        .spacing(8)
        .into()
    }
}

fn tab_label(tab: EditorTab) -> Label {
    match tab {
        EditorTab::News => Label::AdminTabNews,
        EditorTab::Info => Label::AdminTabInfo,
        EditorTab::Hero => Label::AdminTabHero,
    }
}

fn hero_field_label(field: HeroField) -> &'static str {
    match field {
        HeroField::HeroTitle => "Hero title",
        HeroField::HeroSubtitle => "Hero subtitle",
        HeroField::AboutTitle => "About title",
        HeroField::AboutDesc1 => "About text 1",
        HeroField::AboutDesc2 => "About text 2",
    }
}

fn field<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(14.0).color(theme::MUTED), input]
        .spacing(4)
        .into()
}

fn info_input<'a>(label: &'a str, value: &'a str, target: InfoField) -> Element<'a, Message> {
    field(
        label,
        text_input("", value)
            .on_input(move |value| Message::InfoTextChanged(target, value))
            .into(),
    )
}

fn save_button<'a>(editor: &EditorState, lang: Language, on_press: Message) -> Element<'a, Message> {
    let label = if editor.saving {
        Label::AdminMsgSaving
    } else {
        Label::AdminBtnSave
    };
    button(text(tr(label, lang)))
        .on_press_maybe((!editor.saving).then_some(on_press))
        .into()
}
