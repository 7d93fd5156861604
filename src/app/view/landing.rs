use super::super::messages::Message;
use super::super::state::{App, CONTENT_MAX_WIDTH_PX, LANDING_SCROLL_ID, LandingState, NEWS_THUMB_PX};
use super::{hero_block, picture};
use crate::content::{
    DEFAULT_EMAIL, DEFAULT_PHONE, HeroField, HoursDisplay, NewsItem, display_address, hero_copy,
    hours_display,
};
use crate::i18n::{Label, Language, day_label, tr};
use crate::navigation::PointerCapability;
use crate::navigation::visuals::render_navigation;
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, button, column, container, mouse_area, row, scrollable, text};
use iced::{Color, Element, Length};
use std::time::Instant;

impl App {
    pub(super) fn landing_view(&self) -> Element<'_, Message> {
        let lang = self.language;
        let Some(landing) = self.landing.as_ref() else {
            return container(text(tr(Label::NewsLoading, lang)))
                .center(Length::Fill)
                .into();
        };

        let settings = self.settings.as_ref();
        let height = landing.viewport_height;
        let sections = landing.controller.registry().sections();
        let background = |index: usize| {
            sections
                .get(index)
                .map(|section| theme::parse_hex(&section.background))
                .unwrap_or(theme::BACKGROUND)
        };

        let props = render_navigation(&landing.controller.state(), &landing.reveal, Instant::now());
        let hero = hero_block(
            props,
            Length::Fill,
            height,
            background(0),
            self.images.hero.clone(),
            hero_copy(settings, HeroField::HeroTitle, lang),
            hero_copy(settings, HeroField::HeroSubtitle, lang),
            48.0,
        );

        let content = column![
            hero,
            section_frame(self.news_section(landing), height, background(1)),
            section_frame(self.about_section(), height, background(2)),
            section_frame(self.info_section(), height, background(3)),
        ]
        .width(Length::Fill);

        let precise = self.pointer == PointerCapability::Precise;
        let body: Element<'_, Message> = if precise {
            mouse_area(content).on_scroll(Message::LandingWheel).into()
        } else {
            content.into()
        };

        let mut view = scrollable(body)
            .id(LANDING_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::LandingScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);
        if precise {
            view = view.direction(Direction::Vertical(
                Scrollbar::new().width(0.0).scroller_width(0.0),
            ));
        }
        view.into()
    }

    fn news_section<'a>(&'a self, landing: &'a LandingState) -> Element<'a, Message> {
        let lang = self.language;
        let mut list: Column<'a, Message> = column![section_title(tr(Label::NewsTitle, lang))]
            .spacing(16)
            .width(Length::Fill);

        if landing.news_loading && landing.news.is_empty() {
            list = list.push(text(tr(Label::NewsLoading, lang)).color(theme::MUTED));
        } else if landing.news.is_empty() {
            list = list.push(text(tr(Label::NewsEmpty, lang)).color(theme::MUTED));
        } else {
            for item in &landing.news {
                list = list.push(self.news_card(landing, item, lang));
            }
        }
        list.into()
    }

    fn news_card<'a>(
        &'a self,
        landing: &'a LandingState,
        item: &'a NewsItem,
        lang: Language,
    ) -> Element<'a, Message> {
        let mut body: Column<'a, Message> = column![
            text(item.created_at.format("%Y.%m.%d").to_string())
                .size(12.0)
                .color(theme::MUTED),
            text(item.title.resolve(lang)).size(18.0).color(theme::PRIMARY),
            text(item.content.resolve(lang)).size(14.0),
        ]
        .spacing(6)
        .width(Length::Fill);

        if self.is_signed_in() {
            body = body.push(
                row![
                    button(text(tr(Label::AdminBtnEdit, lang)).size(12.0))
                        .style(theme::nav_button(false))
                        .on_press(Message::EditNewsFromLanding(item.id.clone())),
                    button(text(tr(Label::AdminBtnDelete, lang)).size(12.0))
                        .style(theme::danger_button)
                        .on_press(Message::DeleteNews(item.id.clone())),
                ]
                .spacing(8),
            );
        }

        let mut card = row![].spacing(16).align_y(Vertical::Center);
        if item.image_url.is_some() {
            card = card.push(picture(
                landing.news_images.get(&item.id).cloned(),
                Length::Fixed(NEWS_THUMB_PX),
                Length::Fixed(NEWS_THUMB_PX),
            ));
        }
        card = card.push(body);

        container(card)
            .padding(16)
            .width(Length::Fill)
            .style(theme::card)
            .into()
    }

    fn about_section(&self) -> Element<'_, Message> {
        let lang = self.language;
        let settings = self.settings.as_ref();
        let copy = column![
            section_title(&hero_copy(settings, HeroField::AboutTitle, lang)),
            text(hero_copy(settings, HeroField::AboutDesc1, lang)),
            text(hero_copy(settings, HeroField::AboutDesc2, lang)),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        row![
            picture(
                self.images.about.clone(),
                Length::FillPortion(1),
                Length::Fixed(320.0)
            ),
            copy,
        ]
        .spacing(32)
        .align_y(Vertical::Center)
        .into()
    }

    fn info_section(&self) -> Element<'_, Message> {
        let lang = self.language;
        let settings = self.settings.as_ref();

        let hours: Element<'_, Message> = match hours_display(settings, lang) {
            HoursDisplay::TodayClosed => text(tr(Label::InfoTodayClosed, lang))
                .color(theme::DANGER)
                .into(),
            HoursDisplay::Text(value) => text(value).into(),
            HoursDisplay::Schedule {
                rows,
                closed,
                holiday_closed,
            } => {
                let mut block: Column<'_, Message> = column![].spacing(4);
                for (days, time) in rows {
                    block = block.push(text(format!("{}  {}", localized_days(&days, lang), time)));
                }
                if !closed.is_empty() {
                    let closed = closed
                        .iter()
                        .map(|day| day_label(day, lang))
                        .collect::<Vec<_>>()
                        .join(", ");
                    block = block.push(
                        text(format!("{}: {}", tr(Label::InfoClosedDays, lang), closed))
                            .color(theme::MUTED),
                    );
                }
                if holiday_closed {
                    block = block
                        .push(text(tr(Label::InfoHolidayClosed, lang)).color(theme::MUTED));
                }
                block.into()
            }
        };

        let phone = settings
            .and_then(|settings| settings.phone.clone())
            .filter(|phone| !phone.is_empty())
            .unwrap_or_else(|| DEFAULT_PHONE.to_string());
        let email = settings
            .and_then(|settings| settings.email.clone())
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string());

        column![
            section_title(tr(Label::InfoTitle, lang)),
            info_row(tr(Label::InfoHoursLabel, lang), hours),
            info_row(
                tr(Label::InfoLocLabel, lang),
                text(display_address(settings, lang)).into()
            ),
            info_row(
                tr(Label::AdminSecContact, lang),
                column![text(phone), text(email)].spacing(4).into()
            ),
        ]
        .spacing(24)
        .into()
    }
}

fn localized_days(days: &str, lang: Language) -> String {
    days.split(", ")
        .map(|day| day_label(day, lang))
        .collect::<Vec<_>>()
        .join(", ")
}

fn section_title<'a>(title: &str) -> Element<'a, Message> {
    text(title.to_string())
        .size(28.0)
        .color(theme::PRIMARY)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

fn info_row<'a>(label: &'a str, value: Element<'a, Message>) -> Element<'a, Message> {
    row![
        text(label)
            .width(Length::Fixed(140.0))
            .color(theme::PRIMARY),
        value
    ]
    .spacing(16)
    .into()
}

/// One full-viewport landing block with its content centred.
fn section_frame<'a>(
    content: Element<'a, Message>,
    height: f32,
    background: Color,
) -> Element<'a, Message> {
    container(container(content).max_width(CONTENT_MAX_WIDTH_PX).padding(40))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .style(theme::filled(background))
        .into()
}
