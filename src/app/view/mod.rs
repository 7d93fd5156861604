mod editor;
mod landing;
mod shop;

use super::messages::Message;
use super::state::{App, HEADER_HEIGHT_PX, Page};
use crate::content::{FOOTER_PLACE, copyright_line};
use crate::i18n::{Label, Language, tr};
use crate::navigation::visuals::{Rgba, TextShadow, VisualProps};
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{
    Row, Space, button, column, container, horizontal_space, image, row, stack, text,
};
use chrono::Datelike;
use iced::{Color, ContentFit, Element, Length, Padding, color};

const NAV_LABELS: [Label; 4] = [Label::NavHome, Label::NavNews, Label::NavAbout, Label::NavInfo];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.page {
            Page::Landing => self.landing_view(),
            Page::Admin => self.editor_view(),
        };

        let page = column![self.header(), body]
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![page, self.footer()]
            .width(Length::Fill)
            .height(Length::Fill);
        if self.shop_open {
            layers = layers.push(self.shop_overlay());
        }
        layers.into()
    }

    /// Strip pinned to the bottom edge, drawn over the page.
    fn footer(&self) -> Element<'_, Message> {
        let year = chrono::Local::now().year();
        let line = row![
            text(copyright_line(year)).size(12.0).color(theme::MUTED),
            text("|").size(12.0).color(color!(0xdddddd)),
            text(FOOTER_PLACE).size(12.0).color(theme::MUTED),
        ]
        .spacing(20)
        .align_y(Vertical::Center);

        container(
            container(line)
                .padding([10, 0])
                .center_x(Length::Fill)
                .style(theme::footer),
        )
        .width(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
    }

    fn header(&self) -> Element<'_, Message> {
        let lang = self.language;
        let logo: Element<'_, Message> = match self.images.logo.clone() {
            Some(handle) => image(handle).height(Length::Fixed(40.0)).into(),
            None => text("mix").size(28.0).color(theme::PRIMARY).into(),
        };
        let logo_target = match self.page {
            Page::Landing => Message::NavClicked(0),
            Page::Admin => Message::ShowLanding,
        };

        let mut bar: Row<'_, Message> = row![
            button(logo).style(theme::nav_button(false)).on_press(logo_target),
            horizontal_space(),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        let shop = button(text(tr(Label::NavShop, lang)).size(14.0))
            .style(theme::nav_button(self.shop_open))
            .on_press(Message::ShopOpened);

        match self.landing.as_ref() {
            Some(landing) => {
                let current = landing.controller.state().current_index;
                let mut shop = Some(shop);
                for (index, label) in NAV_LABELS.into_iter().enumerate() {
                    bar = bar.push(
                        button(text(tr(label, lang)).size(14.0))
                            .style(theme::nav_button(index == current))
                            .on_press(Message::NavClicked(index)),
                    );
                    // Sits right after HOME.
                    if let Some(shop) = shop.take() {
                        bar = bar.push(shop);
                    }
                }
            }
            None => bar = bar.push(shop),
        }

        if self.multi_lang_enabled() {
            bar = bar.push(self.language_pills(lang, Message::LanguageSelected));
        }

        let page_toggle = match self.page {
            Page::Landing => button(text(tr(Label::NavAdmin, lang)).size(14.0))
                .style(theme::nav_button(false))
                .on_press(Message::ShowAdmin),
            Page::Admin => button(text(tr(Label::AdminBack, lang)).size(14.0))
                .style(theme::nav_button(false))
                .on_press(Message::ShowLanding),
        };
        bar = bar.push(page_toggle);

        container(bar)
            .padding([0, 24])
            .width(Length::Fill)
            .height(Length::Fixed(HEADER_HEIGHT_PX))
            .align_y(Vertical::Center)
            .style(theme::header)
            .into()
    }

    /// One pill per language; `selected` is highlighted.
    fn language_pills(
        &self,
        selected: Language,
        on_press: fn(Language) -> Message,
    ) -> Element<'_, Message> {
        Language::ALL
            .into_iter()
            .fold(row![].spacing(4), |pills, lang| {
                pills.push(
                    button(text(lang.code()).size(12.0))
                        .padding([2, 8])
                        .style(theme::pill_button(lang == selected))
                        .on_press(on_press(lang)),
                )
            })
            .into()
    }
}

fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Text with an optional drop shadow; the blur radius is not rendered.
fn shadowed_text<'a>(
    content: String,
    size: f32,
    color: Rgba,
    shadow: Option<TextShadow>,
) -> Element<'a, Message> {
    let front = text(content.clone())
        .size(size)
        .color(to_color(color))
        .align_x(Horizontal::Center);
    match shadow {
        None => front.into(),
        Some(shadow) => stack![
            container(
                text(content)
                    .size(size)
                    .color(to_color(shadow.color))
                    .align_x(Horizontal::Center)
            )
            .padding(Padding {
                top: shadow.offset_y,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            }),
            front,
        ]
        .into(),
    }
}

/// Picture or the fallback colour when nothing displayable is stored.
fn picture<'a>(handle: Option<Handle>, width: Length, height: Length) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle)
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new(width, height))
            .style(theme::filled(theme::IMAGE_FALLBACK))
            .into(),
    }
}

/// Hero block shared by the landing page and the editor preview. The image
/// layer hangs from the top edge and shows `1 + percent / 100` of its height.
#[allow(clippy::too_many_arguments)]
fn hero_block<'a>(
    props: VisualProps,
    width: Length,
    height: f32,
    background: Color,
    hero_image: Option<Handle>,
    title: String,
    subtitle: String,
    title_size: f32,
) -> Element<'a, Message> {
    let base = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::filled(background));

    let visible = height * (1.0 + props.image_position_percent / 100.0);
    let layer: Element<'a, Message> = if props.image_visible() && visible > 0.0 {
        column![container(picture(hero_image, Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(visible))
            .clip(true)]
        .into()
    } else {
        Space::new(Length::Fill, Length::Fill).into()
    };

    let copy = container(
        column![
            shadowed_text(title, title_size, props.title_color, props.text_shadow),
            shadowed_text(
                subtitle,
                (title_size * 0.45).max(12.0),
                props.subtitle_color,
                props.text_shadow
            ),
        ]
        .spacing(12)
        .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    container(stack![base, layer, copy])
        .width(width)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}
