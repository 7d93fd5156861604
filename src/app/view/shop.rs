use super::super::messages::Message;
use super::super::state::App;
use crate::content::{SHOPS, ShopLink};
use crate::i18n::{Label, tr};
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{
    Space, button, column, container, horizontal_space, mouse_area, row, stack, text,
};
use iced::{Color, Element, Length, color, mouse};

const BADGE_PX: f32 = 50.0;

impl App {
    /// Shop list drawn over the whole window. Clicking outside the card
    /// closes it.
    pub(super) fn shop_overlay(&self) -> Element<'_, Message> {
        let lang = self.language;

        let backdrop = mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::backdrop),
        )
        .interaction(mouse::Interaction::Idle)
        .on_press(Message::ShopClosed);

        let close = button(text("×").size(24.0))
            .style(theme::nav_button(false))
            .on_press(Message::ShopClosed);
        let title = container(
            text(tr(Label::ShopModalTitle, lang))
                .size(26.0)
                .color(theme::PRIMARY),
        )
        .center_x(Length::Fill);

        let list = SHOPS
            .iter()
            .enumerate()
            .fold(column![].spacing(20), |list, (index, shop)| {
                list.push(shop_row(index, shop))
            });

        let card = mouse_area(
            container(column![row![horizontal_space(), close], title, list].spacing(16))
                .padding(40)
                .width(Length::Fill)
                .max_width(500.0)
                .style(theme::modal),
        )
        .interaction(mouse::Interaction::Idle);

        stack![backdrop, container(card).center(Length::Fill).padding(20)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn shop_row(index: usize, shop: &ShopLink) -> Element<'static, Message> {
    let brand = theme::parse_hex(shop.color);
    let badge = container(
        container(Space::new(Length::Fixed(16.0), Length::Fixed(16.0))).style(theme::round(brand)),
    )
    .center(Length::Fixed(BADGE_PX))
    .style(theme::round(Color { a: 0.125, ..brand }));

    let label = column![
        text(shop.name).size(19.0),
        text(shop.description).size(13.0).color(theme::MUTED),
    ]
    .spacing(4);

    button(
        row![
            badge,
            label,
            horizontal_space(),
            text("↗").size(18.0).color(color!(0xcccccc)),
        ]
        .spacing(15)
        .align_y(Vertical::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::shop_row)
    .on_press(Message::ShopLinkPressed(index))
    .into()
}
