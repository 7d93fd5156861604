//! Site palette and the iced theme built from it.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme, color};

pub const PRIMARY: Color = color!(0x5d4037);
pub const ACCENT: Color = color!(0xd84315);
pub const BACKGROUND: Color = color!(0xfdfbf7);
pub const TEXT: Color = color!(0x333333);
pub const MUTED: Color = color!(0x888888);
pub const DANGER: Color = color!(0xdd3333);
pub const CARD: Color = color!(0xffffff);
pub const PANEL: Color = color!(0xf9f9f9);
/// Shown where an image cannot be displayed (remote URL or nothing stored).
pub const IMAGE_FALLBACK: Color = color!(0x8b4513);

pub fn site_theme() -> Theme {
    Theme::custom(
        "Atelier".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: PRIMARY,
            success: color!(0x2e7d32),
            danger: DANGER,
        },
    )
}

/// `#rrggbb` to a colour; anything else falls back to the page background.
pub fn parse_hex(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return BACKGROUND;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => Color::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => BACKGROUND,
    }
}

pub fn filled(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD)),
        border: Border {
            color: color!(0xeeeeee),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.95,
            ..BACKGROUND
        })),
        border: Border {
            color: color!(0xeeeeee),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Circle (at the sizes it is used) filled with `background`.
pub fn round(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dimmed layer behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.5,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD)),
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Fixed footer strip; same translucent paper as the header.
pub fn footer(theme: &Theme) -> container::Style {
    header(theme)
}

/// Row in the shop list.
pub fn shop_row(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => color!(0xf3f0ea),
            _ => color!(0xfafafa),
        })),
        text_color: TEXT,
        border: Border {
            color: color!(0xeeeeee),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..button::Style::default()
    }
}

/// Flat text button; `active` marks the current nav entry or selection.
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = match (active, status) {
            (true, _) => PRIMARY,
            (false, button::Status::Hovered) => PRIMARY,
            (false, button::Status::Disabled) => MUTED,
            (false, _) => TEXT,
        };
        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}

/// Small pill used by the language switchers and the editor tabs.
pub fn pill_button(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(Background::Color(if selected { PRIMARY } else { CARD })),
        text_color: if selected { Color::WHITE } else { TEXT },
        border: Border {
            color: color!(0xdddddd),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: if matches!(status, button::Status::Hovered) {
            ACCENT
        } else {
            DANGER
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_section_backgrounds() {
        assert_eq!(parse_hex("#ffffff"), Color::WHITE);
        assert_eq!(parse_hex("#5d4037"), PRIMARY);
        assert_eq!(parse_hex("f5f5f5"), Color::from_rgb8(0xf5, 0xf5, 0xf5));
    }

    #[test]
    fn malformed_colours_fall_back_to_background() {
        assert_eq!(parse_hex("#fff"), BACKGROUND);
        assert_eq!(parse_hex("#zzzzzz"), BACKGROUND);
    }
}
