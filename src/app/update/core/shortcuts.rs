use super::super::super::messages::Message;
use super::super::super::state::{App, Page};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowDown) => "down".to_string(),
            Key::Named(key::Named::ArrowUp) => "up".to_string(),
            Key::Named(key::Named::PageDown) => "pagedown".to_string(),
            Key::Named(key::Named::PageUp) => "pageup".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_safe_quit, "ctrl+q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_admin,
            "ctrl+e",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleAdmin)
        } else if self.shop_open {
            (pressed == "escape").then_some(Message::ShopClosed)
        } else if self.page != Page::Landing {
            None
        } else if Self::shortcut_matches(&self.config.key_next_section, "down", &pressed, modifiers)
            || Self::shortcut_matches("pagedown", "pagedown", &pressed, modifiers)
        {
            Some(Message::NextSection)
        } else if Self::shortcut_matches(&self.config.key_prev_section, "up", &pressed, modifiers)
            || Self::shortcut_matches("pageup", "pageup", &pressed, modifiers)
        {
            Some(Message::PreviousSection)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        let normalized = if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
        };
        normalized
            .replace("spacebar", "space")
            .replace("arrowdown", "down")
            .replace("arrowup", "up")
            .replace("page_down", "pagedown")
            .replace("page_up", "pageup")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_key_aliases() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
        assert_eq!(App::normalize_shortcut_token("ArrowDown", "x"), "down");
        assert_eq!(App::normalize_shortcut_token("", "ctrl+e"), "ctrl+e");
    }

    #[test]
    fn matches_ctrl_e_shortcut() {
        assert!(App::shortcut_matches("ctrl+e", "x", "e", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+e", "x", "e", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+q",
            "x",
            "q",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl", "ctrl", "ctrl", Modifiers::CTRL));
    }

    #[test]
    fn blank_binding_uses_fallback() {
        assert!(App::shortcut_matches(" ", "down", "down", Modifiers::empty()));
    }
}
