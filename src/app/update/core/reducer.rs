use super::super::super::messages::{Message, NewsScope};
use super::super::super::state::{App, EditorState, LandingState, Page, SiteImages};
use super::super::Effect;
use crate::config::PointerMode;
use crate::content::{SHOPS, SiteSettings};
use crate::i18n::Language;
use crate::navigation::PointerCapability;
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            // The shop overlay sits above the landing page.
            Message::LandingWheel(_) if self.shop_open => {}
            Message::LandingWheel(delta) => self.handle_landing_wheel(delta, &mut effects),
            Message::LandingScrolled {
                offset_y,
                viewport_height,
            } => self.handle_landing_scrolled(offset_y, viewport_height, &mut effects),
            Message::NavClicked(index) => self.handle_nav_clicked(index, &mut effects),
            Message::NextSection => self.handle_keyboard_step(1.0, &mut effects),
            Message::PreviousSection => self.handle_keyboard_step(-1.0, &mut effects),
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::TouchDetected => self.handle_touch_detected(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::LanguageSelected(language) => {
                self.handle_language_selected(language, &mut effects);
            }
            Message::ShowLanding => self.show_landing(&mut effects),
            Message::ShowAdmin => self.show_admin(&mut effects),
            Message::ToggleAdmin => match self.page {
                Page::Landing => self.show_admin(&mut effects),
                Page::Admin => self.show_landing(&mut effects),
            },
            Message::ShopOpened => self.handle_shop_toggled(true),
            Message::ShopClosed => self.handle_shop_toggled(false),
            Message::ShopLinkPressed(index) => self.handle_shop_link_pressed(index, &mut effects),
            Message::PollStore => self.handle_poll_store(&mut effects),
            Message::FingerprintChecked(result) => {
                self.handle_fingerprint_checked(result, &mut effects);
            }
            Message::SettingsLoaded {
                settings,
                fingerprint,
            } => self.handle_settings_loaded(settings, fingerprint),
            Message::NewsLoaded { scope, news } => self.handle_news_loaded(scope, news),
            Message::EditNewsFromLanding(id) => {
                self.handle_edit_news_from_landing(id, &mut effects);
            }
            Message::DeleteNews(id) => self.handle_delete_news(id, &mut effects),
            Message::EditorTabSelected(tab) => self.handle_editor_tab_selected(tab, &mut effects),
            Message::PreviewWheel(delta) => self.handle_preview_wheel(delta),
            Message::InputLanguageSelected(language) => {
                self.handle_input_language_selected(language);
            }
            Message::NewsTitleChanged(value) => self.handle_news_title_changed(value),
            Message::NewsContentChanged(value) => self.handle_news_content_changed(value),
            Message::NewsImagePathChanged(value) => self.handle_news_image_path_changed(value),
            Message::NewsSubmit => self.handle_news_submit(&mut effects),
            Message::NewsEditStarted(id) => self.handle_news_edit_started(id, &mut effects),
            Message::NewsEditCancelled => self.handle_news_edit_cancelled(),
            Message::InfoTextChanged(field, value) => self.handle_info_text_changed(field, value),
            Message::InfoFlagToggled(flag, value) => self.handle_info_flag_toggled(flag, value),
            Message::ScheduleDayToggled(day) => self.handle_schedule_day_toggled(day),
            Message::ScheduleAdd => self.handle_schedule_add(),
            Message::ScheduleRemove(index) => self.handle_schedule_remove(index),
            Message::InfoSubmit => self.handle_info_submit(&mut effects),
            Message::HeroTextChanged(field, value) => self.handle_hero_text_changed(field, value),
            Message::HeroImagePathChanged(slot, value) => {
                self.handle_hero_image_path_changed(slot, value);
            }
            Message::HeroSubmit => self.handle_hero_submit(&mut effects),
            Message::EditorSaved(result) => self.handle_editor_saved(result, &mut effects),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if (self.window_size.width - width).abs() < 0.5
            && (self.window_size.height - height).abs() < 0.5
        {
            return;
        }
        self.window_size = iced::Size::new(width, height);
        let viewport_height = self.landing_viewport_height();
        self.resize_landing(viewport_height, Instant::now(), effects);
    }

    fn handle_touch_detected(&mut self) {
        if self.config.pointer != PointerMode::Auto || self.pointer == PointerCapability::Coarse {
            return;
        }
        info!("Touch input seen; switching to native scrolling");
        self.pointer = PointerCapability::Coarse;
        if let Some(landing) = self.landing.as_mut() {
            landing.controller.set_pointer(PointerCapability::Coarse);
        }
    }

    fn handle_language_selected(&mut self, language: Language, effects: &mut Vec<Effect>) {
        if self.language == language {
            return;
        }
        debug!(%language, "Display language changed");
        self.language = language;
        effects.push(Effect::PersistLanguage(language));
    }

    fn handle_shop_toggled(&mut self, open: bool) {
        if self.shop_open != open {
            debug!(open, "Shop list toggled");
            self.shop_open = open;
        }
    }

    fn handle_shop_link_pressed(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(shop) = SHOPS.get(index) else {
            warn!(index, "Unknown shop link");
            return;
        };
        info!(shop = shop.name, url = shop.url, "Opening shop page");
        effects.push(Effect::OpenUrl(shop.url));
    }

    pub(in crate::app) fn show_landing(&mut self, effects: &mut Vec<Effect>) {
        if self.page == Page::Landing {
            return;
        }
        self.shop_open = false;
        self.editor = None;
        self.page = Page::Landing;
        self.mount_landing(effects);
    }

    pub(in crate::app) fn show_admin(&mut self, effects: &mut Vec<Effect>) {
        if self.page == Page::Admin {
            return;
        }
        self.shop_open = false;
        // Dropping the landing state detaches its controller.
        self.landing = None;
        self.page = Page::Admin;
        if !self.is_signed_in() {
            info!("Admin page opened without a signed-in user");
            return;
        }
        self.editor = Some(EditorState::new(
            self.settings.as_ref(),
            self.tuning.scrub_sensitivity,
        ));
        effects.push(Effect::ScrollEditorToTop);
        effects.push(Effect::LoadNews(NewsScope::Editor));
    }

    pub(in crate::app) fn mount_landing(&mut self, effects: &mut Vec<Effect>) {
        self.landing = Some(LandingState::mount(
            self.tuning,
            self.pointer,
            self.landing_viewport_height(),
        ));
        effects.push(Effect::ScrollLanding(0.0));
        effects.push(Effect::LoadNews(NewsScope::Landing));
    }

    fn handle_poll_store(&mut self, effects: &mut Vec<Effect>) {
        if !self.settings_loading {
            effects.push(Effect::CheckSettingsFingerprint);
        }
    }

    fn handle_fingerprint_checked(
        &mut self,
        result: Result<Option<String>, String>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(fingerprint) if fingerprint != self.settings_fingerprint => {
                debug!(
                    old = ?self.settings_fingerprint,
                    new = ?fingerprint,
                    "Settings record changed on disk"
                );
                effects.push(Effect::LoadSettings);
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "Settings fingerprint check failed"),
        }
    }

    fn handle_settings_loaded(
        &mut self,
        settings: Result<Option<SiteSettings>, String>,
        fingerprint: Option<String>,
    ) {
        self.settings_loading = false;
        match settings {
            Ok(settings) => {
                info!(
                    present = settings.is_some(),
                    multi_lang = settings.as_ref().is_some_and(|s| s.enable_multi_lang),
                    "Settings loaded"
                );
                self.images = SiteImages::from_settings(settings.as_ref());
                if let (Some(editor), Some(settings)) = (self.editor.as_mut(), settings.as_ref()) {
                    editor.seed(settings);
                }
                self.settings = settings;
                self.settings_fingerprint = fingerprint;
            }
            Err(err) => warn!(error = %err, "Failed to load settings; keeping previous"),
        }
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("SIGINT received; shutting down");
            effects.push(Effect::QuitSafely);
        }
    }
}
