mod constants;
mod editor;
mod landing;

use super::messages::Message;
use super::update::Effect;
use crate::auth::AuthProvider;
use crate::config::{AppConfig, PointerMode};
use crate::content::SiteSettings;
use crate::i18n::Language;
use crate::navigation::{NavigationTuning, PointerCapability};
use crate::store::DocumentStore;
use iced::{Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub(crate) use constants::*;
pub(crate) use editor::{EditorState, Flash, NewsForm};
pub(crate) use landing::{LandingState, SiteImages, data_uri_handle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Landing,
    Admin,
}

/// Core application state composed of focused sub-states.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) tuning: NavigationTuning,
    pub(super) store: Arc<dyn DocumentStore>,
    pub(super) auth: Arc<dyn AuthProvider>,
    pub(super) cache_dir: PathBuf,
    pub(super) language: Language,
    pub(super) page: Page,
    pub(super) pointer: PointerCapability,
    pub(super) window_size: Size,
    pub(super) settings: Option<SiteSettings>,
    pub(super) settings_fingerprint: Option<String>,
    pub(super) settings_loading: bool,
    pub(super) images: SiteImages,
    pub(super) landing: Option<LandingState>,
    pub(super) editor: Option<EditorState>,
    pub(super) shop_open: bool,
}

/// What the host-facing side of the app needs at launch.
pub struct Launch {
    pub config: AppConfig,
    pub store: Arc<dyn DocumentStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub cache_dir: PathBuf,
    pub language: Language,
}

impl App {
    pub(super) fn bootstrap(launch: Launch) -> (App, Task<Message>) {
        let Launch {
            config,
            store,
            auth,
            cache_dir,
            language,
        } = launch;
        let mut app = App::new(config, store, auth, cache_dir, language);

        let mut effects = vec![Effect::LoadSettings];
        app.mount_landing(&mut effects);
        info!(
            language = %app.language,
            pointer = ?app.pointer,
            signed_in = app.auth.is_signed_in(),
            "Bootstrapped app"
        );

        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub(super) fn new(
        config: AppConfig,
        store: Arc<dyn DocumentStore>,
        auth: Arc<dyn AuthProvider>,
        cache_dir: PathBuf,
        language: Language,
    ) -> App {
        App {
            tuning: NavigationTuning::from(&config),
            pointer: pointer_from_config(config.pointer),
            window_size: Size::new(config.window_width, config.window_height),
            config,
            store,
            auth,
            cache_dir,
            language,
            page: Page::Landing,
            settings: None,
            settings_fingerprint: None,
            settings_loading: false,
            images: SiteImages::default(),
            landing: None,
            editor: None,
            shop_open: false,
        }
    }

    /// Height of the landing viewport below the header.
    pub(super) fn landing_viewport_height(&self) -> f32 {
        (self.window_size.height - HEADER_HEIGHT_PX).max(1.0)
    }

    pub(super) fn multi_lang_enabled(&self) -> bool {
        self.settings
            .as_ref()
            .is_some_and(|settings| settings.enable_multi_lang)
    }

    pub(super) fn is_signed_in(&self) -> bool {
        self.auth.is_signed_in()
    }

    pub(super) fn is_animating(&self) -> bool {
        let now = std::time::Instant::now();
        self.landing.as_ref().is_some_and(|landing| {
            landing.controller.is_animating() || landing.reveal.is_moving(now)
        })
    }

    pub(super) fn flash_pending(&self) -> bool {
        self.editor.as_ref().is_some_and(EditorState::flash_pending)
    }
}

/// `Auto` starts out precise and drops to coarse on the first touch event.
pub(crate) fn pointer_from_config(mode: PointerMode) -> PointerCapability {
    match mode {
        PointerMode::Auto | PointerMode::Precise => PointerCapability::Precise,
        PointerMode::Coarse => PointerCapability::Coarse,
    }
}
