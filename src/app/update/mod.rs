use super::messages::NewsScope;
use crate::content::{HeroContent, NewsDraft, SiteSettings};
use crate::i18n::Language;
use std::path::PathBuf;

mod core;
mod editor;
mod landing;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    /// Write a controller sample to the landing scrollable.
    ScrollLanding(f32),
    ScrollEditorToTop,
    CheckSettingsFingerprint,
    LoadSettings,
    LoadNews(NewsScope),
    SaveNews {
        id: Option<String>,
        draft: NewsDraft,
        image: Option<PathBuf>,
    },
    DeleteNews(String),
    SaveInfo {
        settings: SiteSettings,
        logo: Option<PathBuf>,
    },
    SaveHero {
        hero: HeroContent,
        hero_image: Option<PathBuf>,
        about_image: Option<PathBuf>,
    },
    PersistLanguage(Language),
    OpenUrl(&'static str),
    QuitSafely,
}
