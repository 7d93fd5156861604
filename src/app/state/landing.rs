use crate::content::{NewsItem, SiteSettings};
use crate::image_encode::decode_data_uri;
use crate::navigation::visuals::RevealAnimation;
use crate::navigation::{
    NavigationTuning, PointerCapability, SectionRegistry, SectionScrollController,
    landing_sections,
};
use iced::widget::image::Handle;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Everything that only lives while the landing page is mounted.
pub(crate) struct LandingState {
    pub(crate) controller: SectionScrollController,
    pub(crate) reveal: RevealAnimation,
    pub(crate) viewport_height: f32,
    pub(crate) news: Vec<NewsItem>,
    pub(crate) news_images: HashMap<String, Handle>,
    pub(crate) news_loading: bool,
}

impl LandingState {
    pub(crate) fn mount(
        tuning: NavigationTuning,
        pointer: PointerCapability,
        viewport_height: f32,
    ) -> Self {
        let mut registry = SectionRegistry::new(landing_sections(), tuning.spy_fraction);
        registry.measure_uniform(viewport_height);
        debug!(viewport_height, ?pointer, "Mounted landing sections");
        LandingState {
            controller: SectionScrollController::new(registry, tuning, pointer),
            reveal: RevealAnimation::new(),
            viewport_height,
            news: Vec::new(),
            news_images: HashMap::new(),
            news_loading: true,
        }
    }

    pub(crate) fn set_news(&mut self, news: Vec<NewsItem>) {
        self.news_images = news
            .iter()
            .filter_map(|item| {
                let uri = item.image_url.as_deref()?;
                Some((item.id.clone(), data_uri_handle(uri)?))
            })
            .collect();
        self.news = news;
        self.news_loading = false;
    }
}

impl Drop for LandingState {
    fn drop(&mut self) {
        self.controller.detach();
    }
}

/// Decoded images from the settings record.
#[derive(Debug, Clone, Default)]
pub(crate) struct SiteImages {
    pub(crate) logo: Option<Handle>,
    pub(crate) hero: Option<Handle>,
    pub(crate) about: Option<Handle>,
}

impl SiteImages {
    pub(crate) fn from_settings(settings: Option<&SiteSettings>) -> Self {
        let Some(settings) = settings else {
            return SiteImages::default();
        };
        let hero = settings.hero_content.as_ref();
        SiteImages {
            logo: settings.logo_url.as_deref().and_then(data_uri_handle),
            hero: hero
                .and_then(|hero| hero.hero_image.as_deref())
                .and_then(data_uri_handle),
            about: hero
                .and_then(|hero| hero.about_image.as_deref())
                .and_then(data_uri_handle),
        }
    }
}

/// Display handle for an inline image. Remote URLs and empty values yield
/// `None` and the view paints the fallback colour instead.
pub(crate) fn data_uri_handle(uri: &str) -> Option<Handle> {
    if uri.is_empty() || !uri.starts_with("data:") {
        return None;
    }
    match decode_data_uri(uri) {
        Ok(bytes) => Some(Handle::from_bytes(bytes)),
        Err(err) => {
            warn!(error = %err, "Skipping undecodable inline image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HeroContent;

    #[test]
    fn remote_and_empty_images_have_no_handle() {
        assert!(data_uri_handle("").is_none());
        assert!(data_uri_handle("https://example.com/hero.jpg").is_none());
        assert!(data_uri_handle("data:image/jpeg;base64,%%%").is_none());
        assert!(data_uri_handle("data:image/jpeg;base64,AAEC").is_some());
    }

    #[test]
    fn site_images_follow_settings() {
        let settings = SiteSettings {
            logo_url: Some("https://cdn.example.com/logo.png".into()),
            hero_content: Some(HeroContent {
                hero_image: Some("data:image/jpeg;base64,AAEC".into()),
                about_image: None,
                hero_text: None,
            }),
            ..SiteSettings::default()
        };
        let images = SiteImages::from_settings(Some(&settings));
        assert!(images.logo.is_none());
        assert!(images.hero.is_some());
        assert!(images.about.is_none());
    }

    #[test]
    fn mounting_measures_one_section_per_viewport() {
        let landing = LandingState::mount(
            NavigationTuning::default(),
            PointerCapability::Precise,
            600.0,
        );
        let registry = landing.controller.registry();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.offset_of(2), Some(1200.0));
        assert!(landing.news_loading);
    }
}
