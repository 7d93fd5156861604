use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Fixed header bar above the landing viewport.
pub(crate) const HEADER_HEIGHT_PX: f32 = 64.0;
/// Editor preview frame; holds the two preview sections stacked.
pub(crate) const PREVIEW_WIDTH_PX: f32 = 400.0;
pub(crate) const PREVIEW_SECTION_HEIGHT_PX: f32 = 250.0;
pub(crate) const NEWS_THUMB_PX: f32 = 100.0;
pub(crate) const CONTENT_MAX_WIDTH_PX: f32 = 1000.0;
/// Frame interval while a transition or reveal motion runs.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Check interval while only an editor message is waiting to expire.
pub(crate) const MESSAGE_CHECK_INTERVAL: Duration = Duration::from_millis(250);
pub(crate) const MESSAGE_TTL: Duration = Duration::from_secs(3);
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub(crate) static LANDING_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("landing-scroll"));
pub(crate) static EDITOR_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("editor-scroll"));
