use crate::content::{HeroContent, HeroField, NewsItem, SiteSettings};
use crate::i18n::Language;
use iced::keyboard::{Key, Modifiers};
use iced::mouse::ScrollDelta;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    LandingWheel(ScrollDelta),
    LandingScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    NavClicked(usize),
    Tick(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    TouchDetected,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    NextSection,
    PreviousSection,
    LanguageSelected(Language),
    ShowLanding,
    ShowAdmin,
    ToggleAdmin,
    ShopOpened,
    ShopClosed,
    /// Index into `content::SHOPS`.
    ShopLinkPressed(usize),
    PollStore,
    FingerprintChecked(Result<Option<String>, String>),
    SettingsLoaded {
        settings: Result<Option<SiteSettings>, String>,
        fingerprint: Option<String>,
    },
    NewsLoaded {
        scope: NewsScope,
        news: Result<Vec<NewsItem>, String>,
    },
    EditNewsFromLanding(String),
    DeleteNews(String),
    EditorTabSelected(EditorTab),
    PreviewWheel(ScrollDelta),
    InputLanguageSelected(Language),
    NewsTitleChanged(String),
    NewsContentChanged(String),
    NewsImagePathChanged(String),
    NewsSubmit,
    NewsEditStarted(String),
    NewsEditCancelled,
    InfoTextChanged(InfoField, String),
    InfoFlagToggled(InfoFlag, bool),
    ScheduleDayToggled(&'static str),
    ScheduleAdd,
    ScheduleRemove(usize),
    InfoSubmit,
    HeroTextChanged(HeroField, String),
    HeroImagePathChanged(ImageSlot, String),
    HeroSubmit,
    EditorSaved(Result<SaveOutcome, String>),
    PollSystemSignals,
    SafeQuit,
}

/// Which list a news fetch fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsScope {
    Landing,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    News,
    Info,
    Hero,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [EditorTab::News, EditorTab::Info, EditorTab::Hero];
}

/// Single-line text inputs of the info tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    LogoPath,
    Phone,
    Email,
    Zip,
    Prefecture,
    City,
    Street,
    ScheduleTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFlag {
    TodayClosed,
    HolidayClosed,
    EnableMultiLang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Hero,
    About,
}

/// What a finished editor write changed.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    NewsAdded,
    NewsUpdated,
    NewsDeleted,
    Info { logo_url: Option<String> },
    Hero(HeroContent),
}
