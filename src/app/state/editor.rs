use super::super::messages::{EditorTab, ImageSlot, InfoField, InfoFlag};
use super::constants::MESSAGE_TTL;
use crate::content::{
    AddressObj, DEFAULT_EMAIL, DEFAULT_PHONE, DEFAULT_SCHEDULE_TIME, HeroContent, HeroField,
    HeroText, Hours, HoursSchedule, NewsDraft, NewsItem, ScheduleEntry, SiteSettings, WEEKDAYS,
    full_address,
};
use crate::i18n::{Language, LocalizedText};
use crate::navigation::PreviewScrubController;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Weekdays a legacy single-string `hours` value is assumed to cover.
const LEGACY_HOURS_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Inline status line under the editor tabs.
#[derive(Debug, Clone)]
pub(crate) struct Flash {
    pub(crate) text: String,
    pub(crate) expires_at: Option<Instant>,
}

impl Flash {
    /// Stays until replaced; used while a write is in flight.
    pub(crate) fn pending(text: impl Into<String>) -> Self {
        Flash {
            text: text.into(),
            expires_at: None,
        }
    }

    pub(crate) fn transient(text: impl Into<String>, now: Instant) -> Self {
        Flash {
            text: text.into(),
            expires_at: Some(now + MESSAGE_TTL),
        }
    }

    pub(crate) fn expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

pub(crate) struct EditorState {
    pub(crate) tab: EditorTab,
    pub(crate) input_language: Language,
    pub(crate) scrub: PreviewScrubController,
    pub(crate) news: NewsForm,
    pub(crate) news_list: Vec<NewsItem>,
    pub(crate) news_loading: bool,
    pub(crate) info: InfoForm,
    pub(crate) hero: HeroForm,
    pub(crate) flash: Option<Flash>,
    pub(crate) saving: bool,
    /// Whether the info and hero forms were filled from a loaded record.
    pub(crate) seeded: bool,
}

impl EditorState {
    pub(crate) fn new(settings: Option<&SiteSettings>, scrub_sensitivity: f32) -> Self {
        EditorState {
            tab: EditorTab::default(),
            input_language: Language::Jp,
            scrub: PreviewScrubController::new(scrub_sensitivity),
            news: NewsForm::default(),
            news_list: Vec::new(),
            news_loading: false,
            info: InfoForm::from_settings(settings),
            hero: HeroForm::from_settings(settings),
            flash: None,
            saving: false,
            seeded: settings.is_some(),
        }
    }

    /// Fill the forms once the first settings record arrives.
    pub(crate) fn seed(&mut self, settings: &SiteSettings) {
        if self.seeded {
            return;
        }
        self.info = InfoForm::from_settings(Some(settings));
        self.hero = HeroForm::from_settings(Some(settings));
        self.seeded = true;
    }

    /// Language the text inputs write to; JP only unless multi-language
    /// input is switched on.
    pub(crate) fn active_input_language(&self) -> Language {
        if self.info.enable_multi_lang {
            self.input_language
        } else {
            Language::Jp
        }
    }

    pub(crate) fn is_editing_news(&self) -> bool {
        self.news.editing_id.is_some()
    }

    pub(crate) fn flash_pending(&self) -> bool {
        self.flash.as_ref().is_some_and(|flash| flash.expires_at.is_some())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NewsForm {
    pub(crate) editing_id: Option<String>,
    pub(crate) title: LocalizedText,
    pub(crate) content: LocalizedText,
    pub(crate) image_path: String,
    pub(crate) existing_image: Option<String>,
}

impl Default for NewsForm {
    fn default() -> Self {
        NewsForm {
            editing_id: None,
            title: LocalizedText::empty(),
            content: LocalizedText::empty(),
            image_path: String::new(),
            existing_image: None,
        }
    }
}

impl NewsForm {
    pub(crate) fn load(item: &NewsItem) -> Self {
        let draft = NewsDraft::from(item);
        NewsForm {
            editing_id: Some(item.id.clone()),
            title: draft.title,
            content: draft.content,
            image_path: String::new(),
            existing_image: draft.image_url,
        }
    }

    /// Draft with the stored image; a newly picked file replaces it after
    /// encoding.
    pub(crate) fn draft(&self) -> NewsDraft {
        NewsDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: self.existing_image.clone(),
        }
    }

    pub(crate) fn picked_image(&self) -> Option<PathBuf> {
        picked_path(&self.image_path)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InfoForm {
    pub(crate) logo_path: String,
    pub(crate) logo_url: Option<String>,
    pub(crate) today_closed: bool,
    pub(crate) holiday_closed: bool,
    pub(crate) enable_multi_lang: bool,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) schedule: Vec<ScheduleEntry>,
    pub(crate) selected_days: Vec<&'static str>,
    pub(crate) new_time: String,
    pub(crate) zip: String,
    pub(crate) prefecture: String,
    pub(crate) city: String,
    pub(crate) street: LocalizedText,
}

impl InfoForm {
    pub(crate) fn from_settings(settings: Option<&SiteSettings>) -> Self {
        let mut form = InfoForm {
            logo_path: String::new(),
            logo_url: None,
            today_closed: false,
            holiday_closed: false,
            enable_multi_lang: false,
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            schedule: Vec::new(),
            selected_days: Vec::new(),
            new_time: DEFAULT_SCHEDULE_TIME.to_string(),
            zip: String::new(),
            prefecture: String::new(),
            city: String::new(),
            street: LocalizedText::empty(),
        };
        let Some(settings) = settings else {
            return form;
        };

        form.logo_url = settings.logo_url.clone().filter(|url| !url.is_empty());
        form.today_closed = settings.today_closed;
        form.enable_multi_lang = settings.enable_multi_lang;
        if let Some(phone) = settings.phone.as_ref().filter(|p| !p.is_empty()) {
            form.phone = phone.clone();
        }
        if let Some(email) = settings.email.as_ref().filter(|e| !e.is_empty()) {
            form.email = email.clone();
        }
        match &settings.hours {
            Some(Hours::Structured(hours)) => {
                form.schedule = hours.schedule.clone();
                form.holiday_closed = hours.holiday_closed;
            }
            Some(Hours::Legacy(text)) => {
                form.schedule = vec![ScheduleEntry {
                    id: Some(1),
                    days: LEGACY_HOURS_DAYS.iter().map(|d| d.to_string()).collect(),
                    day: None,
                    time: text.clone(),
                }];
            }
            None => {}
        }
        if let Some(addr) = &settings.address_obj {
            form.zip = addr.zip.clone();
            form.prefecture = addr.prefecture.clone();
            form.city = addr.city.clone();
            form.street = LocalizedText::for_editing(Some(&addr.street));
        } else if let Some(address) = &settings.address {
            form.street = LocalizedText::for_editing(Some(&LocalizedText::Plain(address.clone())));
        }
        form
    }

    pub(crate) fn set_text(&mut self, field: InfoField, value: String, lang: Language) {
        match field {
            InfoField::LogoPath => self.logo_path = value,
            InfoField::Phone => self.phone = value,
            InfoField::Email => self.email = value,
            InfoField::Zip => self.zip = value,
            InfoField::Prefecture => self.prefecture = value,
            InfoField::City => self.city = value,
            InfoField::Street => self.street.set(lang, value),
            InfoField::ScheduleTime => self.new_time = value,
        }
    }

    pub(crate) fn set_flag(&mut self, flag: InfoFlag, value: bool) {
        match flag {
            InfoFlag::TodayClosed => self.today_closed = value,
            InfoFlag::HolidayClosed => self.holiday_closed = value,
            InfoFlag::EnableMultiLang => self.enable_multi_lang = value,
        }
    }

    pub(crate) fn toggle_day(&mut self, day: &'static str) {
        if let Some(pos) = self.selected_days.iter().position(|d| *d == day) {
            self.selected_days.remove(pos);
        } else {
            self.selected_days.push(day);
        }
    }

    /// Append a row for the selected days; no-op without a selection.
    pub(crate) fn add_schedule_entry(&mut self) -> bool {
        if self.selected_days.is_empty() || self.new_time.trim().is_empty() {
            return false;
        }
        let days = WEEKDAYS
            .iter()
            .filter(|day| self.selected_days.contains(day))
            .map(|day| day.to_string())
            .collect();
        let id = self
            .schedule
            .iter()
            .filter_map(|entry| entry.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.schedule.push(ScheduleEntry {
            id: Some(id),
            days,
            day: None,
            time: self.new_time.trim().to_string(),
        });
        self.selected_days.clear();
        true
    }

    pub(crate) fn remove_schedule_entry(&mut self, index: usize) {
        if index < self.schedule.len() {
            self.schedule.remove(index);
        }
    }

    pub(crate) fn picked_logo(&self) -> Option<PathBuf> {
        picked_path(&self.logo_path)
    }

    /// Record written with merge semantics; `heroContent` is left out so the
    /// stored one survives.
    pub(crate) fn to_settings(&self) -> SiteSettings {
        let address = AddressObj {
            zip: self.zip.clone(),
            prefecture: self.prefecture.clone(),
            city: self.city.clone(),
            street: self.street.clone(),
        };
        SiteSettings {
            logo_url: self.logo_url.clone(),
            address: Some(full_address(&address)),
            address_obj: Some(address),
            hours: Some(Hours::Structured(HoursSchedule {
                schedule: self.schedule.clone(),
                holiday_closed: self.holiday_closed,
            })),
            today_closed: self.today_closed,
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            enable_multi_lang: self.enable_multi_lang,
            hero_content: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HeroForm {
    pub(crate) text: HeroText,
    pub(crate) hero_image: Option<String>,
    pub(crate) about_image: Option<String>,
    pub(crate) hero_image_path: String,
    pub(crate) about_image_path: String,
    pub(crate) hero_preview: Option<Handle>,
    pub(crate) about_preview: Option<Handle>,
}

impl HeroForm {
    pub(crate) fn from_settings(settings: Option<&SiteSettings>) -> Self {
        let hero = settings.and_then(|settings| settings.hero_content.as_ref());
        HeroForm {
            text: HeroText::for_editing(hero.and_then(|hero| hero.hero_text.as_ref())),
            hero_image: hero.and_then(|hero| hero.hero_image.clone()),
            about_image: hero.and_then(|hero| hero.about_image.clone()),
            hero_image_path: String::new(),
            about_image_path: String::new(),
            hero_preview: None,
            about_preview: None,
        }
    }

    pub(crate) fn set_text(&mut self, field: HeroField, lang: Language, value: String) {
        self.text
            .field_mut(field)
            .get_or_insert_with(LocalizedText::empty)
            .set(lang, value);
    }

    /// Track the typed path; a path to an existing file previews directly.
    pub(crate) fn set_image_path(&mut self, slot: ImageSlot, value: String) {
        let preview = picked_path(&value).map(Handle::from_path);
        match slot {
            ImageSlot::Hero => {
                self.hero_image_path = value;
                self.hero_preview = preview;
            }
            ImageSlot::About => {
                self.about_image_path = value;
                self.about_preview = preview;
            }
        }
    }

    pub(crate) fn picked_image(&self, slot: ImageSlot) -> Option<PathBuf> {
        match slot {
            ImageSlot::Hero => picked_path(&self.hero_image_path),
            ImageSlot::About => picked_path(&self.about_image_path),
        }
    }

    pub(crate) fn to_hero_content(&self) -> HeroContent {
        HeroContent {
            hero_image: self.hero_image.clone(),
            about_image: self.about_image.clone(),
            hero_text: Some(self.text.clone()),
        }
    }

    /// Adopt what was just written and forget the picked files.
    pub(crate) fn saved(&mut self, hero: HeroContent) {
        self.hero_image = hero.hero_image;
        self.about_image = hero.about_image;
        self.hero_image_path.clear();
        self.about_image_path.clear();
        self.hero_preview = None;
        self.about_preview = None;
    }

    /// Copy for `field` resolved in `lang`, empty when unset.
    pub(crate) fn copy(&self, field: HeroField, lang: Language) -> &str {
        self.text.field(field).map(|text| text.get(lang)).unwrap_or("")
    }
}

fn picked_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    path.is_file().then(|| path.to_path_buf())
}
