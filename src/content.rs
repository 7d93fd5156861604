//! Site content records and the display helpers derived from them.
//!
//! Field names follow the stored JSON (camelCase, except the hero text keys).
//! Every optional field is skipped when absent so a merge-save never writes
//! `null` over a value another editor tab owns.

use crate::i18n::{Label, Language, LocalizedText, tr};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weekday keys in display order.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const DEFAULT_PHONE: &str = "03-1234-5678";
pub const DEFAULT_EMAIL: &str = "contact@mixshop.jp";
pub const DEFAULT_SCHEDULE_TIME: &str = "10:00 - 18:00";

/// Where the shop is listed online.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const SHOPS: [ShopLink; 3] = [
    ShopLink {
        name: "Mercari",
        url: "https://jp.mercari.com/",
        description: "Vintage & Materials",
        color: "#EA3932",
    },
    ShopLink {
        name: "Creema",
        url: "https://www.creema.jp/",
        description: "Handmade Market",
        color: "#F68F2E",
    },
    ShopLink {
        name: "Minne",
        url: "https://minne.com/",
        description: "Japan No.1 DIY",
        color: "#D97559",
    },
];

pub const FOOTER_PLACE: &str = "Nippori Textile Town";

pub fn copyright_line(year: i32) -> String {
    format!("© {year} mixshop.jp. All rights reserved.")
}

/// The `settings/general` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_obj: Option<AddressObj>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Hours>,
    #[serde(default)]
    pub today_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub enable_multi_lang: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_content: Option<HeroContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressObj {
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub prefecture: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: LocalizedText,
}

/// Opening hours: a legacy free-form string or a structured schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hours {
    Legacy(String),
    Structured(HoursSchedule),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursSchedule {
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub holiday_closed: bool,
}

/// One schedule row. Older records carry a single `day` instead of `days`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default)]
    pub time: String,
}

impl ScheduleEntry {
    pub fn open_days(&self) -> Vec<&str> {
        if self.days.is_empty() {
            self.day.as_deref().into_iter().collect()
        } else {
            self.days.iter().map(String::as_str).collect()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_text: Option<HeroText>,
}

/// Editable landing copy. Keys stay snake_case in storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_title: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_desc1: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_desc2: Option<LocalizedText>,
}

/// Which piece of landing copy, used to pick a stored override or the
/// built-in string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
    HeroTitle,
    HeroSubtitle,
    AboutTitle,
    AboutDesc1,
    AboutDesc2,
}

impl HeroField {
    pub const ALL: [HeroField; 5] = [
        HeroField::HeroTitle,
        HeroField::HeroSubtitle,
        HeroField::AboutTitle,
        HeroField::AboutDesc1,
        HeroField::AboutDesc2,
    ];

    pub fn fallback(self) -> Label {
        match self {
            HeroField::HeroTitle => Label::HeroTitle,
            HeroField::HeroSubtitle => Label::HeroSubtitle,
            HeroField::AboutTitle => Label::AboutTitle,
            HeroField::AboutDesc1 => Label::AboutDesc1,
            HeroField::AboutDesc2 => Label::AboutDesc2,
        }
    }
}

impl HeroText {
    pub fn field(&self, field: HeroField) -> Option<&LocalizedText> {
        match field {
            HeroField::HeroTitle => self.hero_title.as_ref(),
            HeroField::HeroSubtitle => self.hero_subtitle.as_ref(),
            HeroField::AboutTitle => self.about_title.as_ref(),
            HeroField::AboutDesc1 => self.about_desc1.as_ref(),
            HeroField::AboutDesc2 => self.about_desc2.as_ref(),
        }
    }

    pub fn field_mut(&mut self, field: HeroField) -> &mut Option<LocalizedText> {
        match field {
            HeroField::HeroTitle => &mut self.hero_title,
            HeroField::HeroSubtitle => &mut self.hero_subtitle,
            HeroField::AboutTitle => &mut self.about_title,
            HeroField::AboutDesc1 => &mut self.about_desc1,
            HeroField::AboutDesc2 => &mut self.about_desc2,
        }
    }

    /// Every field in the per-language shape the editor works on.
    pub fn for_editing(stored: Option<&HeroText>) -> HeroText {
        let mut text = HeroText::default();
        for field in HeroField::ALL {
            let current = stored.and_then(|stored| stored.field(field));
            *text.field_mut(field) = Some(LocalizedText::for_editing(current));
        }
        text
    }
}

/// A document in the `news` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editor input for creating or replacing a news item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDraft {
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub image_url: Option<String>,
}

impl From<&NewsItem> for NewsDraft {
    fn from(item: &NewsItem) -> Self {
        NewsDraft {
            title: LocalizedText::for_editing(Some(&item.title)),
            content: LocalizedText::for_editing(Some(&item.content)),
            image_url: item.image_url.clone(),
        }
    }
}

/// Weekdays not covered by any schedule entry, in `Mon..Sun` order.
pub fn closed_days(schedule: &[ScheduleEntry]) -> Vec<&'static str> {
    WEEKDAYS
        .iter()
        .copied()
        .filter(|day| {
            !schedule
                .iter()
                .any(|entry| entry.open_days().contains(day))
        })
        .collect()
}

/// Postal address line for the info section.
pub fn display_address(settings: Option<&SiteSettings>, lang: Language) -> String {
    let Some(settings) = settings else {
        return tr(Label::InfoLocValue, lang).to_string();
    };
    if let Some(addr) = &settings.address_obj {
        return format!(
            "〒{} {} {} {}",
            addr.zip,
            addr.prefecture,
            addr.city,
            addr.street.resolve(lang)
        );
    }
    match settings.address.as_deref() {
        Some(address) if !address.is_empty() => address.to_string(),
        _ => tr(Label::InfoLocValue, lang).to_string(),
    }
}

/// The `address` string written next to `addressObj` on save.
pub fn full_address(addr: &AddressObj) -> String {
    format!(
        "〒{} {} {} {}",
        addr.zip,
        addr.prefecture,
        addr.city,
        addr.street.get(Language::Jp)
    )
}

/// What the hours block of the info section shows.
#[derive(Debug, Clone, PartialEq)]
pub enum HoursDisplay {
    TodayClosed,
    Text(String),
    Schedule {
        rows: Vec<(String, String)>,
        closed: Vec<&'static str>,
        holiday_closed: bool,
    },
}

pub fn hours_display(settings: Option<&SiteSettings>, lang: Language) -> HoursDisplay {
    let Some(hours) = settings.and_then(|settings| settings.hours.as_ref()) else {
        return HoursDisplay::Text(tr(Label::InfoHoursValue, lang).to_string());
    };
    if settings.is_some_and(|settings| settings.today_closed) {
        return HoursDisplay::TodayClosed;
    }
    match hours {
        Hours::Legacy(text) if text.is_empty() => {
            HoursDisplay::Text(tr(Label::InfoHoursValue, lang).to_string())
        }
        Hours::Legacy(text) => HoursDisplay::Text(text.clone()),
        Hours::Structured(schedule) => HoursDisplay::Schedule {
            rows: schedule
                .schedule
                .iter()
                .map(|entry| (entry.open_days().join(", "), entry.time.clone()))
                .collect(),
            closed: closed_days(&schedule.schedule),
            holiday_closed: schedule.holiday_closed,
        },
    }
}

/// Stored hero copy for `field`, or the built-in string when unset or blank.
pub fn hero_copy(settings: Option<&SiteSettings>, field: HeroField, lang: Language) -> String {
    settings
        .and_then(|settings| settings.hero_content.as_ref())
        .and_then(|hero| hero.hero_text.as_ref())
        .and_then(|text| text.field(field))
        .map(|text| text.resolve(lang))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| tr(field.fallback(), lang))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(days: &[&str], time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: None,
            days: days.iter().map(|d| d.to_string()).collect(),
            day: None,
            time: time.to_string(),
        }
    }

    #[test]
    fn shop_links_are_https_with_brand_colours() {
        assert_eq!(SHOPS.map(|shop| shop.name), ["Mercari", "Creema", "Minne"]);
        for shop in SHOPS {
            assert!(shop.url.starts_with("https://"), "{}", shop.name);
            assert_ne!(crate::theme::parse_hex(shop.color), crate::theme::BACKGROUND);
        }
    }

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "© 2026 mixshop.jp. All rights reserved.");
    }

    #[test]
    fn closed_days_are_the_uncovered_weekdays() {
        let schedule = vec![
            entry(&["Mon", "Tue", "Thu", "Fri"], "10:00 - 18:00"),
            entry(&["Sat"], "11:00 - 17:00"),
        ];
        assert_eq!(closed_days(&schedule), vec!["Wed", "Sun"]);
        assert_eq!(closed_days(&[]), WEEKDAYS.to_vec());
    }

    #[test]
    fn legacy_single_day_entries_count_as_open() {
        let settings: SiteSettings = serde_json::from_str(
            r#"{"hours":{"schedule":[{"day":"Mon","time":"9-5"},{"days":["Tue","Wed","Thu","Fri","Sat","Sun"],"time":"10-6"}]}}"#,
        )
        .expect("parse");
        let Some(Hours::Structured(hours)) = settings.hours else {
            panic!("expected structured hours");
        };
        assert!(closed_days(&hours.schedule).is_empty());
        assert_eq!(hours.schedule[0].open_days(), vec!["Mon"]);
    }

    #[test]
    fn legacy_hours_string_is_shown_as_is() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"hours":"10:00-19:00 daily"}"#).expect("parse");
        assert_eq!(
            hours_display(Some(&settings), Language::En),
            HoursDisplay::Text("10:00-19:00 daily".to_string())
        );
    }

    #[test]
    fn today_closed_overrides_schedule() {
        let settings = SiteSettings {
            today_closed: true,
            hours: Some(Hours::Structured(HoursSchedule {
                schedule: vec![entry(&["Mon"], "10-18")],
                holiday_closed: true,
            })),
            ..SiteSettings::default()
        };
        assert_eq!(hours_display(Some(&settings), Language::Jp), HoursDisplay::TodayClosed);
    }

    #[test]
    fn missing_hours_use_builtin_text() {
        assert_eq!(
            hours_display(None, Language::En),
            HoursDisplay::Text("10:00 - 18:00 (Closed Wed)".to_string())
        );
    }

    #[test]
    fn structured_hours_list_rows_and_closed_days() {
        let settings = SiteSettings {
            hours: Some(Hours::Structured(HoursSchedule {
                schedule: vec![entry(&["Mon", "Tue", "Wed", "Thu", "Fri"], "10:00 - 18:00")],
                holiday_closed: true,
            })),
            ..SiteSettings::default()
        };
        let HoursDisplay::Schedule {
            rows,
            closed,
            holiday_closed,
        } = hours_display(Some(&settings), Language::En)
        else {
            panic!("expected schedule");
        };
        assert_eq!(rows, vec![("Mon, Tue, Wed, Thu, Fri".to_string(), "10:00 - 18:00".to_string())]);
        assert_eq!(closed, vec!["Sat", "Sun"]);
        assert!(holiday_closed);
    }

    #[test]
    fn address_prefers_structured_then_legacy_then_builtin() {
        let mut settings = SiteSettings {
            address: Some("Old address".to_string()),
            ..SiteSettings::default()
        };
        assert_eq!(display_address(Some(&settings), Language::En), "Old address");

        settings.address_obj = Some(AddressObj {
            zip: "110-0005".to_string(),
            prefecture: "東京都".to_string(),
            city: "台東区".to_string(),
            street: serde_json::from_str(r#"{"JP":"上野 1-2","EN":"Ueno 1-2"}"#).expect("street"),
        });
        assert_eq!(
            display_address(Some(&settings), Language::En),
            "〒110-0005 東京都 台東区 Ueno 1-2"
        );
        assert_eq!(
            full_address(settings.address_obj.as_ref().expect("address")),
            "〒110-0005 東京都 台東区 上野 1-2"
        );

        assert_eq!(
            display_address(None, Language::Jp),
            "東京都渋谷区神宮前 1-2-3"
        );
    }

    #[test]
    fn hero_copy_falls_back_to_builtin_when_blank() {
        let mut settings = SiteSettings::default();
        assert_eq!(
            hero_copy(Some(&settings), HeroField::AboutTitle, Language::En),
            "Our Philosophy"
        );

        settings.hero_content = Some(HeroContent {
            hero_text: Some(HeroText {
                hero_title: Some(LocalizedText::from("Handmade")),
                about_title: Some(LocalizedText::empty()),
                ..HeroText::default()
            }),
            ..HeroContent::default()
        });
        assert_eq!(
            hero_copy(Some(&settings), HeroField::HeroTitle, Language::Kr),
            "Handmade"
        );
        assert_eq!(
            hero_copy(Some(&settings), HeroField::AboutTitle, Language::En),
            "Our Philosophy"
        );
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let json = serde_json::to_value(SiteSettings {
            phone: Some("0".to_string()),
            ..SiteSettings::default()
        })
        .expect("serialize");
        let object = json.as_object().expect("object");
        assert!(object.contains_key("phone"));
        assert!(!object.contains_key("heroContent"));
        assert!(!object.contains_key("logoUrl"));
    }
}
