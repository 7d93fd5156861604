use super::{DocumentStore, StoreError, StoreResult};
use crate::content::{HeroContent, NewsDraft, NewsItem, SiteSettings};
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

const SETTINGS_DIR: &str = "settings";
const SETTINGS_FILE: &str = "general.json";
const NEWS_DIR: &str = "news";

/// Records as JSON files: `settings/general.json` and `news/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        info!(root = %root.display(), "Opened JSON document store");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    fn news_dir(&self) -> PathBuf {
        self.root.join(NEWS_DIR)
    }

    fn news_path(&self, id: &str) -> StoreResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.news_dir().join(format!("{id}.json")))
    }

    fn read_settings_object(&self) -> StoreResult<Map<String, Value>> {
        match read_json::<Value>(&self.settings_path())? {
            Some(Value::Object(map)) => Ok(map),
            Some(_) | None => Ok(Map::new()),
        }
    }

    fn read_news_file(&self, path: &Path) -> StoreResult<Option<NewsItem>> {
        let Some(mut item) = read_json::<NewsItem>(path)? else {
            return Ok(None);
        };
        if item.id.is_empty() {
            if let Some(stem) = path.file_stem() {
                item.id = stem.to_string_lossy().into_owned();
            }
        }
        Ok(Some(item))
    }
}

impl DocumentStore for JsonFileStore {
    fn load_settings(&self) -> StoreResult<Option<SiteSettings>> {
        read_json(&self.settings_path())
    }

    fn settings_fingerprint(&self) -> StoreResult<Option<String>> {
        let path = self.settings_path();
        match fs::read(&path) {
            Ok(bytes) => {
                let mut hasher = Sha256::new();
                hasher.update(&bytes);
                Ok(Some(format!("{:x}", hasher.finalize())))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn save_settings(&self, settings: &SiteSettings) -> StoreResult<()> {
        let path = self.settings_path();
        let mut stored = Value::Object(self.read_settings_object()?);
        let incoming = to_value(&path, settings)?;
        merge(&mut stored, incoming);
        write_json(&path, &stored)?;
        debug!(path = %path.display(), "Merged settings record");
        Ok(())
    }

    fn update_hero(&self, hero: &HeroContent) -> StoreResult<()> {
        let path = self.settings_path();
        let mut stored = self.read_settings_object()?;
        stored.insert("heroContent".to_string(), to_value(&path, hero)?);
        write_json(&path, &Value::Object(stored))?;
        debug!(path = %path.display(), "Replaced hero content");
        Ok(())
    }

    fn list_news(&self, limit: Option<usize>) -> StoreResult<Vec<NewsItem>> {
        let dir = self.news_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path: dir, source }),
        };

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match self.read_news_file(&path) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => {}
                Err(err) => warn!(path = %path.display(), "Skipping unreadable news record: {err}"),
            }
        }

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    fn add_news(&self, draft: NewsDraft) -> StoreResult<NewsItem> {
        let item = NewsItem {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            image_url: draft.image_url,
            created_at: Utc::now(),
            updated_at: None,
        };
        let path = self.news_path(&item.id)?;
        write_json(&path, &to_value(&path, &item)?)?;
        info!(id = %item.id, "Added news item");
        Ok(item)
    }

    fn update_news(&self, id: &str, draft: NewsDraft) -> StoreResult<NewsItem> {
        let path = self.news_path(id)?;
        let mut stored = match read_json::<Value>(&path)? {
            Some(value @ Value::Object(_)) => value,
            _ => return Err(StoreError::NotFound(id.to_string())),
        };
        let Some(mut item) = self.read_news_file(&path)? else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        item.title = draft.title;
        item.content = draft.content;
        item.image_url = draft.image_url;
        item.updated_at = Some(Utc::now());

        if let Value::Object(map) = &mut stored {
            // An edit that drops the image must drop the stored field too.
            map.remove("imageUrl");
        }
        merge(&mut stored, to_value(&path, &item)?);
        write_json(&path, &stored)?;
        info!(id, "Updated news item");
        Ok(item)
    }

    fn delete_news(&self, id: &str) -> StoreResult<()> {
        let path = self.news_path(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(id, "Deleted news item");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(id.to_string())),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// Deep merge: objects merge key by key, anything else is replaced.
fn merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, incoming) => *target = incoming,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn to_value<T: Serialize>(path: &Path, record: &T) -> StoreResult<Value> {
    serde_json::to_value(record).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a sibling temp file so readers never see a torn record.
fn write_json(path: &Path, value: &Value) -> StoreResult<()> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let contents = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HeroText, Hours, HoursSchedule};
    use crate::i18n::{Language, LocalizedText};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        (dir, store)
    }

    fn draft(title: &str) -> NewsDraft {
        NewsDraft {
            title: LocalizedText::from(title),
            content: LocalizedText::from("body"),
            image_url: None,
        }
    }

    fn write_news(store: &JsonFileStore, id: &str, minutes: i64) {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).single().expect("date")
            + Duration::minutes(minutes);
        let item = NewsItem {
            id: id.to_string(),
            title: LocalizedText::from(id),
            content: LocalizedText::from(""),
            image_url: None,
            created_at: created,
            updated_at: None,
        };
        let path = store.news_path(id).expect("path");
        write_json(&path, &serde_json::to_value(&item).expect("value")).expect("write");
    }

    #[test]
    fn missing_settings_are_none() {
        let (_dir, store) = store();
        assert_eq!(store.load_settings().expect("load"), None);
        assert_eq!(store.settings_fingerprint().expect("fingerprint"), None);
    }

    #[test]
    fn save_merges_and_keeps_unknown_fields() {
        let (_dir, store) = store();
        let path = store.settings_path();
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(
            &path,
            r#"{"legacyBanner":"keep me","phone":"old","heroContent":{"heroImage":"data:x","extra":1}}"#,
        )
        .expect("seed");

        let settings = SiteSettings {
            phone: Some("03-0000-0000".to_string()),
            today_closed: true,
            hours: Some(Hours::Structured(HoursSchedule::default())),
            ..SiteSettings::default()
        };
        store.save_settings(&settings).expect("save");

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(raw["legacyBanner"], "keep me");
        assert_eq!(raw["phone"], "03-0000-0000");
        assert_eq!(raw["todayClosed"], true);
        assert_eq!(raw["heroContent"]["heroImage"], "data:x");

        let loaded = store.load_settings().expect("load").expect("present");
        assert!(loaded.today_closed);
        assert_eq!(loaded.phone.as_deref(), Some("03-0000-0000"));
    }

    #[test]
    fn hero_update_replaces_only_hero_content() {
        let (_dir, store) = store();
        store
            .save_settings(&SiteSettings {
                email: Some("shop@example.com".to_string()),
                hero_content: Some(HeroContent {
                    about_image: Some("old-about".to_string()),
                    ..HeroContent::default()
                }),
                ..SiteSettings::default()
            })
            .expect("save");

        let hero = HeroContent {
            hero_image: Some("new-hero".to_string()),
            about_image: None,
            hero_text: Some(HeroText {
                hero_title: Some(LocalizedText::from("Hello")),
                ..HeroText::default()
            }),
        };
        store.update_hero(&hero).expect("update hero");

        let loaded = store.load_settings().expect("load").expect("present");
        assert_eq!(loaded.email.as_deref(), Some("shop@example.com"));
        assert_eq!(loaded.hero_content, Some(hero));
    }

    #[test]
    fn fingerprint_changes_on_write() {
        let (_dir, store) = store();
        store.save_settings(&SiteSettings::default()).expect("save");
        let first = store.settings_fingerprint().expect("fp").expect("present");
        assert_eq!(store.settings_fingerprint().expect("fp"), Some(first.clone()));

        store
            .save_settings(&SiteSettings {
                phone: Some("1".to_string()),
                ..SiteSettings::default()
            })
            .expect("save");
        let second = store.settings_fingerprint().expect("fp").expect("present");
        assert_ne!(first, second);
    }

    #[test]
    fn news_is_listed_newest_first_with_limit() {
        let (_dir, store) = store();
        for (id, minutes) in [("a", 0), ("b", 30), ("c", 10), ("d", 20)] {
            write_news(&store, id, minutes);
        }
        let ids = |items: Vec<NewsItem>| items.into_iter().map(|item| item.id).collect::<Vec<_>>();

        assert_eq!(ids(store.list_news(None).expect("list")), vec!["b", "d", "c", "a"]);
        assert_eq!(ids(store.list_news(Some(2)).expect("list")), vec!["b", "d"]);
    }

    #[test]
    fn add_update_delete_news() {
        let (_dir, store) = store();
        let added = store.add_news(draft("Opening day")).expect("add");
        assert_eq!(store.list_news(None).expect("list"), vec![added.clone()]);

        let mut edit = draft("Opening day (updated)");
        edit.image_url = Some("data:image/jpeg;base64,AAAA".to_string());
        let updated = store.update_news(&added.id, edit).expect("update");
        assert_eq!(updated.created_at, added.created_at);
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.title.resolve(Language::En), "Opening day (updated)");

        let listed = store.list_news(None).expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].image_url, updated.image_url);

        store.delete_news(&added.id).expect("delete");
        assert!(store.list_news(None).expect("list").is_empty());
        assert!(matches!(
            store.delete_news(&added.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_news_id_cannot_be_updated() {
        let (_dir, store) = store();
        assert!(matches!(
            store.update_news("missing", draft("x")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_news("../settings/general"),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn malformed_news_files_are_skipped() {
        let (_dir, store) = store();
        write_news(&store, "good", 0);
        fs::write(store.news_dir().join("bad.json"), "{not json").expect("write");
        let listed = store.list_news(None).expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "good");
    }
}
