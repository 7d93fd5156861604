//! Client-side preferences that survive restarts.
//!
//! Stored under `.cache/preferences.toml`. The only entry today is the
//! display language, kept under the `app_language` key.

use crate::i18n::Language;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".cache";

/// Load the persisted display language, if present and valid.
pub fn load_language(cache_dir: &Path) -> Option<Language> {
    let data = fs::read_to_string(preferences_path(cache_dir)).ok()?;
    let value: Preferences = toml::from_str(&data).ok()?;
    value.app_language
}

/// Persist the display language. Errors are ignored to keep the UI
/// responsive.
pub fn save_language(cache_dir: &Path, language: Language) {
    let path = preferences_path(cache_dir);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let entry = Preferences {
        app_language: Some(language),
    };
    if let Ok(contents) = toml::to_string(&entry) {
        if let Ok(mut file) = fs::File::create(path) {
            let _ = file.write_all(contents.as_bytes());
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Default)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app_language: Option<Language>,
}

fn preferences_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("preferences.toml")
}
