use super::models::AppConfig;
use super::tables::{ConfigTables, TABLE_NAMES};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load `config.toml`, falling back to defaults when the file is missing or
/// does not parse.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse either the tabled layout or a flat legacy file.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let table: toml::Table = toml::from_str(contents).context("config is not valid TOML")?;
    let tabled = TABLE_NAMES.iter().any(|name| table.contains_key(*name));
    let value = toml::Value::Table(table);

    if tabled {
        let tables: ConfigTables = value
            .try_into()
            .context("failed to read config tables")?;
        Ok(tables.into())
    } else {
        value
            .try_into::<AppConfig>()
            .context("failed to read flat config")
    }
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    let tables = ConfigTables::from(config);
    toml::to_string_pretty(&tables).context("failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, PointerMode};

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse_config("").expect("parse empty");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn tables_override_selected_fields() {
        let cfg = parse_config(
            r#"
[navigation]
noise_threshold = 4.0
section_duration_ms = 600
pointer = "coarse"

[store]
data_dir = "/srv/shop"

[admin]
user = "owner@example.com"

[keys]
toggle_admin = "ctrl+shift+a"
"#,
        )
        .expect("parse tables");

        assert_eq!(cfg.noise_threshold, 4.0);
        assert_eq!(cfg.section_duration_ms, 600);
        assert_eq!(cfg.reveal_duration_ms, 1200);
        assert_eq!(cfg.pointer, PointerMode::Coarse);
        assert_eq!(cfg.data_dir, "/srv/shop");
        assert_eq!(cfg.admin_user.as_deref(), Some("owner@example.com"));
        assert_eq!(cfg.key_toggle_admin, "ctrl+shift+a");
        assert_eq!(cfg.key_next_section, "down");
    }

    #[test]
    fn flat_legacy_layout_still_parses() {
        let cfg = parse_config(
            r#"
scrub_sensitivity = 0.5
log_level = "warn"
news_on_landing = 3
"#,
        )
        .expect("parse flat");
        assert_eq!(cfg.scrub_sensitivity, 0.5);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(cfg.news_on_landing, 3);
        assert_eq!(cfg.window_width, 1280.0);
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut cfg = AppConfig::default();
        cfg.section_duration_ms = 750;
        cfg.admin_user = Some("admin".to_string());
        cfg.pointer = PointerMode::Precise;

        let text = serialize_config(&cfg).expect("serialize");
        assert!(text.contains("[navigation]"));
        assert_eq!(parse_config(&text).expect("reparse"), cfg);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("navigation = [").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&dir.path().join("absent.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
