use super::defaults;
use super::models::{AppConfig, LogLevel, PointerMode};
use serde::Deserialize;

/// Table names recognised at the top level of `config.toml`.
pub(super) const TABLE_NAMES: [&str; 6] = ["navigation", "window", "store", "admin", "logging", "keys"];

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    store: StoreConfig,
    #[serde(default)]
    admin: AdminConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            noise_threshold: tables.navigation.noise_threshold,
            section_duration_ms: tables.navigation.section_duration_ms,
            reveal_duration_ms: tables.navigation.reveal_duration_ms,
            scrub_sensitivity: tables.navigation.scrub_sensitivity,
            spy_fraction: tables.navigation.spy_fraction,
            keyboard_step_delta: tables.navigation.keyboard_step_delta,
            wheel_line_px: tables.navigation.wheel_line_px,
            pointer: tables.navigation.pointer,
            window_width: tables.window.width,
            window_height: tables.window.height,
            data_dir: tables.store.data_dir,
            poll_interval_ms: tables.store.poll_interval_ms,
            news_on_landing: tables.store.news_on_landing,
            admin_user: tables.admin.user,
            log_level: tables.logging.log_level,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_toggle_admin: tables.keys.toggle_admin,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            navigation: NavigationConfig {
                noise_threshold: config.noise_threshold,
                section_duration_ms: config.section_duration_ms,
                reveal_duration_ms: config.reveal_duration_ms,
                scrub_sensitivity: config.scrub_sensitivity,
                spy_fraction: config.spy_fraction,
                keyboard_step_delta: config.keyboard_step_delta,
                wheel_line_px: config.wheel_line_px,
                pointer: config.pointer,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            store: StoreConfig {
                data_dir: config.data_dir.clone(),
                poll_interval_ms: config.poll_interval_ms,
                news_on_landing: config.news_on_landing,
            },
            admin: AdminConfig {
                user: config.admin_user.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                next_section: config.key_next_section.clone(),
                prev_section: config.key_prev_section.clone(),
                toggle_admin: config.key_toggle_admin.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_noise_threshold")]
    noise_threshold: f32,
    #[serde(default = "defaults::default_section_duration_ms")]
    section_duration_ms: u64,
    #[serde(default = "defaults::default_reveal_duration_ms")]
    reveal_duration_ms: u64,
    #[serde(default = "defaults::default_scrub_sensitivity")]
    scrub_sensitivity: f32,
    #[serde(default = "defaults::default_spy_fraction")]
    spy_fraction: f32,
    #[serde(default = "defaults::default_keyboard_step_delta")]
    keyboard_step_delta: f32,
    #[serde(default = "defaults::default_wheel_line_px")]
    wheel_line_px: f32,
    #[serde(default)]
    pointer: PointerMode,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            noise_threshold: defaults::default_noise_threshold(),
            section_duration_ms: defaults::default_section_duration_ms(),
            reveal_duration_ms: defaults::default_reveal_duration_ms(),
            scrub_sensitivity: defaults::default_scrub_sensitivity(),
            spy_fraction: defaults::default_spy_fraction(),
            keyboard_step_delta: defaults::default_keyboard_step_delta(),
            wheel_line_px: defaults::default_wheel_line_px(),
            pointer: PointerMode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StoreConfig {
    #[serde(default = "defaults::default_data_dir")]
    data_dir: String,
    #[serde(default = "defaults::default_poll_interval_ms")]
    poll_interval_ms: u64,
    #[serde(default = "defaults::default_news_on_landing")]
    news_on_landing: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: defaults::default_data_dir(),
            poll_interval_ms: defaults::default_poll_interval_ms(),
            news_on_landing: defaults::default_news_on_landing(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AdminConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_toggle_admin")]
    toggle_admin: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            toggle_admin: defaults::default_key_toggle_admin(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
