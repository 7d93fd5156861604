use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_noise_threshold")]
    pub noise_threshold: f32,
    #[serde(default = "crate::config::defaults::default_section_duration_ms")]
    pub section_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_reveal_duration_ms")]
    pub reveal_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_scrub_sensitivity")]
    pub scrub_sensitivity: f32,
    #[serde(default = "crate::config::defaults::default_spy_fraction")]
    pub spy_fraction: f32,
    #[serde(default = "crate::config::defaults::default_keyboard_step_delta")]
    pub keyboard_step_delta: f32,
    #[serde(default = "crate::config::defaults::default_wheel_line_px")]
    pub wheel_line_px: f32,
    #[serde(default)]
    pub pointer: PointerMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_data_dir")]
    pub data_dir: String,
    #[serde(default = "crate::config::defaults::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_news_on_landing")]
    pub news_on_landing: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_user: Option<String>,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_section")]
    pub key_next_section: String,
    #[serde(default = "crate::config::defaults::default_key_prev_section")]
    pub key_prev_section: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_admin")]
    pub key_toggle_admin: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            noise_threshold: crate::config::defaults::default_noise_threshold(),
            section_duration_ms: crate::config::defaults::default_section_duration_ms(),
            reveal_duration_ms: crate::config::defaults::default_reveal_duration_ms(),
            scrub_sensitivity: crate::config::defaults::default_scrub_sensitivity(),
            spy_fraction: crate::config::defaults::default_spy_fraction(),
            keyboard_step_delta: crate::config::defaults::default_keyboard_step_delta(),
            wheel_line_px: crate::config::defaults::default_wheel_line_px(),
            pointer: PointerMode::Auto,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            data_dir: crate::config::defaults::default_data_dir(),
            poll_interval_ms: crate::config::defaults::default_poll_interval_ms(),
            news_on_landing: crate::config::defaults::default_news_on_landing(),
            admin_user: None,
            log_level: crate::config::defaults::default_log_level(),
            key_next_section: crate::config::defaults::default_key_next_section(),
            key_prev_section: crate::config::defaults::default_key_prev_section(),
            key_toggle_admin: crate::config::defaults::default_key_toggle_admin(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// How the wheel-intercept decides whether a fine pointer is present.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PointerMode {
    /// Precise until the first touch event arrives.
    Auto,
    Precise,
    Coarse,
}

impl Default for PointerMode {
    fn default() -> Self {
        PointerMode::Auto
    }
}

impl std::fmt::Display for PointerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PointerMode::Auto => "auto",
            PointerMode::Precise => "precise",
            PointerMode::Coarse => "coarse",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
