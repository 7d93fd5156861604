pub(crate) fn default_noise_threshold() -> f32 {
    10.0
}

pub(crate) fn default_section_duration_ms() -> u64 {
    1000
}

pub(crate) fn default_reveal_duration_ms() -> u64 {
    1200
}

pub(crate) fn default_scrub_sensitivity() -> f32 {
    0.2
}

pub(crate) fn default_spy_fraction() -> f32 {
    1.0 / 3.0
}

pub(crate) fn default_keyboard_step_delta() -> f32 {
    100.0
}

pub(crate) fn default_wheel_line_px() -> f32 {
    40.0
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_data_dir() -> String {
    "data".to_string()
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    1000
}

pub(crate) fn default_news_on_landing() -> usize {
    5
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_section() -> String {
    "down".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "up".to_string()
}

pub(crate) fn default_key_toggle_admin() -> String {
    "ctrl+e".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "ctrl+q".to_string()
}
