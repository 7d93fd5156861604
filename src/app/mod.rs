mod messages;
mod state;
mod update;
mod view;

pub use state::{App, Launch};

use iced::{Size, window};

/// Open the shop window with the given store, identity and preferences.
pub fn run_app(launch: Launch) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(launch.config.window_width, launch.config.window_height),
        min_size: Some(Size::new(480.0, 360.0)),
        ..window::Settings::default()
    };

    iced::application("Atelier", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| crate::theme::site_theme())
        .run_with(move || App::bootstrap(launch))
}
