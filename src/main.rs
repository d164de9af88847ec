#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod app_theme;
mod core;
mod global_constants;
mod user_settings;

#[cfg(test)]
mod app_theme_tests;

use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    iced::application(
        app::ExtractorApp::build,
        app::ExtractorApp::handle_update,
        app::ExtractorApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::ExtractorApp::theme)
    .window_size(Size::new(860.0, 640.0))
    .run()
}
