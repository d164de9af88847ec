use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::HttpOcrBackend;
use crate::app_theme;
use crate::core::orchestrators::extraction_orchestrator::{
    ExtractionOrchestrator, ExtractorMessage,
};
use crate::user_settings::UserSettings;

pub struct ExtractorApp {
    orchestrator: ExtractionOrchestrator,
}

impl ExtractorApp {
    pub fn build() -> (Self, Task<ExtractorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let backend_origin = settings.resolved_backend_origin();
        log::info!("[APP] Using OCR backend at {}", backend_origin);

        let backend = Arc::new(HttpOcrBackend::new(backend_origin));
        let orchestrator = ExtractionOrchestrator::build(backend, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: ExtractorMessage) -> Task<ExtractorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, ExtractorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(self.orchestrator.theme_mode())
    }
}
