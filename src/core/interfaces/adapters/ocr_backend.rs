use async_trait::async_trait;

use crate::core::models::{ExtractError, OcrModel, SelectedImage};

/// The one outbound call this application makes. Implemented over HTTP in
/// production and mocked in tests.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    async fn extract_text(
        &self,
        image: &SelectedImage,
        model: OcrModel,
    ) -> Result<String, ExtractError>;
}
