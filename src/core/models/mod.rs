mod extract_error;
mod extraction;
mod ocr_model;
mod selected_image;

pub use extract_error::{ExtractError, ExtractErrorKind};
pub use extraction::{format_elapsed_seconds, ExtractionOutcome, RequestStatus};
pub use ocr_model::OcrModel;
pub use selected_image::SelectedImage;
