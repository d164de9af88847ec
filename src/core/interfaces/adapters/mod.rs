mod ocr_backend;

pub use ocr_backend::OcrBackend;
