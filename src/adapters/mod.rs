mod http_ocr_backend;

pub use http_ocr_backend::HttpOcrBackend;
