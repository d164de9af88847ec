#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "OCR Desk";
pub const APPLICATION_TITLE: &str = "OCR Desk";

pub const BACKEND_ORIGIN_ENV_VAR: &str = "OCR_BACKEND_ORIGIN";
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://127.0.0.1:8000";

pub const EXTRACT_ENDPOINT_PATH: &str = "/api/translate";
pub const MODEL_QUERY_PARAM: &str = "model";
pub const MULTIPART_FILE_FIELD: &str = "file";
pub const RESPONSE_TEXT_FIELD: &str = "text";

pub const IMAGE_FILE_FILTER_NAME: &str = "Images";
pub const IMAGE_FILE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "ocr-desk";

pub const MISSING_IMAGE_NOTICE: &str = "Please upload an image.";

pub const TOAST_VISIBLE_MILLIS: u64 = 2000;

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_HTTP_OCR: &str = "[HTTP_OCR]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
