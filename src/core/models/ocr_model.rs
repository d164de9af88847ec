use std::fmt;

/// The OCR strategies the backend knows how to run. Selection happens
/// client-side, inference happens entirely server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrModel {
    Trocr,
    EasyOcr,
    Tesseract,
    Donut,
    OcrVit,
}

impl OcrModel {
    pub const ALL: [OcrModel; 5] = [
        OcrModel::Trocr,
        OcrModel::EasyOcr,
        OcrModel::Tesseract,
        OcrModel::Donut,
        OcrModel::OcrVit,
    ];

    /// Value sent in the `model` query parameter, exactly as the backend
    /// expects it.
    pub fn wire_value(&self) -> &'static str {
        match self {
            OcrModel::Trocr => "trocr",
            OcrModel::EasyOcr => "easyocr",
            OcrModel::Tesseract => "tesseract",
            OcrModel::Donut => "donut",
            OcrModel::OcrVit => "ocrvit",
        }
    }
}

impl Default for OcrModel {
    fn default() -> Self {
        OcrModel::Trocr
    }
}

impl fmt::Display for OcrModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OcrModel::Trocr => "TrOCR",
            OcrModel::EasyOcr => "EasyOCR",
            OcrModel::Tesseract => "Tesseract",
            OcrModel::Donut => "Donut",
            OcrModel::OcrVit => "OCR-ViT",
        };
        write!(f, "{}", label)
    }
}
