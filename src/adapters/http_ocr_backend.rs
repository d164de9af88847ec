use async_trait::async_trait;

use crate::core::interfaces::adapters::OcrBackend;
use crate::core::models::{ExtractError, OcrModel, SelectedImage};
use crate::global_constants;

/// Talks to the remote OCR service: one multipart POST per extraction,
/// no retries, no timeout beyond reqwest's defaults.
pub struct HttpOcrBackend {
    client: reqwest::Client,
    backend_origin: String,
}

impl HttpOcrBackend {
    pub fn new(backend_origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_origin,
        }
    }

    fn extract_endpoint(&self, model: OcrModel) -> String {
        format!(
            "{}{}?{}={}",
            self.backend_origin.trim_end_matches('/'),
            global_constants::EXTRACT_ENDPOINT_PATH,
            global_constants::MODEL_QUERY_PARAM,
            model.wire_value()
        )
    }

    fn text_from_body(body: &serde_json::Value) -> Result<String, ExtractError> {
        body[global_constants::RESPONSE_TEXT_FIELD]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ExtractError::MalformedResponse {
                message: format!(
                    "response body has no usable '{}' field",
                    global_constants::RESPONSE_TEXT_FIELD
                ),
            })
    }
}

#[async_trait]
impl OcrBackend for HttpOcrBackend {
    async fn extract_text(
        &self,
        image: &SelectedImage,
        model: OcrModel,
    ) -> Result<String, ExtractError> {
        let url = self.extract_endpoint(model);
        log::info!(
            "[HTTP_OCR] POST {} ({}, {} bytes)",
            url,
            image.file_name,
            image.byte_len()
        );

        let part = reqwest::multipart::Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone());
        let form =
            reqwest::multipart::Form::new().part(global_constants::MULTIPART_FILE_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::error!("[HTTP_OCR] Request failed: {}", e);
                ExtractError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("[HTTP_OCR] Backend answered with status {}", status);
            return Err(ExtractError::Backend {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| ExtractError::MalformedResponse {
                    message: format!("response body is not valid JSON: {}", e),
                })?;
        log::debug!("[HTTP_OCR] Response body: {}", body);

        let text = Self::text_from_body(&body)?;
        log::info!("[HTTP_OCR] Extraction succeeded, {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_endpoint_carries_each_model_wire_value() {
        let backend = HttpOcrBackend::new("http://127.0.0.1:8000".to_string());

        for model in OcrModel::ALL {
            let url = backend.extract_endpoint(model);
            assert_eq!(
                url,
                format!("http://127.0.0.1:8000/api/translate?model={}", model.wire_value())
            );
        }
    }

    #[test]
    fn test_extract_endpoint_trims_trailing_slash_from_origin() {
        let backend = HttpOcrBackend::new("http://ocr.example.com/".to_string());

        assert_eq!(
            backend.extract_endpoint(OcrModel::Tesseract),
            "http://ocr.example.com/api/translate?model=tesseract"
        );
    }

    #[test]
    fn test_text_from_body_reads_the_text_field() {
        let body = json!({ "text": "Hello" });

        assert_eq!(HttpOcrBackend::text_from_body(&body).unwrap(), "Hello");
    }

    #[test]
    fn test_text_from_body_rejects_missing_field() {
        let body = json!({ "result": "Hello" });

        let error = HttpOcrBackend::text_from_body(&body).unwrap_err();
        assert!(matches!(error, ExtractError::MalformedResponse { .. }));
    }

    #[test]
    fn test_text_from_body_rejects_non_string_field() {
        let body = json!({ "text": 42 });

        let error = HttpOcrBackend::text_from_body(&body).unwrap_err();
        assert!(matches!(error, ExtractError::MalformedResponse { .. }));
    }

    #[test]
    fn test_text_from_body_accepts_extra_fields() {
        let body = json!({ "text": "Hello", "confidence": 0.98 });

        assert_eq!(HttpOcrBackend::text_from_body(&body).unwrap(), "Hello");
    }
}
