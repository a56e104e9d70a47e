//! External text-recognition collaborator.
//!
//! The parsing core only ever sees the raw text a recognizer returns; the
//! network call, its timeouts, and its failure messaging all live out here.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::path::Path;
use tokio::fs;

use crate::error::ScanError;

const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// An image-to-text backend.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extracts raw text from image bytes.
    async fn recognize(&self, image_data: &[u8]) -> Result<String, ScanError>;
}

/// Google Cloud Vision TEXT_DETECTION backend.
pub struct GoogleVisionOcr {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleVisionOcr {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Reads the API key from the GOOGLE_API_KEY environment variable.
    pub fn from_env() -> Result<Self, ScanError> {
        Ok(Self::new(std::env::var("GOOGLE_API_KEY")?))
    }

    /// Overrides the API endpoint; used by tests to point at a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TextRecognizer for GoogleVisionOcr {
    async fn recognize(&self, image_data: &[u8]) -> Result<String, ScanError> {
        let base64_image = STANDARD.encode(image_data);
        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let request_body = json!({
            "requests": [{
                "image": {
                    "content": base64_image
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }]
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self.client.post(&url).json(&request_body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScanError::OcrBackend(format!("{status}: {error_text}")));
        }

        let body: Value = response.json().await?;

        // All detected text comes back in the first annotation's description
        let text = body["responses"][0]["fullTextAnnotation"]["text"]
            .as_str()
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ScanError::NoTextDetected);
        }

        debug!("Extracted {} characters from image", text.len());

        Ok(text.to_string())
    }
}

/// Reads an image file and runs it through the given recognizer.
pub async fn recognize_image_file(
    recognizer: &dyn TextRecognizer,
    path: &Path,
) -> Result<String, ScanError> {
    let image_data = fs::read(path).await?;
    recognizer.recognize(&image_data).await
}
