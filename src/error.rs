use thiserror::Error;

/// Errors that can occur on the fallible outer surfaces of a scan.
///
/// The parsing core itself never errors: unusable lines are silently
/// dropped and an undetectable step list comes back empty.
#[derive(Error, Debug)]
pub enum ScanError {
    /// OCR HTTP request failed
    #[error("OCR request failed: {0}")]
    OcrRequest(#[from] reqwest::Error),

    /// OCR backend returned a non-success response
    #[error("OCR backend error: {0}")]
    OcrBackend(String),

    /// OCR succeeded but the image contained no usable text
    #[error("No text detected in image")]
    NoTextDetected,

    /// Failed to read the image file
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Scanner builder misuse
    #[error("Builder error: {0}")]
    Builder(String),
}
