use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::ScannedRecipe;
use crate::ocr::{recognize_image_file, GoogleVisionOcr, TextRecognizer};
use crate::parse_recipe_with;

/// Represents the input source for a scan
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Use raw OCR text directly
    Text(String),
    /// Use an image file (will be OCR'd first)
    Image(PathBuf),
}

/// Builder for configuring and executing recipe scans
#[derive(Default)]
pub struct RecipeScannerBuilder {
    source: Option<InputSource>,
    config: Option<ScanConfig>,
    recognizer: Option<Box<dyn TextRecognizer>>,
}

impl RecipeScannerBuilder {
    /// Set the input source to raw text
    ///
    /// Use this when OCR has already happened elsewhere and you hold the
    /// raw text.
    ///
    /// # Example
    /// ```
    /// use recipe_scan::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder()
    ///     .text("2 cups flour\n3 eggs");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to an image file
    ///
    /// The image is run through the configured text recognizer first
    /// (Google Cloud Vision by default, which requires the GOOGLE_API_KEY
    /// environment variable).
    ///
    /// # Example
    /// ```
    /// use recipe_scan::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder()
    ///     .image("/path/to/recipe-photo.jpg");
    /// ```
    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::Image(path.into()));
        self
    }

    /// Override the default detection thresholds
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom text recognizer instead of Google Cloud Vision
    pub fn recognizer(mut self, recognizer: impl TextRecognizer + 'static) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    /// Run the scan
    ///
    /// # Errors
    /// Returns `ScanError` if:
    /// - No input source was specified
    /// - The image cannot be read or OCR'd
    /// - The input text is empty
    ///
    /// A recipe where nothing could be parsed is not an error; the result
    /// simply carries empty lists.
    pub async fn build(self) -> Result<ScannedRecipe, ScanError> {
        let source = self.source.ok_or_else(|| {
            ScanError::Builder("No input source specified. Use .text() or .image()".to_string())
        })?;

        let config = self.config.unwrap_or_default();

        let text = match source {
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(ScanError::Builder(
                        "Recipe text cannot be empty".to_string(),
                    ));
                }
                text
            }
            InputSource::Image(path) => {
                let recognizer: Box<dyn TextRecognizer> = match self.recognizer {
                    Some(recognizer) => recognizer,
                    None => Box::new(GoogleVisionOcr::from_env()?),
                };
                recognize_image_file(recognizer.as_ref(), &path).await?
            }
        };

        Ok(parse_recipe_with(&text, &config))
    }
}

/// Main entry point for the builder API
pub struct RecipeScanner;

impl RecipeScanner {
    /// Creates a new builder for scanning recipes
    ///
    /// # Example
    /// ```
    /// use recipe_scan::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder();
    /// ```
    pub fn builder() -> RecipeScannerBuilder {
        RecipeScannerBuilder::default()
    }
}
