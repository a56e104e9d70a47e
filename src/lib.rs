//! Structured recipe extraction from OCR'd photos.
//!
//! Three pure, independent components do the real work:
//!
//! - [`IngredientParser`] turns raw OCR text into an ordered list of
//!   structured ingredients (quantity, unit, label).
//! - [`StepParser`] segments the same text into instruction steps using a
//!   layered strategy cascade (section header, numbered list, bulleted
//!   list).
//! - [`scale_ingredients`] re-derives a scaled ingredient list for a new
//!   serving count, with [`format_quantity`] for display.
//!
//! All three are synchronous, side-effect-free, and safe to call
//! concurrently. The surrounding noise of a real scan (reading the image,
//! the OCR backend call) lives behind [`RecipeScanner`] and the
//! [`ocr::TextRecognizer`] trait.

pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod ocr;
pub mod quantity;
pub mod scaling;
pub mod steps;

pub use builder::{InputSource, RecipeScanner, RecipeScannerBuilder};
pub use config::{ScanConfig, StepConfig};
pub use error::ScanError;
pub use ingredients::IngredientParser;
pub use model::{Ingredient, ScannedRecipe};
pub use quantity::parse_quantity;
pub use scaling::{format_quantity, format_quantity_with, scale_ingredients};
pub use steps::StepParser;

/// Parses OCR text into structured ingredients with default settings.
///
/// Lines without a leading numeric quantity are dropped; a fully
/// unparseable text yields an empty list, never an error.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    IngredientParser::new().parse(text)
}

/// Parses OCR text into ordered instruction steps with default thresholds.
pub fn parse_steps(text: &str) -> Vec<String> {
    StepParser::default().parse(text)
}

/// Runs both parsers over the same OCR text.
pub fn parse_recipe(text: &str) -> ScannedRecipe {
    parse_recipe_with(text, &ScanConfig::default())
}

/// [`parse_recipe`] with caller-supplied detection thresholds.
pub fn parse_recipe_with(text: &str, config: &ScanConfig) -> ScannedRecipe {
    ScannedRecipe {
        ingredients: IngredientParser::new().parse(text),
        steps: StepParser::new(config.steps.clone()).parse(text),
    }
}
