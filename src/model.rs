use serde::{Deserialize, Serialize};

/// A single structured ingredient extracted from one line of OCR text.
///
/// Instances are immutable once produced by the parser; rescaling always
/// allocates new values and never touches the originals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Opaque unique id, assigned at parse time. Stable for the lifetime of
    /// the in-memory list and preserved across rescaling so callers can
    /// correlate original and scaled entries.
    pub id: String,
    /// Decimal quantity, normalized from fractions and mixed numbers.
    /// Always positive for ingredients emitted by the parser.
    pub quantity: f64,
    /// Lowercased unit token ("cup", "tbsp", "g"); `None` for countable
    /// items like "3 eggs".
    pub unit: Option<String>,
    /// Trimmed ingredient name with any leading "of" removed.
    pub label: String,
}

/// Everything recovered from one OCR scan of a recipe photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannedRecipe {
    /// Ingredients in order of appearance in the source text.
    pub ingredients: Vec<Ingredient>,
    /// Instruction steps in cooking order, numbering and bullets stripped.
    pub steps: Vec<String>,
}
