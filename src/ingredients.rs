//! Line-oriented ingredient extraction from raw OCR text.
//!
//! Only lines that open with a numeric quantity are treated as ingredients;
//! everything else is dropped. This is the parser's primary precision
//! mechanism against noisy scans.

use log::debug;
use regex::Regex;
use uuid::Uuid;

use crate::model::Ingredient;
use crate::quantity::QuantityGrammar;

/// Fixed unit vocabulary: weight, volume, and count-style tokens.
///
/// Plural forms are listed ahead of their singulars so the trailing word
/// boundary lands after the longest token. Extending the vocabulary is a
/// table edit; the matching logic never changes.
const UNIT_TOKENS: &[&str] = &[
    "grams",
    "gram",
    "g",
    "kilograms",
    "kilogram",
    "kg",
    "ounces",
    "ounce",
    "oz",
    "pounds",
    "pound",
    "lbs",
    "lb",
    "milliliters",
    "millilitres",
    "milliliter",
    "millilitre",
    "ml",
    "liters",
    "litres",
    "liter",
    "litre",
    "l",
    "cups",
    "cup",
    "teaspoons",
    "teaspoon",
    "tsp",
    "tablespoons",
    "tablespoon",
    "tbsp",
    "fluid ounces",
    "fluid ounce",
    "fl oz",
    "pinches",
    "pinch",
    "dashes",
    "dash",
    "bunches",
    "bunch",
    "cloves",
    "clove",
    "slices",
    "slice",
    "pieces",
    "piece",
    "cans",
    "can",
    "packages",
    "package",
    "sticks",
    "stick",
];

/// Parses OCR text into structured ingredients, one line at a time.
///
/// Compiles its patterns once; cheap to reuse across scans.
pub struct IngredientParser {
    grammar: QuantityGrammar,
    unit: Regex,
    bullet: Regex,
}

impl Default for IngredientParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientParser {
    pub fn new() -> Self {
        let alternation = UNIT_TOKENS
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            grammar: QuantityGrammar::new(),
            unit: Regex::new(&format!(r"(?i)^({alternation})\b")).unwrap(),
            bullet: Regex::new(r"^[\s\-*•·]+").unwrap(),
        }
    }

    /// Extracts ingredients from `text`, preserving line order.
    ///
    /// Processing is strictly line-by-line with no cross-line state;
    /// unusable lines are dropped rather than surfaced as errors.
    pub fn parse(&self, text: &str) -> Vec<Ingredient> {
        let ingredients: Vec<Ingredient> = text
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();
        debug!("Parsed {} ingredients from OCR text", ingredients.len());
        ingredients
    }

    fn parse_line(&self, raw: &str) -> Option<Ingredient> {
        let stripped = self.bullet.replace(raw, "");
        let line = stripped.trim();
        if line.is_empty() {
            return None;
        }

        let (quantity, consumed) = self.grammar.match_leading(line)?;
        if quantity <= 0.0 {
            debug!("Dropping line with non-positive quantity: {line}");
            return None;
        }

        let mut rest = line[consumed..].trim_start();

        let mut unit = None;
        if let Some(found) = self.unit.find(rest) {
            unit = Some(found.as_str().to_lowercase());
            rest = rest[found.end()..].trim_start();
        }

        let label = strip_leading_of(rest).trim();
        if label.is_empty() {
            return None;
        }

        Some(Ingredient {
            id: Uuid::new_v4().to_string(),
            quantity,
            unit,
            label: label.to_string(),
        })
    }
}

fn strip_leading_of(text: &str) -> &str {
    let lower = text.to_lowercase();
    if lower == "of" {
        return "";
    }
    if lower.starts_with("of ") {
        return &text[3..];
    }
    text
}
