//! Layered instruction detection over raw OCR text.
//!
//! Three independent strategies are tried in order: an instruction section
//! header, numbered lines anywhere in the text, then bulleted lines. The
//! first strategy to produce steps wins; each strategy enforces its own
//! minimum-count threshold so an isolated number or bullet is never
//! mistaken for a step list.

mod bulleted;
mod header;
mod numbered;

pub use bulleted::BulletedStrategy;
pub use header::HeaderStrategy;
pub use numbered::NumberedStrategy;

use log::debug;
use regex::Regex;

use crate::config::StepConfig;

/// A single step detection strategy.
///
/// Returns the steps it found, or an empty list when the text does not
/// match this strategy's shape (including when its own acceptance
/// threshold is not met).
pub trait StepStrategy {
    /// Strategy name for logging
    fn name(&self) -> &str;

    fn extract(&self, lines: &[&str], config: &StepConfig) -> Vec<String>;
}

/// Runs the strategy cascade and returns the first non-empty result.
pub struct StepParser {
    config: StepConfig,
    strategies: Vec<Box<dyn StepStrategy>>,
}

impl Default for StepParser {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}

impl StepParser {
    pub fn new(config: StepConfig) -> Self {
        Self {
            config,
            strategies: vec![
                Box::new(HeaderStrategy::new()),
                Box::new(NumberedStrategy::new()),
                Box::new(BulletedStrategy::new()),
            ],
        }
    }

    /// Extracts ordered instruction steps from `text`.
    ///
    /// An empty result means "no steps detected" and is a valid outcome,
    /// not an error.
    pub fn parse(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = text.lines().collect();
        for strategy in &self.strategies {
            let steps = strategy.extract(&lines, &self.config);
            if !steps.is_empty() {
                debug!("{} strategy yielded {} steps", strategy.name(), steps.len());
                return steps;
            }
        }

        debug!("No step strategy matched");
        Vec::new()
    }
}

/// Leading quantity plus a short unit token: the shape of an ingredient
/// line that has leaked into a step block. Shared by the header and
/// bulleted strategies to keep such lines out of the step list.
pub(crate) fn measurement_pattern() -> Regex {
    Regex::new(
        r"(?i)^\d+(?:\s+\d+\s*/\s*\d+|\s*/\s*\d+|\.\d+)?\s*(?:cups?|tablespoons?|tbsp|teaspoons?|tsp|ounces?|oz|pounds?|lbs?|grams?|kilograms?|kg|g|milliliters?|millilitres?|ml|liters?|litres?|l|fl\s+oz|pinch(?:es)?|dash(?:es)?|cloves?|slices?|cans?|sticks?)\b",
    )
    .unwrap()
}

/// Leading step numbering ("1.", "2)", "Step 3:") or bullet marker.
pub(crate) fn marker_pattern() -> Regex {
    Regex::new(r"(?i)^\s*(?:(?:step\s+)?\d+\s*[.):]\s*|[-•*·]\s*)").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<String> {
        StepParser::default().parse(text)
    }

    #[test]
    fn test_empty_input_yields_no_steps() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n").is_empty());
    }

    #[test]
    fn test_unstructured_prose_yields_no_steps() {
        assert!(parse("This recipe was handed down from my grandmother.").is_empty());
    }

    #[test]
    fn test_header_strategy_takes_priority_over_numbered() {
        let text = "Instructions:\nMix the dry ingredients.\n\nOther notes\n1. stray numbered line\n2. another stray line";
        let steps = parse(text);
        // Header block wins even though the numbered fallback would also match
        assert_eq!(steps[0], "Mix the dry ingredients.");
    }

    #[test]
    fn test_numbered_fallback_without_header() {
        let text = "Directions:\n\n1. Beat the eggs.\n2. Fold in the flour.";
        // Header finds steps here; remove the header to hit the fallback
        let no_header = "1. Beat the eggs.\n2. Fold in the flour.";
        assert_eq!(parse(text).len(), 2);
        assert_eq!(
            parse(no_header),
            vec!["Beat the eggs.".to_string(), "Fold in the flour.".to_string()]
        );
    }

    #[test]
    fn test_measurement_pattern_matches_ingredient_shapes() {
        let pattern = measurement_pattern();
        assert!(pattern.is_match("2 cups flour"));
        assert!(pattern.is_match("100ml milk"));
        assert!(pattern.is_match("1 1/2 tsp vanilla"));
        assert!(!pattern.is_match("Preheat the oven to 375 degrees"));
        assert!(!pattern.is_match("Mix until combined"));
    }

    #[test]
    fn test_marker_pattern_strips_numbering_and_bullets() {
        let pattern = marker_pattern();
        assert_eq!(pattern.replace("1. Mix well", ""), "Mix well");
        assert_eq!(pattern.replace("Step 2: Knead", ""), "Knead");
        assert_eq!(pattern.replace("- Fold gently", ""), "Fold gently");
        assert_eq!(pattern.replace("3) Bake", ""), "Bake");
    }
}
