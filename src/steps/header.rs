use regex::Regex;

use super::{marker_pattern, measurement_pattern, StepStrategy};
use crate::config::StepConfig;

/// Header phrases that open an instruction section.
const INSTRUCTION_HEADERS: &[&str] = &[
    "instructions",
    "directions",
    "steps",
    "method",
    "preparation",
    "procedure",
    "how to make",
    "to make",
];

/// Header phrases for other recipe sections; reaching one of these ends
/// the instruction block.
const OTHER_SECTION_HEADERS: &[&str] = &[
    "ingredients",
    "notes",
    "tips",
    "nutrition",
    "serving",
    "servings",
    "yield",
    "storage",
    "variations",
    "equipment",
];

/// Finds an instruction section header and collects the lines beneath it,
/// stopping at the next recognized section header or end of text.
pub struct HeaderStrategy {
    marker: Regex,
    measurement: Regex,
}

impl Default for HeaderStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderStrategy {
    pub fn new() -> Self {
        Self {
            marker: marker_pattern(),
            measurement: measurement_pattern(),
        }
    }

    fn collect_block(&self, lines: &[&str]) -> Vec<String> {
        let mut steps = Vec::new();
        for line in lines {
            let normalized = normalize_header(line);
            if !normalized.is_empty() && matches_any(&normalized, OTHER_SECTION_HEADERS) {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Ingredient lines leaking into a malformed steps section
            if self.measurement.is_match(trimmed) {
                continue;
            }

            let cleaned = self.marker.replace(trimmed, "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                steps.push(cleaned.to_string());
            }
        }
        steps
    }
}

impl StepStrategy for HeaderStrategy {
    fn name(&self) -> &str {
        "header"
    }

    fn extract(&self, lines: &[&str], _config: &StepConfig) -> Vec<String> {
        for (index, line) in lines.iter().enumerate() {
            let normalized = normalize_header(line);
            if normalized.is_empty() || !matches_any(&normalized, INSTRUCTION_HEADERS) {
                continue;
            }

            // A header alone is not evidence of success; an empty block
            // falls through to the next header occurrence or strategy
            let steps = self.collect_block(&lines[index + 1..]);
            if !steps.is_empty() {
                return steps;
            }
        }
        Vec::new()
    }
}

/// Lowercases a line and strips surrounding whitespace and any trailing
/// colon, the shape section headers take in scanned recipes.
fn normalize_header(line: &str) -> String {
    line.trim()
        .trim_end_matches(':')
        .trim_end()
        .to_lowercase()
}

fn matches_any(normalized: &str, headers: &[&str]) -> bool {
    headers
        .iter()
        .any(|header| normalized == *header || normalized.starts_with(header))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().collect();
        HeaderStrategy::new().extract(&lines, &StepConfig::default())
    }

    #[test]
    fn test_collects_numbered_lines_under_header() {
        let text = "Instructions:\n1. Preheat oven to 350F.\n2. Cream butter and sugar.\n3. Add eggs one at a time.\n4. Bake for 25 minutes.\nIngredients:\n2 cups flour";
        let steps = extract(text);
        assert_eq!(
            steps,
            vec![
                "Preheat oven to 350F.",
                "Cream butter and sugar.",
                "Add eggs one at a time.",
                "Bake for 25 minutes.",
            ]
        );
    }

    #[test]
    fn test_stops_at_other_section_header() {
        let text = "Directions\nMix everything.\nNotes:\nKeeps for a week.";
        assert_eq!(extract(text), vec!["Mix everything."]);
    }

    #[test]
    fn test_header_phrase_matches_as_prefix() {
        let text = "Instructions for the glaze:\nWhisk sugar and lemon juice.\nDrizzle over the cooled cake.";
        assert_eq!(extract(text).len(), 2);
    }

    #[test]
    fn test_skips_blank_and_ingredient_lines() {
        let text = "Method:\n\n2 cups flour\nKnead the dough for ten minutes.\n\nLet it rest.";
        assert_eq!(
            extract(text),
            vec!["Knead the dough for ten minutes.", "Let it rest."]
        );
    }

    #[test]
    fn test_header_without_usable_lines_yields_nothing() {
        assert!(extract("Instructions:\nIngredients:\n2 cups flour").is_empty());
        assert!(extract("Steps:").is_empty());
    }

    #[test]
    fn test_no_header_yields_nothing() {
        assert!(extract("1. Mix\n2. Bake").is_empty());
    }

    #[test]
    fn test_later_header_is_used_when_first_block_is_empty() {
        let text = "Steps:\nIngredients:\n2 cups flour\nDirections:\nFold the batter gently.\nBake until golden.";
        assert_eq!(
            extract(text),
            vec!["Fold the batter gently.", "Bake until golden."]
        );
    }
}
