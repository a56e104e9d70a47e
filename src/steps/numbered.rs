use regex::Regex;

use super::StepStrategy;
use crate::config::StepConfig;

/// Collects numbered lines anywhere in the text, ordered by their numeric
/// prefix. Used when no instruction header is present.
pub struct NumberedStrategy {
    pattern: Regex,
}

impl Default for NumberedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberedStrategy {
    pub fn new() -> Self {
        // Optional "step" word, a number, then a period/parenthesis/colon
        // or whitespace separator
        Self {
            pattern: Regex::new(r"(?i)^\s*(?:step\s+)?(\d{1,3})(?:\s*[.):]\s*|\s+)(\S.*)").unwrap(),
        }
    }
}

impl StepStrategy for NumberedStrategy {
    fn name(&self) -> &str {
        "numbered"
    }

    fn extract(&self, lines: &[&str], config: &StepConfig) -> Vec<String> {
        let mut numbered: Vec<(u32, String)> = Vec::new();
        for line in lines {
            let Some(caps) = self.pattern.captures(line) else {
                continue;
            };
            let Ok(number) = caps[1].parse::<u32>() else {
                continue;
            };
            let text = caps[2].trim().to_string();
            if !text.is_empty() {
                numbered.push((number, text));
            }
        }

        if numbered.len() < config.min_fallback_steps {
            return Vec::new();
        }

        // An arbitrary number mid-recipe (an oven temperature, a weight)
        // does not start a step list; real ones start at 1 or 2
        let lowest = numbered.iter().map(|(n, _)| *n).min().unwrap_or(u32::MAX);
        if lowest > config.max_start_number {
            return Vec::new();
        }

        numbered.sort_by_key(|(number, _)| *number);
        numbered.into_iter().map(|(_, text)| text).collect()
    }
}
