use regex::Regex;

use super::{measurement_pattern, StepStrategy};
use crate::config::StepConfig;

/// Collects contiguous runs of bulleted lines. Last resort after the
/// header and numbered strategies: bullets are also how ingredient lists
/// are written, so this strategy filters aggressively.
pub struct BulletedStrategy {
    bullet: Regex,
    measurement: Regex,
}

impl Default for BulletedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletedStrategy {
    pub fn new() -> Self {
        Self {
            bullet: Regex::new(r"^\s*[-•*·]\s+").unwrap(),
            measurement: measurement_pattern(),
        }
    }
}

impl StepStrategy for BulletedStrategy {
    fn name(&self) -> &str {
        "bulleted"
    }

    fn extract(&self, lines: &[&str], config: &StepConfig) -> Vec<String> {
        let mut runs: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut gap = 0;

        for line in lines {
            if let Some(marker) = self.bullet.find(line) {
                gap = 0;
                let cleaned = line[marker.end()..].trim();
                if cleaned.is_empty() || self.measurement.is_match(cleaned) {
                    continue;
                }
                // Instructions run longer than typical ingredient entries
                if cleaned.chars().count() >= config.min_bullet_len {
                    current.push(cleaned.to_string());
                }
            } else if !current.is_empty() {
                gap += 1;
                if gap >= config.max_bullet_gap {
                    runs.push(std::mem::take(&mut current));
                    gap = 0;
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        let best = runs
            .into_iter()
            .max_by_key(|run| run.len())
            .unwrap_or_default();
        if best.len() >= config.min_fallback_steps {
            best
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().collect();
        BulletedStrategy::new().extract(&lines, &StepConfig::default())
    }

    #[test]
    fn test_collects_long_bulleted_lines() {
        let text = "- Whisk the eggs and sugar until pale and fluffy.\n- Fold in the sifted flour with a spatula.\n- Pour into the tin and bake until golden.";
        assert_eq!(extract(text).len(), 3);
    }

    #[test]
    fn test_rejects_ingredient_looking_bullets() {
        let text = "- 2 cups all-purpose flour\n- 1 tsp baking powder\n- 100 g softened butter";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_short_bullets_are_dropped() {
        // Below the minimum instruction length
        let text = "- Mix well\n- Bake\n- Whisk the eggs and sugar until pale and fluffy.";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_single_long_bullet_is_below_threshold() {
        let text = "- Whisk the eggs and sugar until pale and fluffy.";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_run_interrupted_by_two_plain_lines_is_closed() {
        let text = "- Whisk the eggs and sugar until pale and fluffy.\nplain line one\nplain line two\n- Fold in the sifted flour with a spatula.\n- Pour into the tin and bake until golden.\n- Cool on a wire rack before slicing.";
        // The second run is the longer one and is returned on its own
        assert_eq!(extract(text).len(), 3);
    }

    #[test]
    fn test_single_plain_line_does_not_break_a_run() {
        let text = "- Whisk the eggs and sugar until pale and fluffy.\n(see note below)\n- Fold in the sifted flour with a spatula.";
        assert_eq!(extract(text).len(), 2);
    }

    #[test]
    fn test_supports_unicode_bullet_markers() {
        let text = "• Simmer the sauce until reduced by half.\n• Season with salt and freshly ground pepper.";
        assert_eq!(extract(text).len(), 2);
    }
}
