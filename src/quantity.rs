//! Leading-quantity grammar for ingredient lines.
//!
//! Quantities are recognized as a set of ordered alternatives rather than
//! one monolithic pattern: a mixed number ("1 1/2") is tried first, then a
//! simple fraction ("3/4"), then a plain decimal or integer (".5", "2",
//! "2.5"). Each alternative normalizes to a decimal value.

use regex::Regex;

/// Compiled patterns for the three quantity shapes, tried in order.
pub struct QuantityGrammar {
    mixed: Regex,
    fraction: Regex,
    decimal: Regex,
}

impl Default for QuantityGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantityGrammar {
    pub fn new() -> Self {
        Self {
            mixed: Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)").unwrap(),
            fraction: Regex::new(r"^(\d+)\s*/\s*(\d+)").unwrap(),
            decimal: Regex::new(r"^(\d+\.?\d*|\.\d+)").unwrap(),
        }
    }

    /// Matches a quantity token at the start of `text` and converts it to a
    /// decimal. Returns the value and the number of bytes consumed.
    ///
    /// A fraction with a zero denominator yields `None`, not a value: the
    /// caller is expected to discard the whole line.
    pub fn match_leading(&self, text: &str) -> Option<(f64, usize)> {
        if let Some(caps) = self.mixed.captures(text) {
            let whole: f64 = caps[1].parse().ok()?;
            let numerator: f64 = caps[2].parse().ok()?;
            let denominator: f64 = caps[3].parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            let end = caps.get(0)?.end();
            return Some((whole + numerator / denominator, end));
        }

        if let Some(caps) = self.fraction.captures(text) {
            let numerator: f64 = caps[1].parse().ok()?;
            let denominator: f64 = caps[2].parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            let end = caps.get(0)?.end();
            return Some((numerator / denominator, end));
        }

        if let Some(caps) = self.decimal.captures(text) {
            let value: f64 = caps[1].parse().ok()?;
            let end = caps.get(0)?.end();
            return Some((value, end));
        }

        None
    }
}

/// Converts a standalone quantity token ("2", "2.5", "3/4", "1 1/2") to a
/// decimal. Returns `None` for tokens that are not a quantity or that
/// divide by zero.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim();
    let (value, consumed) = QuantityGrammar::new().match_leading(token)?;
    if consumed == token.len() {
        Some(value)
    } else {
        None
    }
}
