//! Proportional ingredient scaling and display formatting.
//!
//! Scaling is always re-derived from the original parsed list, never from a
//! previously scaled one, so repeated rescaling cannot compound
//! floating-point error beyond a single multiplication.

use log::debug;

use crate::model::Ingredient;

/// Maximum fractional digits kept by [`format_quantity`].
pub const DEFAULT_QUANTITY_DECIMALS: usize = 2;

/// Returns a freshly allocated ingredient list scaled by
/// `target_servings / original_servings`.
///
/// Non-positive or equal serving counts yield an unscaled copy rather than
/// an error, so the result is always a new list. Ids are preserved: the
/// same id means "same ingredient slot", letting callers diff original
/// against scaled entries.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_servings: f64,
    target_servings: f64,
) -> Vec<Ingredient> {
    if original_servings <= 0.0 || target_servings <= 0.0 || original_servings == target_servings {
        return ingredients.to_vec();
    }

    let factor = target_servings / original_servings;
    debug!(
        "Scaling {} ingredients by factor {factor}",
        ingredients.len()
    );

    ingredients
        .iter()
        .map(|ingredient| Ingredient {
            quantity: ingredient.quantity * factor,
            ..ingredient.clone()
        })
        .collect()
}

/// Formats a quantity as its shortest faithful decimal, rounded to at most
/// two fractional digits: "2" not "2.00", "1.5" not "1.50".
pub fn format_quantity(quantity: f64) -> String {
    format_quantity_with(quantity, DEFAULT_QUANTITY_DECIMALS)
}

/// [`format_quantity`] with a caller-chosen digit cap.
pub fn format_quantity_with(quantity: f64, max_decimals: usize) -> String {
    let rounded = format!("{quantity:.max_decimals$}");
    if rounded.contains('.') {
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Ingredient> {
        vec![
            Ingredient {
                id: "a".to_string(),
                quantity: 2.0,
                unit: Some("cups".to_string()),
                label: "flour".to_string(),
            },
            Ingredient {
                id: "b".to_string(),
                quantity: 0.5,
                unit: Some("cup".to_string()),
                label: "sugar".to_string(),
            },
            Ingredient {
                id: "c".to_string(),
                quantity: 3.0,
                unit: None,
                label: "eggs".to_string(),
            },
        ]
    }

    #[test]
    fn test_equal_servings_returns_unscaled_copy() {
        let original = sample();
        let scaled = scale_ingredients(&original, 4.0, 4.0);
        assert_eq!(scaled, original);
        // Still a fresh allocation, not the caller's list
        assert_ne!(original.as_ptr(), scaled.as_ptr());
    }

    #[test]
    fn test_non_positive_servings_returns_unscaled_copy() {
        let original = sample();
        assert_eq!(scale_ingredients(&original, 0.0, 8.0), original);
        assert_eq!(scale_ingredients(&original, 4.0, -1.0), original);
    }

    #[test]
    fn test_doubling_servings_doubles_quantities() {
        let original = sample();
        let scaled = scale_ingredients(&original, 4.0, 8.0);
        assert_eq!(scaled[0].quantity, 4.0);
        assert_eq!(scaled[1].quantity, 1.0);
        assert_eq!(scaled[2].quantity, 6.0);
        // Units and labels ride along unchanged
        assert_eq!(scaled[0].unit.as_deref(), Some("cups"));
        assert_eq!(scaled[2].label, "eggs");
    }

    #[test]
    fn test_ids_are_preserved_across_scaling() {
        let original = sample();
        let scaled = scale_ingredients(&original, 4.0, 6.0);
        let ids: Vec<&str> = scaled.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rescaling_from_original_is_reversible() {
        let original = sample();
        let doubled = scale_ingredients(&original, 4.0, 8.0);
        assert_eq!(doubled[0].quantity, 4.0);

        let back = scale_ingredients(&doubled, 8.0, 4.0);
        let quantities: Vec<f64> = back.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2.0, 0.5, 3.0]);
    }

    #[test]
    fn test_original_list_is_never_mutated() {
        let original = sample();
        let _ = scale_ingredients(&original, 4.0, 12.0);
        assert_eq!(original[0].quantity, 2.0);
    }

    #[test]
    fn test_format_quantity_trims_trailing_zeros() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(0.3333), "0.33");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_format_quantity_rounds_at_the_digit_cap() {
        assert_eq!(format_quantity(0.666), "0.67");
        assert_eq!(format_quantity_with(0.666, 1), "0.7");
        assert_eq!(format_quantity_with(2.0, 0), "2");
    }
}
