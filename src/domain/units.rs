//! Weight and numeric-input normalization
//!
//! Every weight entry normalizes to grams before pricing; gem weights are
//! related to mass by the fixed 0.2 g/ct constant.

use crate::types::WeightUnit;

/// Grams per carat (fixed domain constant)
pub const CARAT_GRAMS: f64 = 0.2;

/// Grams per pennyweight
pub const GRAMS_PER_PENNYWEIGHT: f64 = 1.555;

/// Grams per troy ounce
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.103;

/// Shared parse-or-default coercion for user-entered numbers.
///
/// Empty or unparsable input yields the caller's default, never an error.
pub fn parse_number_or(input: &str, default: f64) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(default)
}

/// Convert a weight value to grams
pub fn weight_to_grams(value: f64, unit: WeightUnit) -> f64 {
    let factor = match unit {
        WeightUnit::Grams => 1.0,
        WeightUnit::Pennyweight => GRAMS_PER_PENNYWEIGHT,
        WeightUnit::TroyOunce => GRAMS_PER_TROY_OUNCE,
    };
    value * factor
}

/// Convert gem weight in carats to grams
pub fn carats_to_grams(carats: f64) -> f64 {
    carats * CARAT_GRAMS
}

/// Convert mass in grams to gem weight in carats
pub fn grams_to_carats(grams: f64) -> f64 {
    grams / CARAT_GRAMS
}
