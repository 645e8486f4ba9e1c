//! Alias resolver for engraving and fineness notations
//!
//! Free-text strings like "750/1000", "18k" or "925" map to catalog keys
//! through an ordered rule table. Rules are evaluated top to bottom and the
//! first match wins, so declaration order is part of the contract.

use crate::domain::catalog::Catalog;
use crate::types::{Line, PricingUnit, WeightUnit};
use regex::RegexBuilder;
use std::sync::LazyLock;

/// Ordered (pattern, catalog key) rules, case-insensitive
static ALIAS_RULES: LazyLock<Vec<(regex::Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"999|24\s*k", "gold_24k"),
        (r"750|18\s*k", "gold_18k"),
        (r"585|14\s*k", "gold_14k"),
        (r"925|sterling|plata", "silver_925"),
        (r"950\s*pt|pt\s*950|platino\s*950|platinum", "platinum_950"),
    ]
    .into_iter()
    .map(|(pattern, key)| {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("alias pattern is valid");
        (regex, key)
    })
    .collect()
});

/// Resolve a free-text alias to a catalog material key.
///
/// Returns `None` for empty input or when no rule matches.
pub fn resolve_alias(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    ALIAS_RULES
        .iter()
        .find(|(regex, _)| regex.is_match(trimmed))
        .map(|(_, key)| *key)
}

/// Resolve the line's alias text and, on a match, switch its material.
///
/// Switching also re-validates the weight unit: per-gram materials keep any
/// of g/dwt/ozt (the parse boundary already resets unknown unit text to
/// grams); per-carat materials interpret weight entries in carats, so the
/// stored unit is reset to grams for a later switch back.
///
/// Returns the detected key, or `None` when the alias resolved to nothing
/// (the line is left untouched).
pub fn apply_alias(line: &mut Line, catalog: &Catalog) -> Option<&'static str> {
    let key = resolve_alias(&line.alias)?;
    line.material_key = key.to_string();
    if catalog.resolve(key).pricing_unit == PricingUnit::PerCarat {
        line.weight_unit = WeightUnit::Grams;
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fineness_notations() {
        assert_eq!(resolve_alias("750/1000"), Some("gold_18k"));
        assert_eq!(resolve_alias("925"), Some("silver_925"));
        assert_eq!(resolve_alias("999"), Some("gold_24k"));
        assert_eq!(resolve_alias("585"), Some("gold_14k"));
        assert_eq!(resolve_alias("950pt"), Some("platinum_950"));
    }

    #[test]
    fn test_karat_notations_case_insensitive() {
        assert_eq!(resolve_alias("18K"), Some("gold_18k"));
        assert_eq!(resolve_alias("24 k gold"), Some("gold_24k"));
        assert_eq!(resolve_alias("14k band"), Some("gold_14k"));
        assert_eq!(resolve_alias("Sterling"), Some("silver_925"));
        assert_eq!(resolve_alias("platino 950"), Some("platinum_950"));
    }

    #[test]
    fn test_first_rule_wins() {
        // "999" is tried before "925"
        assert_eq!(resolve_alias("999 925"), Some("gold_24k"));
    }

    #[test]
    fn test_apply_alias_switches_material() {
        let catalog = Catalog::new();
        let mut line = Line {
            alias: "sterling 925".to_string(),
            weight_unit: WeightUnit::Pennyweight,
            ..Line::default()
        };
        assert_eq!(apply_alias(&mut line, &catalog), Some("silver_925"));
        assert_eq!(line.material_key, "silver_925");
        // dwt stays valid for a per-gram material
        assert_eq!(line.weight_unit, WeightUnit::Pennyweight);
    }

    #[test]
    fn test_apply_alias_no_match_leaves_line_untouched() {
        let catalog = Catalog::new();
        let mut line = Line {
            alias: "hallmarked".to_string(),
            ..Line::default()
        };
        assert_eq!(apply_alias(&mut line, &catalog), None);
        assert_eq!(line.material_key, "gold_18k");
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        assert_eq!(resolve_alias(""), None);
        assert_eq!(resolve_alias("   "), None);
        assert_eq!(resolve_alias("hand made"), None);
    }
}
