//! Built-in material catalog
//!
//! The built-in table is immutable and process-wide. User-defined materials
//! live in `domain::catalog::Catalog` on top of it.

use crate::types::{Material, PricingUnit};
use std::sync::LazyLock;

/// Fallback key; the first catalog entry resolves every unknown key
pub const DEFAULT_MATERIAL_KEY: &str = "gold_18k";

/// Catalog key of the round-brilliant diamond entry
pub const DIAMOND_KEY: &str = "diamond";

/// Density assumed for custom materials when none is given, in g/cm3
pub const DEFAULT_DENSITY: f64 = 2.7;

/// Built-in materials, fallback entry first
pub static BUILTIN_MATERIALS: LazyLock<Vec<Material>> = LazyLock::new(|| {
    vec![
        Material {
            key: "gold_18k".to_string(),
            label: "18k gold (750)".to_string(),
            pricing_unit: PricingUnit::PerGram,
            density: 15.58,
        },
        Material {
            key: "gold_24k".to_string(),
            label: "24k gold (999)".to_string(),
            pricing_unit: PricingUnit::PerGram,
            density: 19.32,
        },
        Material {
            key: "gold_14k".to_string(),
            label: "14k gold (585)".to_string(),
            pricing_unit: PricingUnit::PerGram,
            density: 13.6,
        },
        Material {
            key: "silver_925".to_string(),
            label: "Sterling silver (925)".to_string(),
            pricing_unit: PricingUnit::PerGram,
            density: 10.36,
        },
        Material {
            key: "platinum_950".to_string(),
            label: "Platinum (950)".to_string(),
            pricing_unit: PricingUnit::PerGram,
            density: 20.7,
        },
        Material {
            key: "diamond".to_string(),
            label: "Diamond (round brilliant)".to_string(),
            pricing_unit: PricingUnit::PerCarat,
            density: 3.52,
        },
    ]
});

/// Get a built-in material by key
pub fn get_builtin(key: &str) -> Option<&'static Material> {
    BUILTIN_MATERIALS.iter().find(|m| m.key == key)
}
