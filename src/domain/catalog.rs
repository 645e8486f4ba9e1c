//! Material catalog service
//!
//! Combines the immutable built-in table with an append-only list of
//! user-defined materials. Lookup never fails: unknown keys resolve to the
//! first built-in entry.

use crate::constants::materials::{BUILTIN_MATERIALS, DEFAULT_DENSITY};
use crate::error::{Error, Result};
use crate::types::{Material, PricingUnit};
use uuid::Uuid;

/// Built-in materials plus runtime extensions
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    custom: Vec<Material>,
}

impl Catalog {
    /// Catalog with built-ins only
    pub fn new() -> Self {
        Self { custom: Vec::new() }
    }

    /// Catalog seeded with previously persisted custom materials
    pub fn with_custom(custom: Vec<Material>) -> Self {
        Self { custom }
    }

    /// Resolve a material key, falling back to the first built-in entry.
    ///
    /// This fallback is load-bearing: the rest of the engine relies on
    /// resolution never failing.
    pub fn resolve(&self, key: &str) -> &Material {
        if let Some(material) = BUILTIN_MATERIALS.iter().find(|m| m.key == key) {
            return material;
        }
        if let Some(material) = self.custom.iter().find(|m| m.key == key) {
            return material;
        }
        &BUILTIN_MATERIALS[0]
    }

    /// Add a user-defined material and return it.
    ///
    /// The label must be non-empty; a missing or implausible density falls
    /// back to `DEFAULT_DENSITY`. The generated key never collides with
    /// built-ins or prior customs.
    pub fn add_custom(
        &mut self,
        label: &str,
        pricing_unit: PricingUnit,
        density: Option<f64>,
    ) -> Result<Material> {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::Material(
                "custom material label must not be empty".to_string(),
            ));
        }
        let density = density
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_DENSITY);
        let material = Material {
            key: format!("custom-{}", Uuid::new_v4()),
            label: label.to_string(),
            pricing_unit,
            density,
        };
        self.custom.push(material.clone());
        Ok(material)
    }

    /// All materials, built-ins first, then customs in insertion order
    pub fn all(&self) -> Vec<&Material> {
        BUILTIN_MATERIALS.iter().chain(self.custom.iter()).collect()
    }

    /// User-defined materials only
    pub fn custom(&self) -> &[Material] {
        &self.custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::materials::DEFAULT_MATERIAL_KEY;

    #[test]
    fn test_resolve_builtin() {
        let catalog = Catalog::new();
        assert_eq!(catalog.resolve("silver_925").key, "silver_925");
    }

    #[test]
    fn test_unknown_key_falls_back_to_first_builtin() {
        let catalog = Catalog::new();
        assert_eq!(catalog.resolve("no_such_key").key, DEFAULT_MATERIAL_KEY);
        assert_eq!(catalog.resolve("").key, DEFAULT_MATERIAL_KEY);
    }

    #[test]
    fn test_add_custom_and_resolve() {
        let mut catalog = Catalog::new();
        let material = catalog
            .add_custom("Tanzanite", PricingUnit::PerCarat, Some(3.35))
            .unwrap();
        assert!(material.key.starts_with("custom-"));
        assert_eq!(catalog.resolve(&material.key).label, "Tanzanite");
        assert_eq!(catalog.custom().len(), 1);
    }

    #[test]
    fn test_add_custom_rejects_empty_label() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_custom("  ", PricingUnit::PerGram, None).is_err());
    }

    #[test]
    fn test_add_custom_density_fallback() {
        let mut catalog = Catalog::new();
        let no_density = catalog
            .add_custom("Resin", PricingUnit::PerGram, None)
            .unwrap();
        assert_eq!(no_density.density, DEFAULT_DENSITY);

        let bad_density = catalog
            .add_custom("Glass", PricingUnit::PerGram, Some(f64::NAN))
            .unwrap();
        assert_eq!(bad_density.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_custom_keys_are_unique() {
        let mut catalog = Catalog::new();
        let a = catalog.add_custom("A", PricingUnit::PerGram, None).unwrap();
        let b = catalog.add_custom("A", PricingUnit::PerGram, None).unwrap();
        assert_ne!(a.key, b.key);
    }
}
