//! Per-line costing
//!
//! Derives the effective quantity (grams or carats, per the material's
//! pricing unit) from a line's raw measurements, then prices it.

use crate::domain::geometry::{box_volume_cm3, cylinder_volume_cm3, diamond_carats};
use crate::domain::units::{carats_to_grams, grams_to_carats, weight_to_grams};
use crate::types::{Line, LineCost, Material, PricingUnit, QuantityMode, Shape};

/// Floor-clamp a raw quantity input: never below 1, fractions truncated down
pub fn multiplier_from(raw_quantity: f64) -> u32 {
    let floored = raw_quantity.floor();
    if floored.is_finite() && floored >= 1.0 {
        floored as u32
    } else {
        1
    }
}

/// Derive the effective quantity for one line.
///
/// The result is in grams for per-gram materials and carats for per-carat
/// materials. The round-brilliant estimate is always produced in carats
/// first; all other dimension shapes go through volume x density.
pub fn effective_quantity(line: &Line, material: &Material) -> f64 {
    match line.mode {
        QuantityMode::Weight => match material.pricing_unit {
            PricingUnit::PerGram => weight_to_grams(line.weight_value, line.weight_unit),
            // Weight entry for gems is already in the material's native unit
            PricingUnit::PerCarat => line.weight_value,
        },
        QuantityMode::Dimensions => {
            if line.shape == Shape::DiamondRound {
                let carats = diamond_carats(line.diameter_mm, line.depth_mm);
                return match material.pricing_unit {
                    PricingUnit::PerCarat => carats,
                    PricingUnit::PerGram => carats_to_grams(carats),
                };
            }

            let volume_cm3 = match line.shape {
                Shape::Box => box_volume_cm3(line.length_mm, line.width_mm, line.height_mm),
                Shape::Cylinder => cylinder_volume_cm3(line.diameter_mm, line.height_mm),
                Shape::Volume | Shape::DiamondRound => line.volume_cm3.max(0.0),
            };
            let density = line
                .density
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or(material.density);
            let grams = volume_cm3 * density;
            match material.pricing_unit {
                PricingUnit::PerGram => grams,
                PricingUnit::PerCarat => grams_to_carats(grams),
            }
        }
    }
}

/// Cost one line against its resolved material
pub fn cost_line(line: &Line, material: &Material) -> LineCost {
    let effective = effective_quantity(line, material);
    let multiplier = multiplier_from(line.quantity);
    LineCost {
        effective_quantity: effective,
        multiplier,
        cost: line.unit_price * effective * multiplier as f64,
    }
}
