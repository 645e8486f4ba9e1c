//! Advisory validation
//!
//! Scans lines and aggregate figures for implausible values. Alerts are
//! informational only; they never block computation, export, or save.

use crate::domain::catalog::Catalog;
use crate::types::{AppraisalContext, LineCost, PricingUnit};

/// Plausible density range for gem-priced materials, g/cm3
const GEM_DENSITY_RANGE: (f64, f64) = (2.0, 5.5);

/// Plausible density range for metal and other per-gram materials, g/cm3
const METAL_DENSITY_RANGE: (f64, f64) = (3.5, 22.0);

/// Effective quantity x multiplier beyond this flags a likely unit mistake
const QUANTITY_SANITY_LIMIT: f64 = 100_000.0;

/// Overage beyond this percentage flags likely bad data
const EXTREME_OVERAGE_PCT: f64 = 1000.0;

fn push_unique(alerts: &mut Vec<String>, message: String) {
    if !alerts.contains(&message) {
        alerts.push(message);
    }
}

/// Collect deduplicated advisory alerts for the current appraisal state.
///
/// `line_costs` must be the costing results for `context.lines`, in order.
pub fn collect_alerts(
    context: &AppraisalContext,
    catalog: &Catalog,
    line_costs: &[LineCost],
    labor_cost: f64,
    total_cost: f64,
    overage_pct: f64,
) -> Vec<String> {
    let mut alerts = Vec::new();

    for (index, (line, cost)) in context.lines.iter().zip(line_costs).enumerate() {
        let line_no = index + 1;
        let material = catalog.resolve(&line.material_key);
        let density = line
            .density
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(material.density);

        let (low, high) = match material.pricing_unit {
            PricingUnit::PerCarat => GEM_DENSITY_RANGE,
            PricingUnit::PerGram => METAL_DENSITY_RANGE,
        };
        if density < low || density > high {
            push_unique(
                &mut alerts,
                format!(
                    "line {}: density {:.2} g/cm3 is outside the plausible range for {}",
                    line_no, density, material.label
                ),
            );
        }

        let total_quantity = cost.effective_quantity * cost.multiplier as f64;
        if total_quantity > QUANTITY_SANITY_LIMIT {
            push_unique(
                &mut alerts,
                format!(
                    "line {}: quantity {:.0} {} looks like a unit entry mistake",
                    line_no,
                    total_quantity,
                    material.pricing_unit.quantity_suffix()
                ),
            );
        }

        if line.quantity < 1.0 {
            push_unique(
                &mut alerts,
                format!("line {}: quantity multiplier below 1, treated as 1", line_no),
            );
        }
    }

    if context.quoted_price > 0.0 && context.quoted_price < total_cost {
        push_unique(
            &mut alerts,
            "quoted price is below the computed total cost".to_string(),
        );
    }

    if overage_pct > EXTREME_OVERAGE_PCT {
        push_unique(
            &mut alerts,
            format!(
                "overage above {:.0}% suggests a data entry problem",
                EXTREME_OVERAGE_PCT
            ),
        );
    }

    if labor_cost < 0.0 {
        push_unique(&mut alerts, "labor cost is negative".to_string());
    }

    alerts
}
