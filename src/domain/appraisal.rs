//! Aggregation and price diagnosis
//!
//! `compute_appraisal` is the single entry point the UI layer calls after
//! every edit: pure, synchronous, O(number of lines), and idempotent.

use crate::constants::labor::suggested_hours;
use crate::constants::HOURLY_RATE;
use crate::domain::catalog::Catalog;
use crate::domain::costing::cost_line;
use crate::domain::units::carats_to_grams;
use crate::domain::validation::collect_alerts;
use crate::types::{AppraisalContext, AppraisalSnapshot, Diagnosis, PricingUnit};

/// Resolved labor cost: table estimate, or the manual override when it is a
/// usable number
pub fn labor_cost(context: &AppraisalContext) -> f64 {
    let estimate = HOURLY_RATE * suggested_hours(&context.piece_type, &context.complexity);
    context
        .labor_override
        .filter(|v| v.is_finite())
        .unwrap_or(estimate)
}

/// Recompute every derived figure from the current input state
pub fn compute_appraisal(context: &AppraisalContext, catalog: &Catalog) -> AppraisalSnapshot {
    let mut subtotal = 0.0;
    let mut total_weight_grams = 0.0;
    let mut line_costs = Vec::with_capacity(context.lines.len());

    for line in &context.lines {
        let material = catalog.resolve(&line.material_key);
        let cost = cost_line(line, material);

        subtotal += cost.cost;
        let grams = match material.pricing_unit {
            PricingUnit::PerGram => cost.effective_quantity,
            PricingUnit::PerCarat => carats_to_grams(cost.effective_quantity),
        };
        total_weight_grams += grams * cost.multiplier as f64;
        line_costs.push(cost);
    }

    let labor = labor_cost(context);
    let total_cost = subtotal + labor;
    let quoted = context.quoted_price;

    let (pct_materials, pct_total, overage_pct) = if quoted > 0.0 && total_cost > 0.0 {
        (
            subtotal / quoted * 100.0,
            total_cost / quoted * 100.0,
            (quoted - total_cost) / total_cost * 100.0,
        )
    } else {
        (0.0, 0.0, 0.0)
    };
    let diagnosis = Diagnosis::classify(quoted, total_cost);

    let alerts = collect_alerts(context, catalog, &line_costs, labor, total_cost, overage_pct);

    AppraisalSnapshot {
        subtotal,
        total_weight_grams,
        labor_cost: labor,
        total_cost,
        pct_materials,
        pct_total,
        overage_pct,
        diagnosis,
        alerts,
        line_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Line, WeightUnit};

    fn context_with_line(line: Line) -> AppraisalContext {
        AppraisalContext {
            lines: vec![line],
            ..AppraisalContext::default()
        }
    }

    #[test]
    fn test_reference_percentages() {
        // subtotal 1000, labor 90, total 1090 against a 1400 quote
        let mut context = context_with_line(Line {
            material_key: "gold_18k".to_string(),
            unit_price: 100.0,
            weight_value: 10.0,
            weight_unit: WeightUnit::Grams,
            ..Line::default()
        });
        context.labor_override = Some(90.0);
        context.quoted_price = 1400.0;

        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert!((snapshot.subtotal - 1000.0).abs() < 1e-9);
        assert!((snapshot.total_cost - 1090.0).abs() < 1e-9);
        assert_eq!(snapshot.pct_materials.round(), 71.0);
        assert_eq!(snapshot.pct_total.round(), 78.0);
        assert_eq!(snapshot.overage_pct.round(), 28.0);
        assert!((snapshot.overage_pct - 28.44).abs() < 0.01);
        assert_eq!(snapshot.diagnosis, Some(Diagnosis::PossiblyOvervalued));
    }

    #[test]
    fn test_labor_estimate_from_table() {
        let mut context = context_with_line(Line::default());
        context.piece_type = "necklace".to_string();
        context.complexity = "complex".to_string();
        let snapshot = compute_appraisal(&context, &Catalog::new());
        // 6.0 h x 60/h
        assert!((snapshot.labor_cost - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_piece_type_defaults_to_one_hour() {
        let mut context = context_with_line(Line::default());
        context.piece_type = "crown".to_string();
        context.complexity = "baroque".to_string();
        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert!((snapshot.labor_cost - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_labor_override_replaces_estimate() {
        let mut context = context_with_line(Line::default());
        context.piece_type = "ring".to_string();
        context.complexity = "complex".to_string();
        context.labor_override = Some(25.0);
        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert!((snapshot.labor_cost - 25.0).abs() < 1e-9);

        // Non-finite override falls back to the estimate
        context.labor_override = Some(f64::NAN);
        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert!((snapshot.labor_cost - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_diagnosis_without_quoted_price() {
        let context = context_with_line(Line {
            unit_price: 10.0,
            weight_value: 1.0,
            ..Line::default()
        });
        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert_eq!(snapshot.diagnosis, None);
        assert_eq!(snapshot.pct_materials, 0.0);
        assert_eq!(snapshot.pct_total, 0.0);
        assert_eq!(snapshot.overage_pct, 0.0);
    }

    #[test]
    fn test_total_weight_counts_carats_as_grams() {
        let mut context = context_with_line(Line {
            material_key: "diamond".to_string(),
            weight_value: 5.0, // carats
            ..Line::default()
        });
        context.lines.push(Line {
            material_key: "gold_18k".to_string(),
            weight_value: 3.0,
            ..Line::default()
        });
        let snapshot = compute_appraisal(&context, &Catalog::new());
        // 5 ct = 1 g, plus 3 g of gold
        assert!((snapshot.total_weight_grams - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut context = context_with_line(Line {
            material_key: "gold_14k".to_string(),
            unit_price: 35.0,
            weight_value: 12.0,
            quantity: 2.0,
            ..Line::default()
        });
        context.quoted_price = 2000.0;
        let catalog = Catalog::new();

        let first = compute_appraisal(&context, &catalog);
        let second = compute_appraisal(&context, &catalog);
        assert_eq!(first.subtotal, second.subtotal);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.overage_pct, second.overage_pct);
        assert_eq!(first.diagnosis, second.diagnosis);
        assert_eq!(first.alerts, second.alerts);
    }

    #[test]
    fn test_suspicious_price_alert_and_diagnosis_agree() {
        let mut context = context_with_line(Line {
            unit_price: 100.0,
            weight_value: 10.0,
            ..Line::default()
        });
        context.labor_override = Some(0.0);
        context.quoted_price = 500.0;
        let snapshot = compute_appraisal(&context, &Catalog::new());
        assert_eq!(snapshot.diagnosis, Some(Diagnosis::SuspiciousPrice));
        assert!(snapshot
            .alerts
            .iter()
            .any(|a| a.contains("below the computed total")));
    }
}
