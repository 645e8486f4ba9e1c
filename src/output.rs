//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::AppraisalSnapshot;

/// Print a computed appraisal snapshot
pub fn output_snapshot(
    output_format: OutputFormat,
    snapshot: &AppraisalSnapshot,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(snapshot)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nAppraisal Result");
    println!("================");
    for (index, line) in snapshot.line_costs.iter().enumerate() {
        println!(
            "Line {}:          {:.3} x {} = {:.2} {}",
            index + 1,
            line.effective_quantity,
            line.multiplier,
            line.cost,
            currency
        );
    }
    println!("-----------------");
    println!("Materials:       {:.2} {}", snapshot.subtotal, currency);
    println!("Total weight:    {:.2} g", snapshot.total_weight_grams);
    println!("Labor:           {:.2} {}", snapshot.labor_cost, currency);
    println!("Total cost:      {:.2} {}", snapshot.total_cost, currency);

    if let Some(diagnosis) = snapshot.diagnosis {
        println!("Materials/quote: {:.1}%", snapshot.pct_materials);
        println!("Total/quote:     {:.1}%", snapshot.pct_total);
        println!("Overage:         {:.1}%", snapshot.overage_pct);
        println!("Diagnosis:       {}", diagnosis.label());
    } else {
        println!("Diagnosis:       (enter a quoted price for a diagnosis)");
    }

    if !snapshot.alerts.is_empty() {
        println!("\nAlerts:");
        for alert in &snapshot.alerts {
            println!("  - {}", alert);
        }
    }

    Ok(())
}
