//! Labor-hours lookup table

use std::collections::HashMap;
use std::sync::LazyLock;

/// Fixed labor rate, currency units per hour
pub const HOURLY_RATE: f64 = 60.0;

/// Suggested hours for unrecognized (piece type, complexity) combinations
pub const DEFAULT_HOURS: f64 = 1.0;

/// Suggested hours keyed by "piece_type/complexity"
static LABOR_HOURS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("ring/simple", 0.5);
    m.insert("ring/medium", 1.5);
    m.insert("ring/complex", 3.0);

    m.insert("pendant/simple", 0.5);
    m.insert("pendant/medium", 1.0);
    m.insert("pendant/complex", 2.5);

    m.insert("earrings/simple", 1.0);
    m.insert("earrings/medium", 2.0);
    m.insert("earrings/complex", 3.5);

    m.insert("bracelet/simple", 1.5);
    m.insert("bracelet/medium", 2.5);
    m.insert("bracelet/complex", 4.5);

    m.insert("necklace/simple", 1.5);
    m.insert("necklace/medium", 3.0);
    m.insert("necklace/complex", 6.0);

    m.insert("brooch/simple", 1.0);
    m.insert("brooch/medium", 2.0);
    m.insert("brooch/complex", 4.0);

    m
});

/// Look up suggested labor hours for a piece type and complexity level.
///
/// Unrecognized combinations fall back to `DEFAULT_HOURS`, never an error.
pub fn suggested_hours(piece_type: &str, complexity: &str) -> f64 {
    let key = format!(
        "{}/{}",
        piece_type.trim().to_lowercase(),
        complexity.trim().to_lowercase()
    );
    LABOR_HOURS.get(key.as_str()).copied().unwrap_or(DEFAULT_HOURS)
}
