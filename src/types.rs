//! Core types for appraisal costing

use crate::domain::units::parse_number_or;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw numeric field: the form UI sends numbers, strings, or nothing
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn coerce(raw: Option<RawNumber>, default: f64) -> f64 {
    match raw {
        Some(RawNumber::Number(n)) => n,
        Some(RawNumber::Text(s)) => parse_number_or(&s, default),
        Some(RawNumber::Other(_)) | None => default,
    }
}

/// Deserialize a numeric field with parse-or-default coercion, default 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce(Option::deserialize(deserializer)?, 0.0))
}

/// Same as `lenient_number` but defaulting to 1 (quantity multiplier)
fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce(Option::deserialize(deserializer)?, 1.0))
}

/// Optional numeric field: absent, null, or unparsable input means None
fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => s.trim().parse().ok(),
        Some(RawNumber::Other(_)) | None => None,
    })
}

/// Weight unit field: unknown unit keys reset to grams
fn lenient_weight_unit<'de, D>(deserializer: D) -> Result<WeightUnit, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| WeightUnit::from_key(&s)).unwrap_or_default())
}

/// How a material is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PricingUnit {
    /// Priced per gram of mass (metals)
    PerGram,
    /// Priced per carat of gem weight
    PerCarat,
}

impl PricingUnit {
    /// Unit suffix for display ("g" or "ct")
    pub fn quantity_suffix(&self) -> &'static str {
        match self {
            PricingUnit::PerGram => "g",
            PricingUnit::PerCarat => "ct",
        }
    }
}

/// Weight entry unit for per-gram materials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "dwt")]
    Pennyweight,
    #[serde(rename = "ozt")]
    TroyOunce,
}

impl WeightUnit {
    /// Parse a unit key; anything unrecognized is treated as grams
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "dwt" => WeightUnit::Pennyweight,
            "ozt" => WeightUnit::TroyOunce,
            _ => WeightUnit::Grams,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Pennyweight => "dwt",
            WeightUnit::TroyOunce => "ozt",
        }
    }
}

/// Which set of line fields drives the quantity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityMode {
    /// Known weight, entered directly
    #[default]
    Weight,
    /// Physical dimensions, converted through volume and density
    Dimensions,
}

/// Geometry used in dimensions mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Rectangular box, lengths in mm
    #[default]
    Box,
    /// Cylinder, diameter and height in mm
    Cylinder,
    /// Direct volume in cm3
    Volume,
    /// Round-brilliant diamond, diameter and depth in mm
    DiamondRound,
}

/// A priceable material: built-in catalog entry or user-defined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique key (catalog key or generated for customs)
    pub key: String,
    /// Display label
    pub label: String,
    /// Per-gram or per-carat pricing
    pub pricing_unit: PricingUnit,
    /// Reference density in g/cm3
    pub density: f64,
}

/// One priced item in the current appraisal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Catalog key of the chosen material
    #[serde(default = "default_material_key")]
    pub material_key: String,

    /// Currency per gram or per carat, user-entered
    #[serde(default, deserialize_with = "lenient_number")]
    pub unit_price: f64,

    /// Weight or dimensions
    #[serde(default)]
    pub mode: QuantityMode,

    /// Raw weight value (weight mode)
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight_value: f64,

    /// Weight unit, only meaningful for per-gram materials
    #[serde(default, deserialize_with = "lenient_weight_unit")]
    pub weight_unit: WeightUnit,

    /// Geometry (dimensions mode)
    #[serde(default)]
    pub shape: Shape,

    #[serde(default, deserialize_with = "lenient_number")]
    pub length_mm: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width_mm: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub height_mm: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub diameter_mm: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub depth_mm: f64,

    /// Direct volume in cm3 (shape = volume)
    #[serde(default, deserialize_with = "lenient_number")]
    pub volume_cm3: f64,

    /// Density override in g/cm3; falls back to the material's reference density
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub density: Option<f64>,

    /// Raw quantity multiplier; floored and clamped to >= 1 at costing time
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: f64,

    /// Free-text engraving/alias string (e.g. "750/1000")
    #[serde(default)]
    pub alias: String,
}

fn default_material_key() -> String {
    crate::constants::materials::DEFAULT_MATERIAL_KEY.to_string()
}

fn default_quantity() -> f64 {
    1.0
}

impl Default for Line {
    fn default() -> Self {
        Self {
            material_key: default_material_key(),
            unit_price: 0.0,
            mode: QuantityMode::default(),
            weight_value: 0.0,
            weight_unit: WeightUnit::default(),
            shape: Shape::default(),
            length_mm: 0.0,
            width_mm: 0.0,
            height_mm: 0.0,
            diameter_mm: 0.0,
            depth_mm: 0.0,
            volume_cm3: 0.0,
            density: None,
            quantity: 1.0,
            alias: String::new(),
        }
    }
}

/// Working state for one appraisal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalContext {
    /// Currency code (one of `config::CURRENCIES`)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Piece type for the labor-hours lookup (e.g. "ring")
    #[serde(default)]
    pub piece_type: String,

    /// Complexity level for the labor-hours lookup (e.g. "simple")
    #[serde(default)]
    pub complexity: String,

    /// Manual labor-cost override; replaces the estimate when finite
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub labor_override: Option<f64>,

    /// Quoted retail price of the piece
    #[serde(default, deserialize_with = "lenient_number")]
    pub quoted_price: f64,

    /// Priced lines; never empty in a working context
    #[serde(default = "default_lines")]
    pub lines: Vec<Line>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_lines() -> Vec<Line> {
    vec![Line::default()]
}

impl Default for AppraisalContext {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            piece_type: String::new(),
            complexity: String::new(),
            labor_override: None,
            quoted_price: 0.0,
            lines: default_lines(),
        }
    }
}

impl AppraisalContext {
    /// Append a fresh line with catalog defaults
    pub fn add_line(&mut self) -> &mut Line {
        self.lines.push(Line::default());
        self.lines.last_mut().expect("just pushed")
    }

    /// Remove a line by index; the last remaining line is never removed
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() > 1 && index < self.lines.len() {
            self.lines.remove(index);
            true
        } else {
            false
        }
    }
}

/// Derived figures for one costed line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineCost {
    /// Grams or carats, as dictated by the material's pricing unit
    pub effective_quantity: f64,
    /// Floor-clamped quantity multiplier, always >= 1
    pub multiplier: u32,
    /// unit_price x effective_quantity x multiplier
    pub cost: f64,
}

/// Price diagnosis for a quoted price against computed cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    /// Quoted price is below the computed cost
    SuspiciousPrice,
    /// Overage above 40%
    Overvalued,
    /// Overage in (20%, 40%]
    PossiblyOvervalued,
    /// Overage at or below 20%
    ReasonablePrice,
}

impl Diagnosis {
    /// Classify a quoted price against a computed total cost.
    ///
    /// Returns `None` unless both figures are positive. Thresholds are
    /// strict: an overage of exactly 20% or 40% falls into the lower bucket.
    pub fn classify(quoted_price: f64, total_cost: f64) -> Option<Self> {
        if quoted_price <= 0.0 || total_cost <= 0.0 {
            return None;
        }
        if quoted_price < total_cost {
            return Some(Diagnosis::SuspiciousPrice);
        }
        let overage_pct = (quoted_price - total_cost) / total_cost * 100.0;
        Some(match overage_pct {
            o if o > 40.0 => Diagnosis::Overvalued,
            o if o > 20.0 => Diagnosis::PossiblyOvervalued,
            _ => Diagnosis::ReasonablePrice,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::SuspiciousPrice => "suspicious price",
            Diagnosis::Overvalued => "overvalued",
            Diagnosis::PossiblyOvervalued => "possibly overvalued",
            Diagnosis::ReasonablePrice => "reasonable price",
        }
    }
}

/// Pure snapshot of derived figures, recomputed after every edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalSnapshot {
    /// Sum of all line costs
    pub subtotal: f64,
    /// Total mass across lines, in grams
    pub total_weight_grams: f64,
    /// Labor estimate or manual override
    pub labor_cost: f64,
    /// subtotal + labor_cost
    pub total_cost: f64,
    /// subtotal / quoted_price x 100, 0 when undefined
    pub pct_materials: f64,
    /// total_cost / quoted_price x 100, 0 when undefined
    pub pct_total: f64,
    /// (quoted_price - total_cost) / total_cost x 100, 0 when undefined
    pub overage_pct: f64,
    /// Unset unless quoted price and total cost are both positive
    pub diagnosis: Option<Diagnosis>,
    /// Advisory alerts; never block computation or save
    pub alerts: Vec<String>,
    /// Per-line derived figures, in line order
    pub line_costs: Vec<LineCost>,
}

/// Immutable saved snapshot of an appraisal, one row in the history list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the save action happened
    pub saved_at: DateTime<Utc>,
    /// Currency code at save time
    pub currency: String,
    /// Free-text description of the piece
    #[serde(default)]
    pub description: String,
    pub subtotal: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub quoted_price: f64,
    pub pct_materials: f64,
    pub pct_total: f64,
    /// Diagnosis label, empty when no diagnosis applied
    #[serde(default)]
    pub diagnosis: String,
}

impl HistoryEntry {
    /// Snapshot the current appraisal figures for the history list
    pub fn from_snapshot(
        context: &AppraisalContext,
        snapshot: &AppraisalSnapshot,
        description: String,
    ) -> Self {
        Self {
            saved_at: Utc::now(),
            currency: context.currency.clone(),
            description,
            subtotal: snapshot.subtotal,
            labor_cost: snapshot.labor_cost,
            total_cost: snapshot.total_cost,
            quoted_price: context.quoted_price,
            pct_materials: snapshot.pct_materials,
            pct_total: snapshot.pct_total,
            diagnosis: snapshot
                .diagnosis
                .map(|d| d.label().to_string())
                .unwrap_or_default(),
        }
    }
}
