//! Pure domain services: conversions, geometry, catalog, costing, diagnosis

pub mod alias;
pub mod appraisal;
pub mod catalog;
pub mod costing;
pub mod geometry;
pub mod units;
pub mod validation;

pub use appraisal::compute_appraisal;
pub use catalog::Catalog;
