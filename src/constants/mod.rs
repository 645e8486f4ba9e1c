//! Static domain tables: built-in materials and labor hours

pub mod labor;
pub mod materials;

pub use labor::{suggested_hours, HOURLY_RATE};
pub use materials::{get_builtin, DEFAULT_DENSITY, DEFAULT_MATERIAL_KEY, DIAMOND_KEY};
