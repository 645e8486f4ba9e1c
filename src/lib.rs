//! Karat Checker Library
//!
//! Jewelry appraisal costing: material lines priced by weight or dimensions,
//! a labor estimate, and a diagnosis of the quoted price against the
//! computed cost.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod store;
pub mod types;
