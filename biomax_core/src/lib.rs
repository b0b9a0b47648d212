#![forbid(unsafe_code)]

//! Core domain model and formula evaluation for BioMax.
//!
//! This crate provides:
//! - The measurement record and its construction from raw input
//! - A library of pure clinical formulas (anthropometry, energy,
//!   hemodynamics, gas exchange, acid-base, renal, lipids, insulin
//!   resistance, pharmacokinetics)
//! - The block catalog and the aggregator that evaluates it
//! - Configuration and logging setup shared with the CLI

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod record;
pub mod formulas;
pub mod catalog;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, FormulaSettings, OutputConfig};
pub use record::{build_record, parse_value, RawInputs};
pub use catalog::{Block, Selection};
pub use engine::{compute, compute_block, compute_block_with};
