//! Category aggregator.
//!
//! Evaluates catalog blocks against a measurement record:
//! - One named entry per formula, in catalog order
//! - Unavailable formulas stay in the output as `None`
//! - Nothing is cached; every call recomputes from the record

use crate::catalog::{Block, Selection};
use crate::{BlockResults, FormulaSettings, MeasurementRecord, Result};

/// Evaluate a block by name ("anthropometry" ... "pharmacokinetics", or
/// "all") with default formula settings.
pub fn compute_block(record: &MeasurementRecord, block_name: &str) -> Result<BlockResults> {
    compute_block_with(record, block_name, &FormulaSettings::default())
}

/// Evaluate a block by name with explicit formula settings
pub fn compute_block_with(
    record: &MeasurementRecord,
    block_name: &str,
    settings: &FormulaSettings,
) -> Result<BlockResults> {
    let selection: Selection = block_name.parse()?;
    Ok(compute(record, selection, settings))
}

/// Evaluate a parsed selection
pub fn compute(
    record: &MeasurementRecord,
    selection: Selection,
    settings: &FormulaSettings,
) -> BlockResults {
    let mut results = BlockResults::new();
    for block in selection.blocks() {
        results.extend(evaluate_block(record, block, settings));
    }
    results
}

/// Evaluate every entry of a single block
pub fn evaluate_block(
    record: &MeasurementRecord,
    block: Block,
    settings: &FormulaSettings,
) -> BlockResults {
    let mut results = BlockResults::new();
    for entry in block.entries() {
        results.push(entry.name, (entry.formula)(record, settings));
    }

    tracing::debug!(
        "Evaluated block {}: {} entries, {} unavailable",
        block,
        results.len(),
        results.len() - results.available()
    );

    results
}
