//! Renal function estimates from serum creatinine.

use super::{finite, positive};
use crate::MeasurementRecord;

/// Creatinine clearance (Cockcroft-Gault), mL/min
pub fn cockcroft_gault(r: &MeasurementRecord) -> Option<f64> {
    let creatinine = positive(r.creatinine?)?;
    let sex_factor = if r.sex.is_male() { 1.0 } else { 0.85 };
    finite((140.0 - r.age) * r.weight * sex_factor / (72.0 * creatinine))
}

/// eGFR (4-variable MDRD without race term), mL/min/1.73m²
pub fn mdrd_egfr(r: &MeasurementRecord) -> Option<f64> {
    let creatinine = positive(r.creatinine?)?;
    let age = positive(r.age)?;
    let sex_factor = if r.sex.is_male() { 1.0 } else { 0.742 };
    finite(175.0 * creatinine.powf(-1.154) * age.powf(-0.203) * sex_factor)
}
