//! Electrolytes and osmolality.
//!
//! Serum electrolytes are not part of the measurement record; callers pass
//! them explicitly as [`Electrolytes`] (all mEq/L).

use super::{coalesce, finite};
use crate::MeasurementRecord;

/// Serum electrolytes, mEq/L. Potassium is optional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Electrolytes {
    pub na: f64,
    pub k: Option<f64>,
    pub cl: f64,
    pub hco3: f64,
}

/// Lab overrides for osmolality; each falls back to the record, then zero
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OsmolalityInputs {
    pub glucose: Option<f64>,
    pub bun: Option<f64>,
    pub ethanol: Option<f64>,
}

/// Anion gap: `(Na [+ K]) − (Cl + HCO3)`
pub fn anion_gap(e: &Electrolytes) -> Option<f64> {
    let cations = e.na + e.k.unwrap_or(0.0);
    finite(cations - (e.cl + e.hco3))
}

/// Albumin-corrected anion gap: `AG + 2.5 × (4 − albumin)`
pub fn corrected_anion_gap(
    r: &MeasurementRecord,
    anion_gap: f64,
    albumin: Option<f64>,
) -> Option<f64> {
    let albumin = coalesce(albumin, r.albumin)?;
    finite(anion_gap + 2.5 * (4.0 - albumin))
}

/// Calculated serum osmolality, mOsm/kg.
///
/// Glucose, BUN and ethanol contribute zero when neither given nor recorded.
pub fn calculated_osmolality(r: &MeasurementRecord, na: f64, labs: &OsmolalityInputs) -> Option<f64> {
    let glucose = coalesce(labs.glucose, r.glucose).unwrap_or(0.0);
    let bun = coalesce(labs.bun, r.bun).unwrap_or(0.0);
    let ethanol = coalesce(labs.ethanol, r.ethanol).unwrap_or(0.0);
    finite(2.0 * na + glucose / 18.0 + bun / 2.8 + ethanol / 3.7)
}

/// Osmolar gap: measured − calculated osmolality
pub fn osmolar_gap(
    r: &MeasurementRecord,
    measured: f64,
    na: f64,
    labs: &OsmolalityInputs,
) -> Option<f64> {
    finite(measured - calculated_osmolality(r, na, labs)?)
}
