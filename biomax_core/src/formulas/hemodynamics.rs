//! Blood pressure derived indices, cardiac output and oxygen transport.
//!
//! Cardiac output (L/min) is never part of the record; formulas that need it
//! take it explicitly and require it to be positive.

use super::{anthropometry::body_surface_area, coalesce, finite, positive, saturation_fraction};
use crate::MeasurementRecord;

/// Venous pO2 assumed when none is supplied, mmHg
pub const DEFAULT_PV_O2: f64 = 40.0;

/// Mean arterial pressure, mmHg
pub fn mean_arterial_pressure(r: &MeasurementRecord) -> Option<f64> {
    finite((r.sbp? + 2.0 * r.dbp?) / 3.0)
}

/// Rate-pressure product (SBP × HR)
pub fn rate_pressure_product(r: &MeasurementRecord) -> Option<f64> {
    finite(r.sbp? * r.heart_rate?)
}

/// Shock index (HR / SBP)
pub fn shock_index(r: &MeasurementRecord) -> Option<f64> {
    let hr = r.heart_rate?;
    let sbp = positive(r.sbp?)?;
    finite(hr / sbp)
}

/// Cardiac index, L/min/m²
pub fn cardiac_index(r: &MeasurementRecord, cardiac_output: Option<f64>) -> Option<f64> {
    let co = positive(cardiac_output?)?;
    let bsa = positive(body_surface_area(r)?)?;
    finite(co / bsa)
}

/// Systemic vascular resistance, dyn·s·cm⁻⁵
pub fn systemic_vascular_resistance(
    r: &MeasurementRecord,
    cardiac_output: Option<f64>,
    cvp: f64,
) -> Option<f64> {
    let co = positive(cardiac_output?)?;
    let map = mean_arterial_pressure(r)?;
    finite((map - cvp) * 80.0 / co)
}

/// Cardiac output by the Fick principle, L/min.
///
/// `vo2` in mL/min, contents in mL O2/dL. Requires `cao2 > cvo2`.
pub fn cardiac_output_fick(vo2: f64, cao2: f64, cvo2: f64) -> Option<f64> {
    let av_diff = positive(cao2 - cvo2)?;
    finite(vo2 / (av_diff * 10.0))
}

/// Arterial oxygen content, mL O2/dL.
///
/// Each argument overrides the record's value when given.
pub fn arterial_o2_content(
    r: &MeasurementRecord,
    hemoglobin: Option<f64>,
    sa_o2: Option<f64>,
    pa_o2: Option<f64>,
) -> Option<f64> {
    let hb = coalesce(hemoglobin, r.hemoglobin)?;
    let sa = saturation_fraction(coalesce(sa_o2, r.sa_o2)?);
    let pa = coalesce(pa_o2, r.pa_o2)?;
    finite(1.34 * hb * sa + 0.0031 * pa)
}

/// Mixed venous oxygen content, mL O2/dL.
///
/// Venous pO2 falls back to [`DEFAULT_PV_O2`] when absent or non-positive.
pub fn venous_o2_content(
    r: &MeasurementRecord,
    hemoglobin: Option<f64>,
    sv_o2: Option<f64>,
    pv_o2: Option<f64>,
) -> Option<f64> {
    let hb = coalesce(hemoglobin, r.hemoglobin)?;
    let sv = saturation_fraction(coalesce(sv_o2, r.sv_o2)?);
    let pv = pv_o2.and_then(positive).unwrap_or(DEFAULT_PV_O2);
    finite(1.34 * hb * sv + 0.0031 * pv)
}

/// Oxygen delivery, mL O2/min
pub fn oxygen_delivery(cardiac_output: Option<f64>, cao2: Option<f64>) -> Option<f64> {
    finite(cardiac_output? * cao2? * 10.0)
}
