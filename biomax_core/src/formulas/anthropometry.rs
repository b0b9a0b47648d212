//! Body size and composition indices.

use super::{coalesce, finite, positive};
use crate::MeasurementRecord;

/// Body-mass index, kg/m²
pub fn bmi(r: &MeasurementRecord) -> Option<f64> {
    let h = positive(r.height)?;
    finite(r.weight / (h * h))
}

/// BMI relative to the upper normal limit of 25
pub fn bmi_prime(r: &MeasurementRecord) -> Option<f64> {
    Some(bmi(r)? / 25.0)
}

/// Ponderal index, kg/m³
pub fn ponderal_index(r: &MeasurementRecord) -> Option<f64> {
    let h = positive(r.height)?;
    finite(r.weight / (h * h * h))
}

/// Ideal body weight (Devine), kg
pub fn ibw_devine(r: &MeasurementRecord) -> Option<f64> {
    let base = if r.sex.is_male() { 50.0 } else { 45.5 };
    finite(base + 2.3 * (r.height_in() - 60.0))
}

/// Adjusted body weight: `IBW + factor × (actual − IBW)`.
///
/// `actual_weight` is the override; no stored value substitutes for it.
pub fn adjusted_body_weight(
    r: &MeasurementRecord,
    actual_weight: Option<f64>,
    factor: f64,
) -> Option<f64> {
    let actual = actual_weight?;
    let ibw = ibw_devine(r)?;
    finite(ibw + factor * (actual - ibw))
}

/// Waist-to-hip ratio
pub fn waist_hip_ratio(r: &MeasurementRecord) -> Option<f64> {
    let waist = r.waist?;
    let hip = positive(r.hip?)?;
    finite(waist / hip)
}

/// Waist-to-height ratio (both in cm)
pub fn waist_height_ratio(r: &MeasurementRecord) -> Option<f64> {
    let waist = r.waist?;
    let h_cm = positive(r.height_cm())?;
    finite(waist / h_cm)
}

/// Body surface area, m²: `0.007184 × W^0.425 × H_cm^0.725`
pub fn body_surface_area(r: &MeasurementRecord) -> Option<f64> {
    let w = positive(r.weight)?;
    let h_cm = positive(r.height_cm())?;
    finite(0.007184 * w.powf(0.425) * h_cm.powf(0.725))
}

/// Body adiposity index: `hip / height^1.5 − 18`
pub fn body_adiposity_index(r: &MeasurementRecord) -> Option<f64> {
    let hip = r.hip?;
    let h = positive(r.height)?;
    finite(hip / h.powf(1.5) - 18.0)
}

/// Relative fat mass, %
pub fn relative_fat_mass(r: &MeasurementRecord) -> Option<f64> {
    let waist = positive(r.waist?)?;
    let base = if r.sex.is_male() { 64.0 } else { 76.0 };
    finite(base - 20.0 * (r.height_cm() / waist))
}

/// Lean body mass (James), kg.
///
/// Height enters in metres, so the squared term dominates and the result is
/// negative for ordinary adults.
pub fn lbm_james(r: &MeasurementRecord) -> Option<f64> {
    let h = positive(r.height)?;
    let w = r.weight;
    let ratio = (w / h).powi(2);
    if r.sex.is_male() {
        finite(1.10 * w - 128.0 * ratio)
    } else {
        finite(1.07 * w - 148.0 * ratio)
    }
}

/// Fat mass from lean body mass; a supplied LBM wins over the James estimate
pub fn fat_mass(r: &MeasurementRecord, lbm: Option<f64>) -> Option<f64> {
    let lbm = coalesce(lbm, lbm_james(r))?;
    finite(r.weight - lbm)
}

/// Conicity index: `waist_m / (0.109 × √(weight / height))`
pub fn conicity_index(r: &MeasurementRecord) -> Option<f64> {
    let waist_m = r.waist? / 100.0;
    let h = positive(r.height)?;
    let root = positive(r.weight / h)?.sqrt();
    finite(waist_m / (0.109 * root))
}
