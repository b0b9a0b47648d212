//! Energy expenditure and daily intake targets.

use super::{anthropometry::lbm_james, coalesce, finite};
use crate::MeasurementRecord;

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day
pub fn bmr_mifflin(r: &MeasurementRecord) -> Option<f64> {
    let base = 10.0 * r.weight + 6.25 * r.height_cm() - 5.0 * r.age;
    let offset = if r.sex.is_male() { 5.0 } else { -161.0 };
    finite(base + offset)
}

/// Basal metabolic rate (Harris-Benedict), kcal/day
pub fn bmr_harris_benedict(r: &MeasurementRecord) -> Option<f64> {
    let h_cm = r.height_cm();
    let value = if r.sex.is_male() {
        66.47 + 13.75 * r.weight + 5.003 * h_cm - 6.755 * r.age
    } else {
        655.1 + 9.563 * r.weight + 1.85 * h_cm - 4.676 * r.age
    };
    finite(value)
}

/// Basal metabolic rate (Katch-McArdle), kcal/day.
///
/// A supplied LBM is used as-is; the James estimate is floored at zero.
pub fn bmr_katch_mcardle(r: &MeasurementRecord, lbm: Option<f64>) -> Option<f64> {
    let lbm = coalesce(lbm, lbm_james(r).map(|v| v.max(0.0)))?;
    finite(370.0 + 21.6 * lbm)
}

/// Total daily energy expenditure from Mifflin BMR
pub fn tdee(r: &MeasurementRecord, activity_factor: f64) -> Option<f64> {
    finite(bmr_mifflin(r)? * activity_factor)
}

/// Daily protein target, g/day
pub fn protein_target(r: &MeasurementRecord, grams_per_kg: f64) -> Option<f64> {
    finite(grams_per_kg * r.weight)
}

/// Daily water target, mL/day
pub fn water_target(r: &MeasurementRecord, ml_per_kg: f64) -> Option<f64> {
    finite(ml_per_kg * r.weight)
}
