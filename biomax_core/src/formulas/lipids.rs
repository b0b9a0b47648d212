//! Lipid panel derived values, mg/dL inputs.

use super::{finite, positive};
use crate::MeasurementRecord;

/// LDL cholesterol (Friedewald): `TC − HDL − TG/5`.
///
/// Unreliable above TG 400 mg/dL; still reported.
pub fn ldl_friedewald(r: &MeasurementRecord) -> Option<f64> {
    finite(r.total_cholesterol? - r.hdl? - r.triglycerides? / 5.0)
}

/// Non-HDL cholesterol
pub fn non_hdl(r: &MeasurementRecord) -> Option<f64> {
    finite(r.total_cholesterol? - r.hdl?)
}

/// Atherogenic index of plasma: `log10(TG / HDL)`
pub fn atherogenic_index(r: &MeasurementRecord) -> Option<f64> {
    let tg = positive(r.triglycerides?)?;
    let hdl = positive(r.hdl?)?;
    finite((tg / hdl).log10())
}

/// Triglyceride-glucose index: `ln(TG × glucose / 2)`
pub fn tyg_index(r: &MeasurementRecord) -> Option<f64> {
    let product = positive(r.triglycerides? * r.glucose?)?;
    finite((product / 2.0).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OptionalField, Sex};
    use approx::assert_relative_eq;

    fn panel(tc: f64, hdl: f64, tg: f64) -> MeasurementRecord {
        MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male)
            .with(OptionalField::TotalCholesterol, tc)
            .with(OptionalField::Hdl, hdl)
            .with(OptionalField::Triglycerides, tg)
    }

    #[test]
    fn test_ldl_and_non_hdl() {
        let r = panel(200.0, 50.0, 150.0);
        assert_eq!(ldl_friedewald(&r), Some(120.0));
        assert_eq!(non_hdl(&r), Some(150.0));
    }

    #[test]
    fn test_missing_lipids() {
        let r = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male)
            .with(OptionalField::TotalCholesterol, 200.0)
            .with(OptionalField::Hdl, 50.0);
        assert_eq!(ldl_friedewald(&r), None);
        assert_eq!(non_hdl(&r), Some(150.0));
        assert_eq!(atherogenic_index(&r), None);
        assert_eq!(tyg_index(&r), None);
    }

    #[test]
    fn test_aip() {
        assert_relative_eq!(atherogenic_index(&panel(200.0, 50.0, 150.0)).unwrap(), 3.0_f64.log10());
        assert_eq!(atherogenic_index(&panel(200.0, 0.0, 150.0)), None);
        assert_eq!(atherogenic_index(&panel(200.0, 50.0, 0.0)), None);
        assert_eq!(atherogenic_index(&panel(200.0, -5.0, 150.0)), None);
    }

    #[test]
    fn test_tyg() {
        let r = panel(200.0, 50.0, 150.0).with(OptionalField::Glucose, 100.0);
        assert_relative_eq!(tyg_index(&r).unwrap(), 7500.0_f64.ln());

        let zero = panel(200.0, 50.0, 0.0).with(OptionalField::Glucose, 100.0);
        assert_eq!(tyg_index(&zero), None);
    }
}
