//! Insulin resistance indices (fasting glucose mg/dL, insulin µU/mL).

use super::{finite, positive};
use crate::MeasurementRecord;

/// Homeostatic model assessment of insulin resistance
pub fn homa_ir(r: &MeasurementRecord) -> Option<f64> {
    finite(r.glucose? * r.insulin? / 405.0)
}

/// Quantitative insulin sensitivity check index
pub fn quicki(r: &MeasurementRecord) -> Option<f64> {
    let insulin = positive(r.insulin?)?;
    let glucose = positive(r.glucose?)?;
    finite(1.0 / (insulin.log10() + glucose.log10()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OptionalField, Sex};
    use approx::assert_relative_eq;

    fn labs(glucose: f64, insulin: f64) -> MeasurementRecord {
        MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Female)
            .with(OptionalField::Glucose, glucose)
            .with(OptionalField::Insulin, insulin)
    }

    #[test]
    fn test_homa_ir() {
        let value = homa_ir(&labs(100.0, 10.0)).unwrap();
        assert_relative_eq!(value, 1000.0 / 405.0);
        assert_relative_eq!(value, 2.4691, epsilon = 1e-4);
    }

    #[test]
    fn test_quicki() {
        assert_relative_eq!(quicki(&labs(100.0, 10.0)).unwrap(), 1.0 / 3.0);
        assert_eq!(quicki(&labs(100.0, 0.0)), None);
    }

    #[test]
    fn test_quicki_zero_denominator() {
        // log10(1) + log10(1) == 0
        assert_eq!(quicki(&labs(1.0, 1.0)), None);
    }

    #[test]
    fn test_requires_both_values() {
        let r = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Female)
            .with(OptionalField::Glucose, 100.0);
        assert_eq!(homa_ir(&r), None);
        assert_eq!(quicki(&r), None);
    }
}
