//! Clinical formula library.
//!
//! Every formula is a pure function of a [`MeasurementRecord`](crate::MeasurementRecord)
//! and, for some, explicit call-time arguments. All of them return
//! `Option<f64>`: `None` means a required input was absent or a domain guard
//! failed (non-positive denominator, non-positive log argument, ...).
//! Nothing here returns an error or logs.

pub mod acid_base;
pub mod anthropometry;
pub mod energy;
pub mod hemodynamics;
pub mod insulin;
pub mod lipids;
pub mod pharmacokinetics;
pub mod renal;
pub mod respiratory;

/// An explicit call-time argument wins over the record's stored value
#[inline]
pub fn coalesce(override_value: Option<f64>, stored: Option<f64>) -> Option<f64> {
    override_value.or(stored)
}

/// Drop NaN and infinite outcomes
#[inline]
pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Keep strictly positive values only
#[inline]
pub(crate) fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

/// Oxygen saturation as a fraction: values above 1.0 are percentages
#[inline]
pub fn saturation_fraction(value: f64) -> f64 {
    if value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_prefers_override() {
        assert_eq!(coalesce(Some(1.0), Some(2.0)), Some(1.0));
        assert_eq!(coalesce(None, Some(2.0)), Some(2.0));
        assert_eq!(coalesce(Some(1.0), None), Some(1.0));
        assert_eq!(coalesce(None, None), None);
    }

    #[test]
    fn test_finite_filter() {
        assert_eq!(finite(1.5), Some(1.5));
        assert_eq!(finite(0.0), Some(0.0));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(1.0 / 0.0), None);
    }

    #[test]
    fn test_saturation_fraction() {
        assert_eq!(saturation_fraction(98.0), 0.98);
        assert_eq!(saturation_fraction(0.98), 0.98);
        // exactly 1.0 is already a fraction
        assert_eq!(saturation_fraction(1.0), 1.0);
    }
}
