//! Basic one-compartment pharmacokinetics.
//!
//! Units are the caller's responsibility; the usual set is mg, L, hr.

use super::{finite, positive};

/// Loading dose: `C_target × Vd / F`
pub fn loading_dose(target_conc: f64, vd: f64, bioavailability: f64) -> Option<f64> {
    let f = positive(bioavailability)?;
    finite(target_conc * vd / f)
}

/// Maintenance dosing rate: `Cl × Css / F`
pub fn maintenance_rate(clearance: f64, css: f64, bioavailability: f64) -> Option<f64> {
    let f = positive(bioavailability)?;
    finite(clearance * css / f)
}

/// Elimination half-life: `0.693 × Vd / Cl`
pub fn half_life(vd: f64, clearance: f64) -> Option<f64> {
    let cl = positive(clearance)?;
    finite(0.693 * vd / cl)
}

/// Michaelis-Menten elimination rate: `Vmax × C / (Km + C)`
pub fn michaelis_menten(conc: f64, vmax: f64, km: f64) -> Option<f64> {
    let denominator = positive(km + conc)?;
    finite(vmax * conc / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loading_dose() {
        assert_relative_eq!(loading_dose(10.0, 40.0, 1.0).unwrap(), 400.0);
        assert_relative_eq!(loading_dose(10.0, 40.0, 0.5).unwrap(), 800.0);
        assert_eq!(loading_dose(10.0, 40.0, 0.0), None);
    }

    #[test]
    fn test_maintenance_rate() {
        assert_relative_eq!(maintenance_rate(5.0, 10.0, 1.0).unwrap(), 50.0);
        assert_eq!(maintenance_rate(5.0, 10.0, -1.0), None);
    }

    #[test]
    fn test_half_life() {
        assert_relative_eq!(half_life(40.0, 5.0).unwrap(), 5.544);
        assert_eq!(half_life(40.0, 0.0), None);
    }

    #[test]
    fn test_michaelis_menten() {
        // At C == Km the rate is half of Vmax
        assert_relative_eq!(michaelis_menten(4.0, 100.0, 4.0).unwrap(), 50.0);
        assert_eq!(michaelis_menten(0.0, 100.0, 0.0), None);
    }
}
