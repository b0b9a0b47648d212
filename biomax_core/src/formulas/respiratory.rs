//! Gas exchange: alveolar gas equation, A-a gradient, oxygenation index.

use super::{coalesce, finite, positive};
use crate::MeasurementRecord;

/// Inputs of the alveolar gas equation other than PaCO2
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlveolarGas {
    /// Inspired O2 fraction
    pub fio2: f64,
    /// Barometric pressure, mmHg
    pub barometric: f64,
    /// Water vapour pressure, mmHg
    pub water_vapour: f64,
    /// Respiratory quotient
    pub rq: f64,
}

impl Default for AlveolarGas {
    /// Room air at sea level
    fn default() -> Self {
        Self {
            fio2: 0.21,
            barometric: 760.0,
            water_vapour: 47.0,
            rq: 0.8,
        }
    }
}

/// Alveolar O2 partial pressure (PAO2), mmHg.
///
/// `pa_co2` overrides the record's arterial pCO2.
pub fn alveolar_o2(r: &MeasurementRecord, pa_co2: Option<f64>, gas: &AlveolarGas) -> Option<f64> {
    let pa_co2 = coalesce(pa_co2, r.pa_co2)?;
    let rq = positive(gas.rq)?;
    finite(gas.fio2 * (gas.barometric - gas.water_vapour) - pa_co2 / rq)
}

/// Alveolar-arterial O2 gradient, mmHg.
///
/// A given PAO2 wins over the room-air calculation; a given measured PaO2
/// wins over the record's.
pub fn a_a_gradient(
    r: &MeasurementRecord,
    alveolar: Option<f64>,
    measured_pa_o2: Option<f64>,
) -> Option<f64> {
    let pao2_alveolar = coalesce(alveolar, alveolar_o2(r, None, &AlveolarGas::default()))?;
    let pao2_arterial = coalesce(measured_pa_o2, r.pa_o2)?;
    finite(pao2_alveolar - pao2_arterial)
}

/// Oxygenation index: `FiO2 × mean airway pressure × 100 / PaO2`
pub fn oxygenation_index(fio2: f64, mean_airway_pressure: f64, pa_o2: f64) -> Option<f64> {
    let pa_o2 = positive(pa_o2)?;
    finite(fio2 * mean_airway_pressure * 100.0 / pa_o2)
}
