//! Core domain types for BioMax.
//!
//! This module defines the fundamental types used throughout the system:
//! - Biological sex classification
//! - The measurement record and its optional attributes
//! - Named formula results and ordered result sets

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Subject Types
// ============================================================================

/// Biological sex category used by sex-specific formulas
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Classify free text: anything starting with `m` (case-insensitive)
    /// is male, everything else, including unrecognised text, is female.
    pub fn classify(text: &str) -> Self {
        if text.trim().to_lowercase().starts_with('m') {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn is_male(self) -> bool {
        self == Sex::Male
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

// ============================================================================
// Optional Measurements
// ============================================================================

/// The optional attributes of a measurement record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalField {
    Waist,
    Hip,
    HeartRate,
    Sbp,
    Dbp,
    Hemoglobin,
    SaO2,
    PaO2,
    SvO2,
    PaCo2,
    Creatinine,
    Glucose,
    Insulin,
    Triglycerides,
    TotalCholesterol,
    Hdl,
    Albumin,
    Bun,
    Ethanol,
}

impl OptionalField {
    /// All optional fields in prompt order
    pub const ALL: [OptionalField; 19] = [
        OptionalField::Waist,
        OptionalField::Hip,
        OptionalField::HeartRate,
        OptionalField::Sbp,
        OptionalField::Dbp,
        OptionalField::Creatinine,
        OptionalField::Hemoglobin,
        OptionalField::SaO2,
        OptionalField::PaO2,
        OptionalField::SvO2,
        OptionalField::PaCo2,
        OptionalField::Glucose,
        OptionalField::Insulin,
        OptionalField::Triglycerides,
        OptionalField::TotalCholesterol,
        OptionalField::Hdl,
        OptionalField::Albumin,
        OptionalField::Bun,
        OptionalField::Ethanol,
    ];

    /// Stable snake_case key used in input maps and files
    pub fn key(self) -> &'static str {
        match self {
            OptionalField::Waist => "waist",
            OptionalField::Hip => "hip",
            OptionalField::HeartRate => "heart_rate",
            OptionalField::Sbp => "sbp",
            OptionalField::Dbp => "dbp",
            OptionalField::Hemoglobin => "hemoglobin",
            OptionalField::SaO2 => "sa_o2",
            OptionalField::PaO2 => "pa_o2",
            OptionalField::SvO2 => "sv_o2",
            OptionalField::PaCo2 => "pa_co2",
            OptionalField::Creatinine => "creatinine",
            OptionalField::Glucose => "glucose",
            OptionalField::Insulin => "insulin",
            OptionalField::Triglycerides => "triglycerides",
            OptionalField::TotalCholesterol => "total_cholesterol",
            OptionalField::Hdl => "hdl",
            OptionalField::Albumin => "albumin",
            OptionalField::Bun => "bun",
            OptionalField::Ethanol => "ethanol",
        }
    }

    /// Human-readable label with unit, for prompts
    pub fn label(self) -> &'static str {
        match self {
            OptionalField::Waist => "Waist (cm)",
            OptionalField::Hip => "Hip (cm)",
            OptionalField::HeartRate => "Heart rate (bpm)",
            OptionalField::Sbp => "Systolic BP (mmHg)",
            OptionalField::Dbp => "Diastolic BP (mmHg)",
            OptionalField::Hemoglobin => "Hemoglobin (g/dL)",
            OptionalField::SaO2 => "SaO2 (%)",
            OptionalField::PaO2 => "PaO2 (mmHg)",
            OptionalField::SvO2 => "SvO2 (%)",
            OptionalField::PaCo2 => "PaCO2 (mmHg)",
            OptionalField::Creatinine => "Serum creatinine (mg/dL)",
            OptionalField::Glucose => "Glucose (mg/dL)",
            OptionalField::Insulin => "Insulin (µU/mL)",
            OptionalField::Triglycerides => "Triglycerides (mg/dL)",
            OptionalField::TotalCholesterol => "Total Cholesterol (mg/dL)",
            OptionalField::Hdl => "HDL (mg/dL)",
            OptionalField::Albumin => "Albumin (g/dL)",
            OptionalField::Bun => "BUN (mg/dL)",
            OptionalField::Ethanol => "Ethanol (mg/dL)",
        }
    }

    /// Laboratory values are prompted in their own section
    pub fn is_lab(self) -> bool {
        !matches!(
            self,
            OptionalField::Waist
                | OptionalField::Hip
                | OptionalField::HeartRate
                | OptionalField::Sbp
                | OptionalField::Dbp
        )
    }
}

impl FromStr for OptionalField {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let key = s.trim().to_lowercase();
        OptionalField::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| crate::Error::invalid(s, "unknown measurement field"))
    }
}

impl fmt::Display for OptionalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Measurement Record
// ============================================================================

/// A subject's measurements: required core values plus optional vitals/labs
///
/// Units: weight kg, height m, age years, waist/hip cm, pressures mmHg,
/// hemoglobin and albumin g/dL, other labs mg/dL, insulin µU/mL.
/// Saturations may be given as a fraction (0.98) or a percentage (98).
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRecord {
    pub weight: f64,
    pub height: f64,
    pub age: f64,
    pub sex: Sex,

    pub waist: Option<f64>,
    pub hip: Option<f64>,

    pub heart_rate: Option<f64>,
    pub sbp: Option<f64>,
    pub dbp: Option<f64>,

    pub hemoglobin: Option<f64>,
    pub sa_o2: Option<f64>,
    pub pa_o2: Option<f64>,
    pub sv_o2: Option<f64>,
    pub pa_co2: Option<f64>,
    pub creatinine: Option<f64>,
    pub glucose: Option<f64>,
    pub insulin: Option<f64>,
    pub triglycerides: Option<f64>,
    pub total_cholesterol: Option<f64>,
    pub hdl: Option<f64>,
    pub albumin: Option<f64>,
    pub bun: Option<f64>,
    pub ethanol: Option<f64>,
}

impl MeasurementRecord {
    /// Create a record with every optional field absent
    pub fn new(weight: f64, height: f64, age: f64, sex: Sex) -> Self {
        Self {
            weight,
            height,
            age,
            sex,
            waist: None,
            hip: None,
            heart_rate: None,
            sbp: None,
            dbp: None,
            hemoglobin: None,
            sa_o2: None,
            pa_o2: None,
            sv_o2: None,
            pa_co2: None,
            creatinine: None,
            glucose: None,
            insulin: None,
            triglycerides: None,
            total_cholesterol: None,
            hdl: None,
            albumin: None,
            bun: None,
            ethanol: None,
        }
    }

    /// Set an optional field, consuming and returning the record.
    ///
    /// NaN and infinite values leave the field absent.
    pub fn with(mut self, field: OptionalField, value: f64) -> Self {
        *self.slot(field) = value.is_finite().then_some(value);
        self
    }

    /// Read an optional field
    pub fn get(&self, field: OptionalField) -> Option<f64> {
        match field {
            OptionalField::Waist => self.waist,
            OptionalField::Hip => self.hip,
            OptionalField::HeartRate => self.heart_rate,
            OptionalField::Sbp => self.sbp,
            OptionalField::Dbp => self.dbp,
            OptionalField::Hemoglobin => self.hemoglobin,
            OptionalField::SaO2 => self.sa_o2,
            OptionalField::PaO2 => self.pa_o2,
            OptionalField::SvO2 => self.sv_o2,
            OptionalField::PaCo2 => self.pa_co2,
            OptionalField::Creatinine => self.creatinine,
            OptionalField::Glucose => self.glucose,
            OptionalField::Insulin => self.insulin,
            OptionalField::Triglycerides => self.triglycerides,
            OptionalField::TotalCholesterol => self.total_cholesterol,
            OptionalField::Hdl => self.hdl,
            OptionalField::Albumin => self.albumin,
            OptionalField::Bun => self.bun,
            OptionalField::Ethanol => self.ethanol,
        }
    }

    fn slot(&mut self, field: OptionalField) -> &mut Option<f64> {
        match field {
            OptionalField::Waist => &mut self.waist,
            OptionalField::Hip => &mut self.hip,
            OptionalField::HeartRate => &mut self.heart_rate,
            OptionalField::Sbp => &mut self.sbp,
            OptionalField::Dbp => &mut self.dbp,
            OptionalField::Hemoglobin => &mut self.hemoglobin,
            OptionalField::SaO2 => &mut self.sa_o2,
            OptionalField::PaO2 => &mut self.pa_o2,
            OptionalField::SvO2 => &mut self.sv_o2,
            OptionalField::PaCo2 => &mut self.pa_co2,
            OptionalField::Creatinine => &mut self.creatinine,
            OptionalField::Glucose => &mut self.glucose,
            OptionalField::Insulin => &mut self.insulin,
            OptionalField::Triglycerides => &mut self.triglycerides,
            OptionalField::TotalCholesterol => &mut self.total_cholesterol,
            OptionalField::Hdl => &mut self.hdl,
            OptionalField::Albumin => &mut self.albumin,
            OptionalField::Bun => &mut self.bun,
            OptionalField::Ethanol => &mut self.ethanol,
        }
    }

    /// Height in centimetres
    pub fn height_cm(&self) -> f64 {
        self.height * 100.0
    }

    /// Height in inches
    pub fn height_in(&self) -> f64 {
        self.height * 39.3700787
    }
}

// ============================================================================
// Results
// ============================================================================

/// One named formula outcome; `value` is `None` when inputs were insufficient
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormulaResult {
    pub name: &'static str,
    pub value: Option<f64>,
}

/// Formula results in category definition order
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct BlockResults {
    entries: Vec<FormulaResult>,
}

impl BlockResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Option<f64>) {
        self.entries.push(FormulaResult { name, value });
    }

    pub(crate) fn extend(&mut self, other: BlockResults) {
        self.entries.extend(other.entries);
    }

    /// Look up an entry by display name.
    ///
    /// Outer `None`: no such entry. Inner `None`: entry unavailable.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormulaResult> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with a value
    pub fn available(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_some()).count()
    }
}

impl<'a> IntoIterator for &'a BlockResults {
    type Item = &'a FormulaResult;
    type IntoIter = std::slice::Iter<'a, FormulaResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_classification() {
        assert_eq!(Sex::classify("male"), Sex::Male);
        assert_eq!(Sex::classify("  M"), Sex::Male);
        assert_eq!(Sex::classify("Man"), Sex::Male);
        assert_eq!(Sex::classify("female"), Sex::Female);
        // Anything not starting with 'm' falls into the female branch
        assert_eq!(Sex::classify("x"), Sex::Female);
        assert_eq!(Sex::classify(""), Sex::Female);
    }

    #[test]
    fn test_optional_field_keys_roundtrip() {
        for field in OptionalField::ALL {
            assert_eq!(field.key().parse::<OptionalField>().unwrap(), field);
        }
        assert!("cholesterol".parse::<OptionalField>().is_err());
    }

    #[test]
    fn test_with_and_get() {
        let record = MeasurementRecord::new(70.0, 1.75, 30.0, Sex::Male)
            .with(OptionalField::Waist, 80.0)
            .with(OptionalField::Hdl, 50.0);

        assert_eq!(record.get(OptionalField::Waist), Some(80.0));
        assert_eq!(record.hdl, Some(50.0));
        assert_eq!(record.get(OptionalField::Hip), None);
    }

    #[test]
    fn test_with_non_finite_is_absent() {
        let record = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male)
            .with(OptionalField::Glucose, f64::NAN)
            .with(OptionalField::Bun, f64::INFINITY)
            .with(OptionalField::Ethanol, f64::NEG_INFINITY);

        assert_eq!(record.get(OptionalField::Glucose), None);
        assert_eq!(record.get(OptionalField::Bun), None);
        assert_eq!(record.get(OptionalField::Ethanol), None);

        // Absent labs count as zero in osmolality, so the result stays available
        let osm = crate::formulas::acid_base::calculated_osmolality(
            &record,
            140.0,
            &crate::formulas::acid_base::OsmolalityInputs::default(),
        );
        assert_eq!(osm, Some(280.0));
    }

    #[test]
    fn test_with_overwrites_previous_value_with_absent() {
        let record = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male)
            .with(OptionalField::Waist, 80.0)
            .with(OptionalField::Waist, f64::NAN);
        assert_eq!(record.waist, None);
    }

    #[test]
    fn test_block_results_lookup() {
        let mut results = BlockResults::new();
        results.push("BMI", Some(22.0));
        results.push("RFM", None);

        assert_eq!(results.len(), 2);
        assert_eq!(results.available(), 1);
        assert_eq!(results.get("BMI"), Some(Some(22.0)));
        assert_eq!(results.get("RFM"), Some(None));
        assert_eq!(results.get("missing"), None);
        assert_eq!(results.names().collect::<Vec<_>>(), vec!["BMI", "RFM"]);
    }

    #[test]
    fn test_block_results_serialize_null_for_unavailable() {
        let mut results = BlockResults::new();
        results.push("HOMA-IR", None);

        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(json, r#"[{"name":"HOMA-IR","value":null}]"#);
    }
}
