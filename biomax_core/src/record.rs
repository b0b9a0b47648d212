//! Measurement record construction from raw text input.
//!
//! Callers (the interactive prompt, input files) hand over text keyed by
//! field name. Required numbers must be present and numeric; optional
//! values may be blank, which means absent.

use crate::{Error, MeasurementRecord, OptionalField, Result, Sex};
use std::collections::HashMap;

/// Raw text inputs keyed by field name
pub type RawInputs = HashMap<String, String>;

/// Keys accepted in the required map
pub const REQUIRED_KEYS: [&str; 4] = ["weight", "height", "age", "sex"];

/// Sex assumed when none is given
pub const DEFAULT_SEX: &str = "male";

/// Parse one numeric measurement.
///
/// Blank text is `Ok(None)`; anything that is not a finite number is
/// `InvalidInput` naming `field`.
pub fn parse_value(field: &str, text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::invalid(field, format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(Error::invalid(field, format!("'{}' is not finite", trimmed)));
    }

    Ok(Some(value))
}

fn required_number(required: &RawInputs, key: &str) -> Result<f64> {
    let text = required
        .get(key)
        .ok_or_else(|| Error::invalid(key, "required value missing"))?;

    parse_value(key, text)?.ok_or_else(|| Error::invalid(key, "required value missing"))
}

/// Build a measurement record from required and optional text maps.
///
/// `required` must carry `weight`, `height` and `age`; `sex` is optional and
/// defaults to male. `optional` keys are [`OptionalField`] keys.
pub fn build_record(required: &RawInputs, optional: &RawInputs) -> Result<MeasurementRecord> {
    if let Some(unknown) = required.keys().find(|k| !REQUIRED_KEYS.contains(&k.as_str())) {
        return Err(Error::invalid(unknown.as_str(), "not a required field"));
    }

    let weight = required_number(required, "weight")?;
    let height = required_number(required, "height")?;
    let age = required_number(required, "age")?;

    let sex_text = required
        .get("sex")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SEX);
    let sex = Sex::classify(sex_text);

    let mut record = MeasurementRecord::new(weight, height, age, sex);

    let mut keys: Vec<&String> = optional.keys().collect();
    keys.sort();
    if let Some(unknown) = keys.iter().find(|k| k.parse::<OptionalField>().is_err()) {
        return Err(Error::invalid(unknown.as_str(), "unknown measurement field"));
    }

    // Field order, not map order, decides which bad value is reported
    for field in OptionalField::ALL {
        if let Some(text) = optional.get(field.key()) {
            if let Some(value) = parse_value(field.key(), text)? {
                record = record.with(field, value);
            }
        }
    }

    tracing::debug!(
        "Built measurement record ({}, {} optional values present)",
        record.sex,
        OptionalField::ALL
            .iter()
            .filter(|f| record.get(**f).is_some())
            .count()
    );

    Ok(record)
}
