//! Result rendering: text, JSON and CSV.

use biomax_core::{BlockResults, OutputConfig, Result};
use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

pub fn render<W: Write>(
    results: &BlockResults,
    format: Format,
    config: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    match format {
        Format::Text => render_text(results, config, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
            Ok(())
        }
        Format::Csv => render_csv(results, out),
    }
}

fn render_text<W: Write>(results: &BlockResults, config: &OutputConfig, out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Results ---")?;
    for result in results {
        match result.value {
            Some(v) => writeln!(out, "{}: {:.*}", result.name, config.precision, v)?,
            None => writeln!(out, "{}: {}", result.name, config.unavailable)?,
        }
    }
    Ok(())
}

fn render_csv<W: Write>(results: &BlockResults, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["name", "value"]).map_err(io::Error::from)?;
    for result in results {
        let value = result.value.map(|v| v.to_string()).unwrap_or_default();
        writer
            .write_record([result.name, value.as_str()])
            .map_err(io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biomax_core::{compute_block, MeasurementRecord, OptionalField, Sex};

    fn insulin_results() -> BlockResults {
        let record = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male)
            .with(OptionalField::Glucose, 100.0)
            .with(OptionalField::Insulin, 10.0);
        compute_block(&record, "insulin").unwrap()
    }

    fn rendered(results: &BlockResults, format: Format) -> String {
        let mut out = Vec::new();
        render(results, format, &OutputConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text() {
        let text = rendered(&insulin_results(), Format::Text);
        assert!(text.contains("HOMA-IR: 2.4691"));
        assert!(text.contains("QUICKI: 0.3333"));
    }

    #[test]
    fn test_text_unavailable_marker() {
        let record = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male);
        let results = compute_block(&record, "renal").unwrap();
        let config = OutputConfig {
            precision: 1,
            unavailable: "n/a".into(),
        };
        let mut out = Vec::new();
        render(&results, Format::Text, &config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("MDRD eGFR (mL/min/1.73m^2): n/a"));
    }

    #[test]
    fn test_json() {
        let json = rendered(&insulin_results(), Format::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "HOMA-IR");
        assert!(parsed[0]["value"].as_f64().is_some());
    }

    #[test]
    fn test_csv() {
        let record = MeasurementRecord::new(70.0, 1.75, 40.0, Sex::Male);
        let results = compute_block(&record, "insulin").unwrap();
        let csv = rendered(&results, Format::Csv);
        assert_eq!(csv, "name,value\nHOMA-IR,\nQUICKI,\n");
    }
}
