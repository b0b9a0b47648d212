//! Configuration file support for BioMax.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/biomax/config.toml`.
//! Every key is optional; the defaults reproduce the fixed constants the
//! category blocks have always used.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub formulas: FormulaSettings,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Parameters the category blocks feed into formulas that need more than the
/// measurement record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FormulaSettings {
    /// Multiplier applied to Mifflin BMR for TDEE
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,

    /// Fraction of excess weight added back to IBW for adjusted body weight
    #[serde(default = "default_adjusted_weight_factor")]
    pub adjusted_weight_factor: f64,

    /// Volume of distribution (L) for the illustrative half-life entry
    #[serde(default = "default_example_vd_l")]
    pub example_vd_l: f64,

    /// Clearance (L/hr) for the illustrative half-life entry
    #[serde(default = "default_example_cl_l_hr")]
    pub example_cl_l_hr: f64,

    /// kcal subtracted/added to TDEE for the loss/gain targets
    #[serde(default = "default_deficit_kcal")]
    pub deficit_kcal: f64,

    #[serde(default = "default_protein_g_per_kg")]
    pub protein_g_per_kg: f64,

    #[serde(default = "default_water_ml_per_kg")]
    pub water_ml_per_kg: f64,
}

impl Default for FormulaSettings {
    fn default() -> Self {
        Self {
            activity_factor: default_activity_factor(),
            adjusted_weight_factor: default_adjusted_weight_factor(),
            example_vd_l: default_example_vd_l(),
            example_cl_l_hr: default_example_cl_l_hr(),
            deficit_kcal: default_deficit_kcal(),
            protein_g_per_kg: default_protein_g_per_kg(),
            water_ml_per_kg: default_water_ml_per_kg(),
        }
    }
}

/// Result printing configuration (CLI only)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Decimal places for text output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Text shown in place of an unavailable result
    #[serde(default = "default_unavailable")]
    pub unavailable: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            unavailable: default_unavailable(),
        }
    }
}

// Default value functions
fn default_activity_factor() -> f64 {
    1.55
}

fn default_adjusted_weight_factor() -> f64 {
    0.4
}

fn default_example_vd_l() -> f64 {
    40.0
}

fn default_example_cl_l_hr() -> f64 {
    5.0
}

fn default_deficit_kcal() -> f64 {
    500.0
}

fn default_protein_g_per_kg() -> f64 {
    1.6
}

fn default_water_ml_per_kg() -> f64 {
    35.0
}

fn default_precision() -> usize {
    4
}

fn default_unavailable() -> String {
    "(insufficient inputs)".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            other => {
                tracing::info!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory can be resolved
    pub fn default_config_path() -> Option<PathBuf> {
        let base = dirs::config_dir().or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        })?;
        Some(base.join("biomax").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings that would make every dependent entry meaningless
    pub fn validate(&self) -> Result<()> {
        let f = &self.formulas;
        let positive = [
            ("formulas.activity_factor", f.activity_factor),
            ("formulas.example_vd_l", f.example_vd_l),
            ("formulas.example_cl_l_hr", f.example_cl_l_hr),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!("{} must be > 0, got {}", key, value)));
            }
        }
        if !(0.0..=1.0).contains(&f.adjusted_weight_factor) {
            return Err(Error::Config(format!(
                "formulas.adjusted_weight_factor must be within 0..=1, got {}",
                f.adjusted_weight_factor
            )));
        }
        if self.output.precision > 12 {
            return Err(Error::Config(format!(
                "output.precision must be <= 12, got {}",
                self.output.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.formulas.activity_factor, 1.55);
        assert_eq!(config.formulas.adjusted_weight_factor, 0.4);
        assert_eq!(config.formulas.example_vd_l, 40.0);
        assert_eq!(config.formulas.example_cl_l_hr, 5.0);
        assert_eq!(config.output.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[formulas]
activity_factor = 1.2
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.formulas.activity_factor, 1.2);
        assert_eq!(config.formulas.adjusted_weight_factor, 0.4); // default
        assert_eq!(config.output.unavailable, "(insufficient inputs)");
    }

    #[test]
    fn test_load_and_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.precision = 2;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.precision, 2);
    }

    #[test]
    fn test_rejects_non_positive_clearance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[formulas]\nexample_cl_l_hr = 0.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
