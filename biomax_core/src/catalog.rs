//! Catalog of result blocks.
//!
//! Each block is a fixed, ordered list of display names bound to formulas.
//! Display names are unique across the whole catalog so "all" can be a
//! plain concatenation.

use crate::formulas::{
    anthropometry, energy, hemodynamics, insulin, lipids, pharmacokinetics, renal,
};
use crate::{Error, FormulaSettings, MeasurementRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A formula as evaluated by the aggregator
pub type FormulaFn = fn(&MeasurementRecord, &FormulaSettings) -> Option<f64>;

/// One named catalog entry
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub formula: FormulaFn,
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry").field("name", &self.name).finish()
    }
}

/// Result category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    Anthropometry,
    Energy,
    Cardio,
    Renal,
    Lipid,
    Insulin,
    Pharmacokinetics,
}

impl Block {
    /// All blocks in definition order
    pub const ALL: [Block; 7] = [
        Block::Anthropometry,
        Block::Energy,
        Block::Cardio,
        Block::Renal,
        Block::Lipid,
        Block::Insulin,
        Block::Pharmacokinetics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Block::Anthropometry => "anthropometry",
            Block::Energy => "energy",
            Block::Cardio => "cardio",
            Block::Renal => "renal",
            Block::Lipid => "lipid",
            Block::Insulin => "insulin",
            Block::Pharmacokinetics => "pharmacokinetics",
        }
    }

    /// Menu title
    pub fn title(self) -> &'static str {
        match self {
            Block::Anthropometry => "Basic anthropometry",
            Block::Energy => "Energy / metabolic (BMR/TDEE)",
            Block::Cardio => "Cardio / hemodynamics",
            Block::Renal => "Renal",
            Block::Lipid => "Lipids & cardiometabolic indices",
            Block::Insulin => "Insulin resistance",
            Block::Pharmacokinetics => "Pharmacokinetics examples",
        }
    }

    /// 1-based menu number
    pub fn number(self) -> usize {
        Block::ALL.iter().position(|b| *b == self).map_or(0, |i| i + 1)
    }

    /// Catalog entries for this block
    pub fn entries(self) -> &'static [CatalogEntry] {
        DEFAULT_CATALOG
            .get(&self)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Block {
    type Err = Error;

    /// Exact canonical block names only
    fn from_str(s: &str) -> Result<Self, Error> {
        Block::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| Error::UnknownBlock(s.to_string()))
    }
}

/// A single block or the union of all of them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Block(Block),
    All,
}

impl Selection {
    /// Menu number of the "all" option
    pub const ALL_NUMBER: usize = Block::ALL.len() + 1;

    pub fn blocks(self) -> Vec<Block> {
        match self {
            Selection::Block(block) => vec![block],
            Selection::All => Block::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s == "all" {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Block)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Block(block) => f.write_str(block.name()),
            Selection::All => f.write_str("all"),
        }
    }
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<HashMap<Block, Vec<CatalogEntry>>> = Lazy::new(build_catalog);

fn entry(name: &'static str, formula: FormulaFn) -> CatalogEntry {
    CatalogEntry { name, formula }
}

fn build_catalog() -> HashMap<Block, Vec<CatalogEntry>> {
    let mut blocks = HashMap::new();

    // ========================================================================
    // Anthropometry
    // ========================================================================

    blocks.insert(
        Block::Anthropometry,
        vec![
            entry("BMI", |r, _| anthropometry::bmi(r)),
            entry("BMI Prime", |r, _| anthropometry::bmi_prime(r)),
            entry("Ponderal Index", |r, _| anthropometry::ponderal_index(r)),
            entry("IBW (Devine kg)", |r, _| anthropometry::ibw_devine(r)),
            // Record weight stands in as the actual body weight
            entry("Adjusted BW (kg)", |r, s| {
                anthropometry::adjusted_body_weight(r, Some(r.weight), s.adjusted_weight_factor)
            }),
            entry("BSA (m^2)", |r, _| anthropometry::body_surface_area(r)),
            entry("Waist-Hip Ratio", |r, _| anthropometry::waist_hip_ratio(r)),
            entry("Waist-Height Ratio", |r, _| anthropometry::waist_height_ratio(r)),
            entry("BAI", |r, _| anthropometry::body_adiposity_index(r)),
            entry("RFM", |r, _| anthropometry::relative_fat_mass(r)),
            entry("LBM (James)", |r, _| anthropometry::lbm_james(r)),
            entry("Fat Mass (kg)", |r, _| anthropometry::fat_mass(r, None)),
        ],
    );

    // ========================================================================
    // Energy
    // ========================================================================

    blocks.insert(
        Block::Energy,
        vec![
            entry("BMR (Mifflin)", |r, _| energy::bmr_mifflin(r)),
            entry("BMR (Harris-Benedict)", |r, _| energy::bmr_harris_benedict(r)),
            entry("BMR (Katch-McArdle)", |r, _| energy::bmr_katch_mcardle(r, None)),
            entry("TDEE (kcal/day)", |r, s| energy::tdee(r, s.activity_factor)),
            entry("Calories for Loss (TDEE-deficit)", |r, s| {
                energy::tdee(r, s.activity_factor).map(|t| t - s.deficit_kcal)
            }),
            entry("Calories for Gain (TDEE+deficit)", |r, s| {
                energy::tdee(r, s.activity_factor).map(|t| t + s.deficit_kcal)
            }),
            entry("Protein (g/day)", |r, s| energy::protein_target(r, s.protein_g_per_kg)),
            entry("Water (ml/day)", |r, s| energy::water_target(r, s.water_ml_per_kg)),
        ],
    );

    // ========================================================================
    // Cardio
    // ========================================================================

    blocks.insert(
        Block::Cardio,
        vec![
            entry("MAP (mmHg)", |r, _| hemodynamics::mean_arterial_pressure(r)),
            entry("Rate Pressure Product", |r, _| hemodynamics::rate_pressure_product(r)),
            entry("Shock Index", |r, _| hemodynamics::shock_index(r)),
            entry("Conicity Index", |r, _| anthropometry::conicity_index(r)),
        ],
    );

    // ========================================================================
    // Renal, lipids, insulin resistance
    // ========================================================================

    blocks.insert(
        Block::Renal,
        vec![
            entry("Cockcroft-Gault CrCl (mL/min)", |r, _| renal::cockcroft_gault(r)),
            entry("MDRD eGFR (mL/min/1.73m^2)", |r, _| renal::mdrd_egfr(r)),
        ],
    );

    blocks.insert(
        Block::Lipid,
        vec![
            entry("LDL (Friedewald)", |r, _| lipids::ldl_friedewald(r)),
            entry("Non-HDL", |r, _| lipids::non_hdl(r)),
            entry("AIP", |r, _| lipids::atherogenic_index(r)),
            entry("TyG", |r, _| lipids::tyg_index(r)),
        ],
    );

    blocks.insert(
        Block::Insulin,
        vec![
            entry("HOMA-IR", |r, _| insulin::homa_ir(r)),
            entry("QUICKI", |r, _| insulin::quicki(r)),
        ],
    );

    // ========================================================================
    // Pharmacokinetics
    // ========================================================================

    blocks.insert(
        Block::Pharmacokinetics,
        vec![entry("Example half-life (hr)", |_, s| {
            pharmacokinetics::half_life(s.example_vd_l, s.example_cl_l_hr)
        })],
    );

    blocks
}

/// Names that appear in more than one entry across the catalog
pub fn duplicate_names() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    Block::ALL
        .iter()
        .flat_map(|b| b.entries())
        .filter(|e| !seen.insert(e.name))
        .map(|e| e.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_block_has_entries() {
        for block in Block::ALL {
            assert!(!block.entries().is_empty(), "{block} is empty");
        }
    }

    #[test]
    fn test_block_sizes() {
        assert_eq!(Block::Anthropometry.entries().len(), 12);
        assert_eq!(Block::Energy.entries().len(), 8);
        assert_eq!(Block::Cardio.entries().len(), 4);
        assert_eq!(Block::Renal.entries().len(), 2);
        assert_eq!(Block::Lipid.entries().len(), 4);
        assert_eq!(Block::Insulin.entries().len(), 2);
        assert_eq!(Block::Pharmacokinetics.entries().len(), 1);
    }

    #[test]
    fn test_names_unique_across_catalog() {
        assert!(duplicate_names().is_empty(), "{:?}", duplicate_names());
    }

    #[test]
    fn test_block_parsing() {
        assert_eq!("renal".parse::<Block>().unwrap(), Block::Renal);
        assert_eq!("pharmacokinetics".parse::<Block>().unwrap(), Block::Pharmacokinetics);
        assert!(matches!("kidney".parse::<Block>(), Err(Error::UnknownBlock(_))));
    }

    #[test]
    fn test_block_parsing_is_exact() {
        // Menu numbers, other casing and padding belong to the prompt, not here
        for name in ["1", "7", "Renal", " lipid ", "LIPID"] {
            assert!(
                matches!(name.parse::<Block>(), Err(Error::UnknownBlock(ref n)) if n == name),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "insulin".parse::<Selection>().unwrap(),
            Selection::Block(Block::Insulin)
        );
        assert!(matches!("ALL".parse::<Selection>(), Err(Error::UnknownBlock(_))));
        assert!(matches!("8".parse::<Selection>(), Err(Error::UnknownBlock(_))));
        assert!("0".parse::<Selection>().is_err());
        assert_eq!(Selection::All.blocks().len(), 7);
    }

    #[test]
    fn test_display_roundtrip() {
        for block in Block::ALL {
            assert_eq!(block.to_string().parse::<Block>().unwrap(), block);
        }
    }
}
