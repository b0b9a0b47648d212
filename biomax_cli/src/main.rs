mod output;
mod prompt;

use biomax_core::record::REQUIRED_KEYS;
use biomax_core::*;
use clap::{Parser, Subcommand};
use output::Format;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "biomax")]
#[command(about = "Clinical and biometric formula calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter measurements at the prompt and pick a category (default)
    Interactive,

    /// Compute results from a JSON file of measurements
    Compute {
        /// JSON object mapping field names to values
        #[arg(long)]
        input: PathBuf,

        /// Block to compute (anthropometry, energy, cardio, renal, lipid,
        /// insulin, pharmacokinetics, all)
        #[arg(long, default_value = "all")]
        block: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List available blocks
    Blocks,
}

fn main() -> Result<()> {
    // Initialize logging
    biomax_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Compute {
            input,
            block,
            format,
        }) => cmd_compute(&input, &block, format, &config),
        Some(Commands::Blocks) => cmd_blocks(),
        Some(Commands::Interactive) | None => cmd_interactive(&config),
    }
}

fn cmd_interactive(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    writeln!(out, "=== BioMax Health Assistant ===")?;
    let record = prompt::read_record(&mut input, &mut out)?;
    let selection = prompt::read_selection(&mut input, &mut out)?;

    tracing::info!("Computing {} for interactive record", selection);
    let results = compute(&record, selection, &config.formulas);
    output::render(&results, Format::Text, &config.output, &mut out)?;
    writeln!(out, "\nDone.")?;
    Ok(())
}

fn cmd_compute(input: &Path, block: &str, format: Format, config: &Config) -> Result<()> {
    let record = load_record(input)?;
    let results = compute_block_with(&record, block, &config.formulas)?;

    let mut out = io::stdout().lock();
    output::render(&results, format, &config.output, &mut out)
}

fn cmd_blocks() -> Result<()> {
    let mut out = io::stdout().lock();
    for block in Block::ALL {
        writeln!(
            out,
            "{}) {:<18} {}",
            block.number(),
            block.name(),
            block.title()
        )?;
    }
    writeln!(out, "{}) {:<18} Every block above", Selection::ALL_NUMBER, "all")?;
    Ok(())
}

/// Read a JSON measurement file and build the record from it.
///
/// Values may be numbers or strings; `null` counts as absent.
fn load_record(path: &Path) -> Result<MeasurementRecord> {
    let contents = std::fs::read_to_string(path)?;
    let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)?;

    let mut required = RawInputs::new();
    let mut optional = RawInputs::new();

    for (key, value) in fields {
        let text = match value {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => {
                return Err(Error::InvalidInput {
                    field: key,
                    reason: format!("expected a number or string, got {}", other),
                })
            }
        };

        if REQUIRED_KEYS.contains(&key.as_str()) {
            required.insert(key, text);
        } else {
            optional.insert(key, text);
        }
    }

    tracing::debug!("Loaded {} fields from {:?}", required.len() + optional.len(), path);
    build_record(&required, &optional)
}
