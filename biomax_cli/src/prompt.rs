//! Interactive measurement entry.
//!
//! Reads answers line by line, re-prompting (in a loop) until a value parses.
//! Generic over the reader/writer so sessions can be scripted in tests.

use biomax_core::record::DEFAULT_SEX;
use biomax_core::{
    build_record, parse_value, Block, Error, MeasurementRecord, OptionalField, RawInputs, Result,
    Selection,
};
use std::io::{BufRead, Write};

/// Read one line; `None` on end of input
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the answer is a number (or blank, when `optional`)
fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    key: &str,
    label: &str,
    optional: bool,
) -> Result<Option<String>> {
    let suffix = if optional { " [optional]" } else { "" };
    loop {
        write!(out, "{}{}: ", label, suffix)?;
        out.flush()?;

        let answer = match read_answer(input)? {
            Some(answer) => answer,
            None if optional => return Ok(None),
            None => {
                return Err(Error::InvalidInput {
                    field: key.to_string(),
                    reason: "input ended before a value was entered".into(),
                })
            }
        };

        match parse_value(key, &answer) {
            Ok(Some(_)) => return Ok(Some(answer)),
            Ok(None) if optional => return Ok(None),
            Ok(None) => writeln!(out, "A value is required; try again.")?,
            Err(_) => writeln!(out, "Invalid number; try again.")?,
        }
    }
}

/// Collect required and optional measurements and build the record
pub fn read_record<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<MeasurementRecord> {
    let mut required = RawInputs::new();
    let mut optional = RawInputs::new();

    let required_labels = [("weight", "Weight (kg)"), ("height", "Height (m)"), ("age", "Age (years)")];
    for (key, label) in required_labels {
        if let Some(text) = ask_number(input, out, key, label, false)? {
            required.insert(key.to_string(), text);
        }
    }

    write!(out, "Sex (male/female): ")?;
    out.flush()?;
    let sex = read_answer(input)?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SEX.to_string());
    required.insert("sex".to_string(), sex);

    let mut labs_announced = false;
    for field in OptionalField::ALL {
        if field.is_lab() && !labs_announced {
            writeln!(out, "\n--- Optional labs (press Enter to skip) ---")?;
            labs_announced = true;
        }
        if let Some(text) = ask_number(input, out, field.key(), field.label(), true)? {
            optional.insert(field.key().to_string(), text);
        }
    }

    build_record(&required, &optional)
}

/// Map a menu answer to a selection: a menu number, or a block name in any case
fn menu_choice(answer: &str) -> Option<Selection> {
    let answer = answer.trim().to_lowercase();
    if let Ok(number) = answer.parse::<usize>() {
        return match number {
            n if n == Selection::ALL_NUMBER => Some(Selection::All),
            n => n
                .checked_sub(1)
                .and_then(|i| Block::ALL.get(i))
                .map(|block| Selection::Block(*block)),
        };
    }
    answer.parse().ok()
}

/// Show the category menu and read a choice.
///
/// Blank, end of input and unrecognised choices all compute every block.
pub fn read_selection<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Selection> {
    writeln!(out, "\nChoose category to compute:")?;
    for block in Block::ALL {
        writeln!(out, " {}) {}", block.number(), block.title())?;
    }
    writeln!(out, " {}) Compute ALL", Selection::ALL_NUMBER)?;

    write!(out, "Enter choice (1-{}): ", Selection::ALL_NUMBER)?;
    out.flush()?;

    let answer = match read_answer(input)? {
        Some(answer) if !answer.is_empty() => answer,
        _ => return Ok(Selection::All),
    };

    match menu_choice(&answer) {
        Some(selection) => Ok(selection),
        None => {
            writeln!(out, "Unknown choice '{}'; computing all.", answer)?;
            Ok(Selection::All)
        }
    }
}
