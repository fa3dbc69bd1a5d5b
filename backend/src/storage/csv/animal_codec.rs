//! Conversion between [`AnimalRecord`] and one row of `animals.csv`.
//!
//! Row layout is `id,kind,name,weight,extra`. Lions have no extra property
//! and are written with an empty trailing field so every row keeps five
//! columns. Decoding is lenient in the same places the file format always has
//! been: a row with a bad id, bad weight or unknown kind is dropped, while an
//! unparsable numeric property falls back to zero.

use anyhow::{anyhow, Result};
use csv::StringRecord;
use shared::{AnimalDetails, AnimalKind, AnimalRecord};

use super::table_file::{csv_writer_builder, parse_line};

pub const ANIMAL_HEADER: &[&str] = &["Id", "Type", "Name", "Weight", "Extra"];

/// Minimum number of columns a readable row must have
const REQUIRED_FIELDS: usize = 4;

pub fn encode(animal: &AnimalRecord) -> StringRecord {
    let extra = match &animal.details {
        AnimalDetails::Lion => String::new(),
        AnimalDetails::Elephant { trunk_length } => trunk_length.to_string(),
        AnimalDetails::Parrot { color } => color.clone(),
        AnimalDetails::Giraffe { neck_length } => neck_length.to_string(),
        AnimalDetails::Penguin { rank } => rank.clone(),
    };

    StringRecord::from(vec![
        animal.id.to_string(),
        animal.kind().to_string(),
        animal.name.clone(),
        animal.weight.to_string(),
        extra,
    ])
}

/// Returns `None` for rows that should be skipped
pub fn decode(record: &StringRecord) -> Option<AnimalRecord> {
    if record.len() < REQUIRED_FIELDS {
        return None;
    }

    let id = record[0].trim().parse::<u32>().ok()?;
    let weight = parse_weight(&record[3])?;
    let kind = record[1].parse::<AnimalKind>().ok()?;
    let name = record[2].to_string();
    let extra = record.get(4).unwrap_or("");

    let details = match kind {
        AnimalKind::Lion => AnimalDetails::Lion,
        AnimalKind::Elephant => AnimalDetails::Elephant {
            trunk_length: parse_property(extra),
        },
        AnimalKind::Parrot => AnimalDetails::Parrot {
            color: extra.to_string(),
        },
        AnimalKind::Giraffe => AnimalDetails::Giraffe {
            neck_length: parse_property(extra),
        },
        AnimalKind::Penguin => AnimalDetails::Penguin {
            rank: extra.to_string(),
        },
    };

    Some(AnimalRecord {
        id,
        name,
        weight,
        details,
    })
}

/// Encode an animal as a single CSV line without the line terminator
pub fn encode_line(animal: &AnimalRecord) -> Result<String> {
    let mut writer = csv_writer_builder().from_writer(Vec::new());
    writer.write_record(&encode(animal))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to encode animal {}: {}", animal.id, e.error()))?;

    let line = String::from_utf8(bytes)?;
    Ok(line.trim_end_matches('\n').to_string())
}

/// Decode a single CSV line; `None` when the line is not a readable animal
pub fn decode_line(line: &str) -> Option<AnimalRecord> {
    parse_line(line.as_bytes()).and_then(|record| decode(&record))
}

fn parse_weight(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite() && *weight >= 0.0)
}

fn parse_property(field: &str) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
