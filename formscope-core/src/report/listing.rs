//! Field listing: one record per root field, persisted as JSON

use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::FormDocument;
use crate::error::Result;
use crate::forms::{FieldDict, FormLookup, StructureAbsent};

/// Default location of the persisted listing
pub const DEFAULT_OUTPUT_PATH: &str = "pdf-fields.json";

/// One enumerated field, as written to the listing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// 1-based position in the `/Fields` array
    pub index: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldRecord {
    pub fn from_field(index: usize, field: &FieldDict<'_>) -> Self {
        Self {
            index,
            name: field.name_or_unknown(),
            field_type: field.field_type_or_unknown(),
        }
    }
}

impl fmt::Display for FieldRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. \"{}\" ({})", self.index, self.name, self.field_type)
    }
}

/// Listing options
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Where the JSON listing is written
    pub output: PathBuf,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Build one record per field, stopping at the first field that fails to
/// resolve.
pub fn collect_records<'a, I>(fields: I) -> Result<Vec<FieldRecord>>
where
    I: IntoIterator<Item = Result<FieldDict<'a>>>,
{
    fields
        .into_iter()
        .enumerate()
        .map(|(position, field)| Ok(FieldRecord::from_field(position + 1, &field?)))
        .collect()
}

/// Serialize `records` as JSON indented by two spaces.
pub fn write_records<W: Write>(records: &[FieldRecord], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Parse a listing previously produced by [`write_records`].
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FieldRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write `records` to `path` in a single call, after serializing them fully.
pub fn save_records<P: AsRef<Path>>(records: &[FieldRecord], path: P) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Enumerate every root field of `doc`, print it, and persist the listing.
///
/// A document without form fields prints a diagnostic and returns no
/// records; nothing is written in that case.
pub fn run_listing<W: Write>(
    doc: &FormDocument,
    options: &ListingOptions,
    out: &mut W,
) -> Result<Vec<FieldRecord>> {
    let fields = match doc.acro_form()? {
        FormLookup::Absent(absent) => {
            writeln!(out, "{absent}")?;
            return Ok(Vec::new());
        }
        FormLookup::Fields(fields) if fields.is_empty() => {
            writeln!(out, "{}", StructureAbsent::NoFields)?;
            return Ok(Vec::new());
        }
        FormLookup::Fields(fields) => fields,
    };

    let records = collect_records(fields)?;

    writeln!(out, "Found {} form fields in the PDF:\n", records.len())?;
    for record in &records {
        writeln!(out, "{record}")?;
    }

    save_records(&records, &options.output)?;
    info!("wrote {} records to {}", records.len(), options.output.display());
    writeln!(out, "\nField data saved to {}", options.output.display())?;

    Ok(records)
}
