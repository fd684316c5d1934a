//! Deep dump of selected checkbox fields
//!
//! Looks up a fixed set of field names and prints, for each one found, its
//! value, default, appearance state, kids, appearance streams and flags.

use std::io::Write;

use tracing::debug;

use crate::document::FormDocument;
use crate::error::Result;
use crate::forms::{FieldDict, FormLookup};
use crate::objects::{describe, Dictionary, Object};

/// Field names watched when none are given
pub const DEFAULT_WATCHED_FIELDS: [&str; 2] = ["Arcane", "Divine"];

const NOT_SET: &str = "Not set";

/// Checkbox analysis options
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Names to look for, in report order
    pub watched: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            watched: DEFAULT_WATCHED_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A field located in the root field array
#[derive(Debug, Clone, Copy)]
pub struct FieldMatch<'a> {
    /// 1-based position in the `/Fields` array
    pub index: usize,
    pub field: FieldDict<'a>,
}

/// Select at most one field per watched name; the first match wins.
///
/// The result has one slot per entry of `watched`, in the same order.
pub fn find_watched<'a, I>(fields: I, watched: &[String]) -> Result<Vec<Option<FieldMatch<'a>>>>
where
    I: IntoIterator<Item = Result<FieldDict<'a>>>,
{
    let mut matches: Vec<Option<FieldMatch<'a>>> = vec![None; watched.len()];

    for (position, field) in fields.into_iter().enumerate() {
        let field = field?;
        let Some(name) = field.name() else {
            continue;
        };

        for (slot, wanted) in matches.iter_mut().zip(watched) {
            if slot.is_none() && *wanted == name {
                *slot = Some(FieldMatch {
                    index: position + 1,
                    field,
                });
            } else if slot.is_some() && *wanted == name {
                debug!("ignoring duplicate {name:?} at index {}", position + 1);
            }
        }
    }

    Ok(matches)
}

fn or_not_set(object: Option<&Object>) -> String {
    object.map_or_else(|| NOT_SET.to_string(), |o| describe(o).to_string())
}

fn appearance_dict_text(ap: &Dictionary) -> String {
    describe(&Object::Dictionary(ap.clone())).to_string()
}

/// Print the analysis block for one field.
pub fn write_field_analysis<W: Write>(field: &FieldDict<'_>, name: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Field Name: {name}")?;
    writeln!(out, "Field Type: {}", field.field_type_or_unknown())?;
    writeln!(out, "Field Value (/V): {}", or_not_set(field.value()))?;
    writeln!(out, "Default Value (/DV): {}", or_not_set(field.default_value()))?;
    writeln!(
        out,
        "Appearance State (/AS): {}",
        or_not_set(field.appearance_state())
    )?;

    let kids = field.kids()?;
    if kids.is_empty() {
        writeln!(out, "No Kids (direct field)")?;
    } else {
        writeln!(out, "Has Kids: {} sub-fields", kids.len())?;
        for (i, kid) in kids.iter().enumerate() {
            writeln!(out, "  Kid {}:", i + 1)?;
            writeln!(out, "    Type: {}", kid.field_type_or_unknown())?;
            writeln!(out, "    Value: {}", or_not_set(kid.value()))?;
            writeln!(out, "    AS: {}", or_not_set(kid.appearance_state()))?;

            if let Some(ap) = kid.appearance_dict().filter(|ap| !ap.is_empty()) {
                writeln!(out, "    Appearance Dict: {}", appearance_dict_text(ap))?;
                if let Some(normal) = kid.normal_appearance() {
                    writeln!(out, "    Normal Appearances: {normal}")?;
                }
            }
        }
    }

    if let Some(ap) = field.appearance_dict().filter(|ap| !ap.is_empty()) {
        writeln!(out, "Main Appearance Dict: {}", appearance_dict_text(ap))?;
        if let Some(normal) = field.normal_appearance() {
            writeln!(out, "Normal Appearances: {normal}")?;
        }
    }

    if let Some(raw) = field.raw_flags().filter(|raw| *raw != 0) {
        let names = field.flags().names_for(field.kind());
        if names.is_empty() {
            writeln!(out, "Field Flags: {raw}")?;
        } else {
            writeln!(out, "Field Flags: {raw} ({})", names.join(" | "))?;
        }
    }

    writeln!(out, "---")?;
    Ok(())
}

/// Locate the watched fields of `doc` and print an analysis block for each.
///
/// Returns one slot per watched name; names with no matching field stay
/// `None` and print nothing. A document without form fields prints nothing.
pub fn run_checkbox_analysis<'a, W: Write>(
    doc: &'a FormDocument,
    options: &AnalysisOptions,
    out: &mut W,
) -> Result<Vec<Option<FieldMatch<'a>>>> {
    let fields = match doc.acro_form()? {
        FormLookup::Fields(fields) => fields,
        FormLookup::Absent(absent) => {
            debug!("nothing to analyze: {absent}");
            return Ok(vec![None; options.watched.len()]);
        }
    };

    let matches = find_watched(fields, &options.watched)?;

    let mut found: Vec<(usize, &str)> = matches
        .iter()
        .zip(&options.watched)
        .filter_map(|(slot, name)| slot.map(|m| (m.index, name.as_str())))
        .collect();
    found.sort_by_key(|(index, _)| *index);
    found.dedup();
    for (index, name) in found {
        writeln!(out, "Found {name} field at index {index}")?;
    }

    for (slot, name) in matches.iter().zip(&options.watched) {
        if let Some(found) = slot {
            writeln!(out, "\n=== {} CHECKBOX ANALYSIS ===", name.to_uppercase())?;
            write_field_analysis(&found.field, name, out)?;
        }
    }

    Ok(matches)
}
