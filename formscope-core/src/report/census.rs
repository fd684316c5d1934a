//! Census of every checkbox field in the form

use std::io::Write;

use crate::document::FormDocument;
use crate::error::Result;
use crate::forms::{FieldKind, FormLookup, TerminalField};
use crate::objects::{describe, Object};

fn or_not_set(object: Option<&Object>) -> String {
    object.map_or_else(|| "Not set".to_string(), |o| describe(o).to_string())
}

/// Print every terminal field that is a checkbox, with its checked state
/// and raw `/V`, `/DV` and `/Opt` entries.
///
/// Each checkbox is prefixed by its 0-based position among all terminal
/// fields (checkbox or not) and its fully qualified name.
pub fn run_checkbox_census<'a, W: Write>(
    doc: &'a FormDocument,
    out: &mut W,
) -> Result<Vec<TerminalField<'a>>> {
    writeln!(out, "All checkbox fields found:")?;

    let fields = match doc.acro_form()? {
        FormLookup::Fields(fields) => fields,
        FormLookup::Absent(absent) => {
            writeln!(out, "{absent}")?;
            return Ok(Vec::new());
        }
    };

    let mut checkboxes = Vec::new();
    for terminal in fields.terminal_fields()? {
        let field = terminal.field;
        if field.kind() != FieldKind::CheckBox {
            continue;
        }

        writeln!(out, "{}: {}", terminal.position, terminal.name)?;
        writeln!(out, "  - Type: {}", field.kind())?;
        writeln!(out, "  - Is checked: {}", field.is_checked())?;
        writeln!(out, "  - V value: {}", or_not_set(field.value()))?;
        writeln!(out, "  - DV value: {}", or_not_set(field.default_value()))?;
        writeln!(out, "  - Options: {}", or_not_set(field.options()))?;
        writeln!(out, "---")?;

        checkboxes.push(terminal);
    }

    Ok(checkboxes)
}
