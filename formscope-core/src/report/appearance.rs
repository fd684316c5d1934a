//! Default appearance inspection of text field widgets

use std::io::Write;

use crate::document::FormDocument;
use crate::error::Result;
use crate::forms::{FieldKind, FormLookup};

/// Appearance details of one text field widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetAppearance {
    /// 1-based position of the owning field among the terminal fields
    pub field_index: usize,
    /// 0-based position among the field's widgets
    pub widget_index: usize,
    /// `/DA` of the widget, falling back to the owning field's `/DA`
    pub default_appearance: Option<String>,
    /// Whether the widget has an `/MK` dictionary
    pub has_characteristics: bool,
}

/// Print every terminal field and, for text fields, the default appearance
/// of each widget. A field without kids is its own widget.
///
/// The document-wide `/DA` of the AcroForm is not consulted.
pub fn run_appearance_inspection<W: Write>(
    doc: &FormDocument,
    out: &mut W,
) -> Result<Vec<WidgetAppearance>> {
    writeln!(out, "=== PDF FIELD FORMATTING INSPECTION ===")?;

    let fields = match doc.acro_form()? {
        FormLookup::Fields(fields) => fields,
        FormLookup::Absent(absent) => {
            writeln!(out, "{absent}")?;
            return Ok(Vec::new());
        }
    };

    let mut widgets = Vec::new();
    for terminal in fields.terminal_fields()? {
        let field = terminal.field;
        let field_index = terminal.position + 1;
        writeln!(out, "\n{field_index}. Field: \"{}\"", terminal.name)?;

        if field.kind() != FieldKind::Text {
            continue;
        }

        let kids = field.kids()?;
        let field_da = field.default_appearance();
        let targets = if kids.is_empty() { vec![field] } else { kids };

        for (widget_index, widget) in targets.iter().enumerate() {
            let appearance = WidgetAppearance {
                field_index,
                widget_index,
                default_appearance: widget.default_appearance().or_else(|| field_da.clone()),
                has_characteristics: widget.has_appearance_characteristics(),
            };

            writeln!(out, "  Widget {widget_index}:")?;
            writeln!(
                out,
                "    Default Appearance: {}",
                appearance.default_appearance.as_deref().unwrap_or("None")
            )?;
            if appearance.has_characteristics {
                writeln!(out, "    Appearance Characteristics: Present")?;
            }

            widgets.push(appearance);
        }
    }

    Ok(widgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formscope_test_suite::{FieldSpec, FormPdfBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_widgets_of_text_fields() {
        let doc = FormDocument::from_bytes(
            &FormPdfBuilder::new()
                .add_field(
                    FieldSpec::text("Name")
                        .default_appearance("/Helv 10 Tf 0 g")
                        .entry("MK", "<< >>"),
                )
                .add_field(FieldSpec::checkbox("Arcane"))
                .add_field(
                    FieldSpec::text("Notes")
                        .default_appearance("/Cour 9 Tf 0 g")
                        .kid(FieldSpec::new())
                        .kid(FieldSpec::new().default_appearance("/Helv 8 Tf 0 g")),
                )
                .add_field(FieldSpec::text("Bare"))
                .build(),
        )
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let widgets = run_appearance_inspection(&doc, &mut out).unwrap();

        assert_eq!(widgets.len(), 4);
        assert_eq!(widgets[0].default_appearance.as_deref(), Some("/Helv 10 Tf 0 g"));
        assert!(widgets[0].has_characteristics);
        assert_eq!(widgets[1].field_index, 3);
        assert_eq!(widgets[1].default_appearance.as_deref(), Some("/Cour 9 Tf 0 g"));
        assert_eq!(widgets[2].widget_index, 1);
        assert_eq!(widgets[2].default_appearance.as_deref(), Some("/Helv 8 Tf 0 g"));
        assert_eq!(widgets[3].default_appearance, None);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("\n2. Field: \"Arcane\"\n\n3. Field: \"Notes\""));
        assert!(printed.contains("  Widget 0:\n    Default Appearance: /Helv 10 Tf 0 g\n    Appearance Characteristics: Present\n"));
        assert!(printed.ends_with("4. Field: \"Bare\"\n  Widget 0:\n    Default Appearance: None\n"));
    }

    #[test]
    fn test_acro_form_default_appearance_is_ignored() {
        let doc = FormDocument::from_bytes(
            &FormPdfBuilder::new()
                .with_acro_form_entry("DA", "(/Helv 0 Tf 0 g)")
                .add_field(FieldSpec::text("Bare"))
                .build(),
        )
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let widgets = run_appearance_inspection(&doc, &mut out).unwrap();
        assert_eq!(widgets[0].default_appearance, None);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.ends_with("1. Field: \"Bare\"\n  Widget 0:\n    Default Appearance: None\n"));
    }

    #[test]
    fn test_text_fields_under_a_group() {
        let doc = FormDocument::from_bytes(
            &FormPdfBuilder::new()
                .add_field(FieldSpec::checkbox("Arcane"))
                .add_field(
                    FieldSpec::new()
                        .name("Notes")
                        .field_type("Tx")
                        .default_appearance("/Cour 9 Tf 0 g")
                        .kid(FieldSpec::new().name("Background"))
                        .kid(FieldSpec::new().name("Goals")),
                )
                .build(),
        )
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let widgets = run_appearance_inspection(&doc, &mut out).unwrap();

        let indexes: Vec<usize> = widgets.iter().map(|w| w.field_index).collect();
        assert_eq!(indexes, [2, 3]);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("\n2. Field: \"Notes.Background\"\n  Widget 0:\n"));
        assert!(printed.contains("\n3. Field: \"Notes.Goals\"\n  Widget 0:\n"));
    }
}
