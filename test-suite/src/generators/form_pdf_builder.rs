//! Form PDF Builder
//!
//! A builder for creating test PDFs carrying an AcroForm with specific fields.
//! Objects are written as plain text with a traditional cross-reference table
//! so every generated file is parseable without compression support.

use std::fs;
use std::path::Path;

/// Description of one field dictionary to emit as an indirect object
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    entries: Vec<(String, String)>,
    kids: Vec<FieldSpec>,
    normal_appearances: Vec<String>,
}

impl FieldSpec {
    /// Create an empty field dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox field (`/FT /Btn`) with a literal-string name
    pub fn checkbox(name: &str) -> Self {
        Self::new().name(name).field_type("Btn")
    }

    /// Text field (`/FT /Tx`) with a literal-string name
    pub fn text(name: &str) -> Self {
        Self::new().name(name).field_type("Tx")
    }

    /// Set `/T` as a literal string
    pub fn name(self, name: &str) -> Self {
        self.entry("T", &format!("({})", escape_pdf_string(name)))
    }

    /// Set `/T` as a hexadecimal string holding the raw bytes
    pub fn name_hex(self, bytes: &[u8]) -> Self {
        self.entry("T", &hex_string(bytes))
    }

    /// Set `/T` as a UTF-16BE text string with byte order mark
    pub fn name_utf16(self, name: &str) -> Self {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in name.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        self.entry("T", &hex_string(&bytes))
    }

    /// Set `/FT`
    pub fn field_type(self, field_type: &str) -> Self {
        self.entry("FT", &format!("/{field_type}"))
    }

    /// Set `/V` to a name
    pub fn value_name(self, value: &str) -> Self {
        self.entry("V", &format!("/{value}"))
    }

    /// Set `/DV` to a name
    pub fn default_value_name(self, value: &str) -> Self {
        self.entry("DV", &format!("/{value}"))
    }

    /// Set `/AS`
    pub fn appearance_state(self, state: &str) -> Self {
        self.entry("AS", &format!("/{state}"))
    }

    /// Set `/Ff`
    pub fn flags(self, flags: u32) -> Self {
        self.entry("Ff", &flags.to_string())
    }

    /// Set `/DA`
    pub fn default_appearance(self, da: &str) -> Self {
        self.entry("DA", &format!("({})", escape_pdf_string(da)))
    }

    /// Add an arbitrary entry; `raw` is written verbatim as PDF syntax
    pub fn entry(mut self, key: &str, raw: &str) -> Self {
        self.entries.push((key.to_string(), raw.to_string()));
        self
    }

    /// Add a kid field; it receives a `/Parent` back-reference
    pub fn kid(mut self, kid: FieldSpec) -> Self {
        self.kids.push(kid);
        self
    }

    /// Emit `/AP << /N << ... >> >>` with one stream per state name
    pub fn normal_appearances(mut self, states: &[&str]) -> Self {
        self.normal_appearances = states.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AcroFormSetup {
    Absent,
    WithoutFields,
    WithFields,
}

#[derive(Debug, Clone)]
enum FieldEntry {
    Indirect(FieldSpec),
    Raw(String),
}

/// Builder for creating form test PDFs
pub struct FormPdfBuilder {
    acro_form: AcroFormSetup,
    acro_form_entries: Vec<(String, String)>,
    fields: Vec<FieldEntry>,
}

impl FormPdfBuilder {
    /// Create a builder for a PDF with an AcroForm and an empty `/Fields` array
    pub fn new() -> Self {
        Self {
            acro_form: AcroFormSetup::WithFields,
            acro_form_entries: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Omit `/AcroForm` from the catalog
    pub fn without_acro_form(mut self) -> Self {
        self.acro_form = AcroFormSetup::Absent;
        self
    }

    /// Keep `/AcroForm` but omit its `/Fields` entry
    pub fn without_fields_array(mut self) -> Self {
        self.acro_form = AcroFormSetup::WithoutFields;
        self
    }

    /// Add an entry to the AcroForm dictionary itself
    pub fn with_acro_form_entry(mut self, key: &str, raw: &str) -> Self {
        self.acro_form_entries
            .push((key.to_string(), raw.to_string()));
        self
    }

    /// Append a field written as an indirect object
    pub fn add_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(FieldEntry::Indirect(field));
        self
    }

    /// Append a `/Fields` array element written verbatim
    pub fn add_raw_entry(mut self, raw: &str) -> Self {
        self.fields.push(FieldEntry::Raw(raw.to_string()));
        self
    }

    /// Build the PDF
    pub fn build(&self) -> Vec<u8> {
        let mut objects: Vec<String> = Vec::new();

        let catalog_obj = reserve(&mut objects);
        let pages_obj = reserve(&mut objects);
        let page_obj = reserve(&mut objects);

        objects[(pages_obj - 1) as usize] =
            format!("<< /Type /Pages /Kids [{page_obj} 0 R] /Count 1 >>");
        objects[(page_obj - 1) as usize] =
            format!("<< /Type /Page /Parent {pages_obj} 0 R /MediaBox [0 0 612 792] >>");

        let mut catalog = format!("<< /Type /Catalog /Pages {pages_obj} 0 R");
        if self.acro_form != AcroFormSetup::Absent {
            let acro_form_obj = reserve(&mut objects);
            let mut acro_form = String::from("<<");

            if self.acro_form == AcroFormSetup::WithFields {
                let mut refs = Vec::new();
                for entry in &self.fields {
                    match entry {
                        FieldEntry::Indirect(spec) => {
                            let id = emit_field(spec, None, &mut objects);
                            refs.push(format!("{id} 0 R"));
                        }
                        FieldEntry::Raw(raw) => refs.push(raw.clone()),
                    }
                }
                acro_form.push_str(&format!(" /Fields [{}]", refs.join(" ")));
            }
            for (key, value) in &self.acro_form_entries {
                acro_form.push_str(&format!(" /{key} {value}"));
            }
            acro_form.push_str(" >>");

            objects[(acro_form_obj - 1) as usize] = acro_form;
            catalog.push_str(&format!(" /AcroForm {acro_form_obj} 0 R"));
        }
        catalog.push_str(" >>");
        objects[(catalog_obj - 1) as usize] = catalog;

        let mut pdf = Vec::new();
        let mut xref_positions = Vec::with_capacity(objects.len());

        // Header and binary marker
        pdf.extend_from_slice(b"%PDF-1.7\n");
        pdf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        for (i, body) in objects.iter().enumerate() {
            xref_positions.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_offset = pdf.len();
        let size = objects.len() + 1;
        write_traditional_xref(&mut pdf, &xref_positions, size);

        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {size} /Root {catalog_obj} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
            )
            .as_bytes(),
        );

        pdf
    }

    /// Build the PDF and write it to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        fs::write(path, self.build())?;
        Ok(())
    }
}

impl Default for FormPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reserve the next object number; its body is filled in later
fn reserve(objects: &mut Vec<String>) -> u32 {
    objects.push(String::new());
    objects.len() as u32
}

fn emit_field(spec: &FieldSpec, parent: Option<u32>, objects: &mut Vec<String>) -> u32 {
    let id = reserve(objects);

    let kid_ids: Vec<u32> = spec
        .kids
        .iter()
        .map(|kid| emit_field(kid, Some(id), objects))
        .collect();

    let mut appearance_refs = Vec::new();
    for state in &spec.normal_appearances {
        let stream_id = reserve(objects);
        objects[(stream_id - 1) as usize] =
            "<< /Type /XObject /Subtype /Form /BBox [0 0 10 10] /Length 3 >>\nstream\nq Q\nendstream"
                .to_string();
        appearance_refs.push(format!("/{state} {stream_id} 0 R"));
    }

    let mut dict = String::from("<<");
    for (key, value) in &spec.entries {
        dict.push_str(&format!(" /{key} {value}"));
    }
    if let Some(parent) = parent {
        dict.push_str(&format!(" /Parent {parent} 0 R"));
    }
    if !kid_ids.is_empty() {
        let refs: Vec<String> = kid_ids.iter().map(|k| format!("{k} 0 R")).collect();
        dict.push_str(&format!(" /Kids [{}]", refs.join(" ")));
    }
    if !appearance_refs.is_empty() {
        dict.push_str(&format!(" /AP << /N << {} >> >>", appearance_refs.join(" ")));
    }
    dict.push_str(" >>");

    objects[(id - 1) as usize] = dict;
    id
}

/// Write traditional cross-reference table
fn write_traditional_xref(pdf: &mut Vec<u8>, positions: &[usize], size: usize) {
    pdf.extend_from_slice(b"xref\n");
    pdf.extend_from_slice(format!("0 {size}\n").as_bytes());

    // Entry for object 0 (always free)
    pdf.extend_from_slice(b"0000000000 65535 f \n");

    for &pos in positions {
        pdf.extend_from_slice(format!("{pos:010} 00000 n \n").as_bytes());
    }
}

/// Escape special characters in PDF strings
fn escape_pdf_string(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '(' => "\\(".to_string(),
            ')' => "\\)".to_string(),
            '\\' => "\\\\".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn hex_string(bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
    format!("<{hex}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(pdf: &[u8]) -> String {
        String::from_utf8_lossy(pdf).into_owned()
    }

    #[test]
    fn test_builder_writes_header_and_trailer() {
        let pdf = FormPdfBuilder::new().build();
        assert!(pdf.starts_with(b"%PDF-1.7"));
        let text = as_text(&pdf);
        assert!(text.contains("/Root 1 0 R"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_builder_links_fields_and_kids() {
        let pdf = FormPdfBuilder::new()
            .add_field(FieldSpec::checkbox("Divine").kid(FieldSpec::new().appearance_state("On")))
            .build();
        let text = as_text(&pdf);
        assert!(text.contains("/AcroForm 4 0 R"));
        assert!(text.contains("/Fields [5 0 R]"));
        assert!(text.contains("/Kids [6 0 R]"));
        assert!(text.contains("/Parent 5 0 R"));
    }

    #[test]
    fn test_builder_without_acro_form() {
        let text = as_text(&FormPdfBuilder::new().without_acro_form().build());
        assert!(!text.contains("/AcroForm"));
    }

    #[test]
    fn test_xref_entries_are_twenty_bytes() {
        let pdf = FormPdfBuilder::new()
            .add_field(FieldSpec::text("Name"))
            .build();
        let text = as_text(&pdf);
        let xref = text.split("xref\n").nth(1).unwrap();
        for line in xref.split_inclusive('\n').skip(1).take(5) {
            assert_eq!(line.len(), 20, "bad xref line {line:?}");
        }
    }

    #[test]
    fn test_name_encodings() {
        let text = as_text(
            &FormPdfBuilder::new()
                .add_field(FieldSpec::new().name_hex(b"Arcane"))
                .add_field(FieldSpec::new().name_utf16("A"))
                .build(),
        );
        assert!(text.contains("/T <417263616E65>"));
        assert!(text.contains("/T <FEFF0041>"));
    }
}
