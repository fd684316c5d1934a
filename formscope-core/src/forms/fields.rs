//! The AcroForm root field array and its enumeration

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use lopdf::Object;

use super::field::{FieldDict, UNKNOWN};
use crate::document::FormDocument;
use crate::error::{FormError, Result};

/// Why a document has nothing to enumerate.
///
/// This is an outcome to report, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureAbsent {
    /// The catalog has no `/AcroForm`
    NoAcroForm,
    /// The AcroForm has no `/Fields` array, or it is empty
    NoFields,
}

impl fmt::Display for StructureAbsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureAbsent::NoAcroForm => write!(f, "This PDF does not contain form fields"),
            StructureAbsent::NoFields => write!(f, "No form fields found in the PDF"),
        }
    }
}

/// Result of looking up a document's interactive form
pub enum FormLookup<'a> {
    Fields(FieldArray<'a>),
    Absent(StructureAbsent),
}

/// Deepest field hierarchy descended into by [`FieldArray::terminal_fields`].
const MAX_FIELD_DEPTH: usize = 32;

/// The `/Fields` array of an AcroForm.
#[derive(Clone, Copy)]
pub struct FieldArray<'a> {
    doc: &'a FormDocument,
    entries: &'a [Object],
}

/// A field with no field kids, reached from the root array.
#[derive(Debug, Clone)]
pub struct TerminalField<'a> {
    /// 0-based position among all terminal fields, depth first
    pub position: usize,
    /// Fully qualified name: partial names of the ancestors joined by `.`
    pub name: String,
    pub field: FieldDict<'a>,
}

impl<'a> FieldArray<'a> {
    pub(crate) fn new(doc: &'a FormDocument, entries: &'a [Object]) -> Self {
        Self { doc, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the entries one at a time, in array order.
    pub fn iter(&self) -> FieldIter<'a> {
        FieldIter {
            doc: self.doc,
            entries: self.entries.iter().enumerate(),
        }
    }

    /// Every terminal field, depth first.
    ///
    /// Kids carrying their own `/T` are fields and are descended into; kids
    /// without one are widgets of their parent, which is then terminal.
    pub fn terminal_fields(&self) -> Result<Vec<TerminalField<'a>>> {
        let mut found = Vec::new();
        for field in self.iter() {
            collect_terminal(field?, None, 0, &mut found)?;
        }
        Ok(found)
    }
}

fn collect_terminal<'a>(
    field: FieldDict<'a>,
    parent_name: Option<&str>,
    depth: usize,
    found: &mut Vec<TerminalField<'a>>,
) -> Result<()> {
    if depth >= MAX_FIELD_DEPTH {
        return Err(FormError::InvalidStructure(format!(
            "field hierarchy deeper than {MAX_FIELD_DEPTH} levels"
        )));
    }

    let qualified = match (parent_name, field.name()) {
        (Some(parent), Some(own)) => Some(format!("{parent}.{own}")),
        (Some(parent), None) => Some(parent.to_string()),
        (None, own) => own,
    };

    let field_kids: Vec<FieldDict<'a>> = field
        .kids()?
        .into_iter()
        .filter(|kid| kid.get(b"T").is_some())
        .collect();

    if field_kids.is_empty() {
        found.push(TerminalField {
            position: found.len(),
            name: qualified.unwrap_or_else(|| UNKNOWN.to_string()),
            field,
        });
        return Ok(());
    }

    for kid in field_kids {
        collect_terminal(kid, qualified.as_deref(), depth + 1, found)?;
    }
    Ok(())
}

impl<'a> IntoIterator for FieldArray<'a> {
    type Item = Result<FieldDict<'a>>;
    type IntoIter = FieldIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the resolved fields of a [`FieldArray`].
pub struct FieldIter<'a> {
    doc: &'a FormDocument,
    entries: Enumerate<slice::Iter<'a, Object>>,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = Result<FieldDict<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (position, entry) = self.entries.next()?;
        Some(
            FieldDict::from_object(self.doc, entry).map_err(|err| match err {
                FormError::InvalidStructure(message) => {
                    FormError::InvalidStructure(format!("field {}: {message}", position + 1))
                }
                other => other,
            }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

impl FusedIterator for FieldIter<'_> {}
