//! AcroForm inspection according to ISO 32000-1 Chapter 12.7
//!
//! This module exposes read-only views over the interactive form of an
//! existing document: the root field array, individual field dictionaries,
//! their flags and their normal appearances.

mod appearance;
mod field;
mod field_type;
mod fields;

pub use appearance::NormalAppearance;
pub use field::{FieldDict, UNKNOWN};
pub use field_type::{FieldFlags, FieldKind};
pub use fields::{FieldArray, FieldIter, FormLookup, StructureAbsent, TerminalField};
