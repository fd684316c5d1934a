//! # formscope
//!
//! Read-only inspection of the interactive form (AcroForm) of existing PDF
//! documents.
//!
//! ## Features
//!
//! - **Field enumeration**: resolve every entry of the AcroForm `/Fields`
//!   array, in order, to a typed field view
//! - **Listing**: one `{index, name, type}` record per field, persisted as JSON
//! - **Checkbox analysis**: value, default, appearance state, kids, appearance
//!   streams and flags of selected checkbox fields
//! - **Checkbox census** and **widget appearance inspection**
//!
//! Parsing of the file itself (cross-reference tables, object streams,
//! filters) is done by [`lopdf`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formscope::report::{run_listing, ListingOptions};
//! use formscope::FormDocument;
//!
//! # fn main() -> formscope::Result<()> {
//! let doc = FormDocument::open("character-sheet.pdf")?;
//! let records = run_listing(&doc, &ListingOptions::default(), &mut std::io::stdout())?;
//! println!("{} fields", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Loading a PDF and locating its AcroForm
//! - [`forms`] - Field array, field dictionaries, flags and appearances
//! - [`objects`] - Text decoding and display of raw PDF objects
//! - [`report`] - Listing, checkbox analysis, census and appearance reports

pub mod document;
pub mod error;
pub mod forms;
pub mod objects;
pub mod report;

pub use document::FormDocument;
pub use error::{FormError, Result};
pub use forms::{
    FieldArray, FieldDict, FieldFlags, FieldIter, FieldKind, FormLookup, NormalAppearance,
    StructureAbsent, TerminalField,
};
pub use report::{AnalysisOptions, FieldMatch, FieldRecord, ListingOptions};

/// Current version of formscope
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
