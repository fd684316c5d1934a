//! Reporters printing what the form inspection found
//!
//! Each `run_*` function takes an opened document and a writer for the
//! human-readable report, and returns what it found for programmatic use.

pub mod appearance;
pub mod census;
pub mod checkbox;
pub mod listing;

pub use appearance::{run_appearance_inspection, WidgetAppearance};
pub use census::run_checkbox_census;
pub use checkbox::{
    find_watched, run_checkbox_analysis, write_field_analysis, AnalysisOptions, FieldMatch,
    DEFAULT_WATCHED_FIELDS,
};
pub use listing::{
    collect_records, read_records, run_listing, save_records, write_records, FieldRecord,
    ListingOptions, DEFAULT_OUTPUT_PATH,
};
