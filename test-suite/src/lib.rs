//! Test Suite for formscope
//!
//! Synthetic form PDFs and scratch-directory helpers shared by the
//! integration tests of the workspace crates.

pub mod generators;

pub use generators::{FieldSpec, FormPdfBuilder};

/// Common test utilities
pub mod utils {
    use std::path::{Path, PathBuf};

    use crate::generators::FormPdfBuilder;

    /// Create a temporary directory for test outputs
    pub fn create_test_output_dir() -> anyhow::Result<tempfile::TempDir> {
        Ok(tempfile::tempdir()?)
    }

    /// Write `builder` into `dir` under `name` and return the full path
    pub fn write_fixture<P: AsRef<Path>>(
        dir: P,
        name: &str,
        builder: &FormPdfBuilder,
    ) -> anyhow::Result<PathBuf> {
        let path = dir.as_ref().join(name);
        builder.write_to(&path)?;
        Ok(path)
    }
}
