//! Invalid PDF Generators
//!
//! Generates deliberately invalid PDFs for error handling tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Bytes that carry no PDF header at all
pub fn not_a_pdf() -> Vec<u8> {
    b"This is plain text, not a PDF document.\n".to_vec()
}

/// A header followed by nothing parseable
pub fn header_only() -> Vec<u8> {
    b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n".to_vec()
}

/// Write the invalid fixtures into `output_dir`, returning their paths
pub fn generate_all<P: AsRef<Path>>(output_dir: P) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let fixtures = [
        ("not_a_pdf.pdf", not_a_pdf()),
        ("header_only.pdf", header_only()),
        ("empty.pdf", Vec::new()),
    ];

    let mut paths = Vec::with_capacity(fixtures.len());
    for (name, bytes) in fixtures {
        let path = output_dir.join(name);
        fs::write(&path, bytes)?;
        paths.push(path);
    }
    Ok(paths)
}
