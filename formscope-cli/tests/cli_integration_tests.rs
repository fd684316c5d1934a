//! Integration tests for the formscope CLI
//!
//! Tests command-line interface functionality including:
//! - Field listing and the JSON file it writes
//! - Checkbox analysis with default and custom watch lists
//! - Checkbox census and appearance inspection
//! - Error reporting for missing and broken files

use anyhow::Result;
use formscope_test_suite::utils::{create_test_output_dir, write_fixture};
use formscope_test_suite::{FieldSpec, FormPdfBuilder};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Test helper to run the CLI inside `dir` and return its output
fn run_cli_command(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_formscope"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()?;
    Ok(output)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn character_sheet() -> FormPdfBuilder {
    FormPdfBuilder::new()
        .add_field(
            FieldSpec::text("Character Name")
                .default_appearance("/Helv 10 Tf 0 g")
                .entry("MK", "<< /BG [1 1 1] >>"),
        )
        .add_field(
            FieldSpec::checkbox("Arcane")
                .value_name("Off")
                .appearance_state("Off")
                .normal_appearances(&["Yes", "Off"]),
        )
        .add_field(
            FieldSpec::checkbox("Divine").value_name("On").kid(
                FieldSpec::new()
                    .value_name("On")
                    .appearance_state("On")
                    .normal_appearances(&["On", "Off"]),
            ),
        )
}

#[test]
fn test_cli_help() {
    let dir = create_test_output_dir().unwrap();
    let output = run_cli_command(dir.path(), &["--help"]).unwrap();
    assert!(output.status.success());

    let help = stdout_of(&output);
    for command in ["list-fields", "analyze-checkboxes", "checkboxes", "appearances"] {
        assert!(help.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_cli_list_fields_writes_json() {
    let dir = create_test_output_dir().unwrap();
    let input = write_fixture(dir.path(), "sheet.pdf", &character_sheet()).unwrap();
    let json_path = dir.path().join("listing.json");

    let output = run_cli_command(
        dir.path(),
        &[
            "list-fields",
            "-i",
            input.to_str().unwrap(),
            "-o",
            json_path.to_str().unwrap(),
        ],
    )
    .unwrap();
    assert!(output.status.success());

    let expected = format!(
        "Found 3 form fields in the PDF:\n\n\
         1. \"Character Name\" (/Tx)\n\
         2. \"Arcane\" (/Btn)\n\
         3. \"Divine\" (/Btn)\n\
         \nField data saved to {}\n",
        json_path.display()
    );
    assert_eq!(stdout_of(&output), expected);

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"index": 1, "name": "Character Name", "type": "/Tx"},
            {"index": 2, "name": "Arcane", "type": "/Btn"},
            {"index": 3, "name": "Divine", "type": "/Btn"},
        ])
    );
}

#[test]
fn test_cli_list_fields_default_output_path() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "sheet.pdf", &character_sheet()).unwrap();

    let output = run_cli_command(dir.path(), &["list-fields", "--input", "sheet.pdf"]).unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).ends_with("Field data saved to pdf-fields.json\n"));
    assert!(dir.path().join("pdf-fields.json").exists());
}

#[test]
fn test_cli_list_fields_missing_input() {
    let dir = create_test_output_dir().unwrap();
    let output = run_cli_command(dir.path(), &["list-fields", "-i", "missing.pdf"]).unwrap();

    // Errors are reported, not signalled through the exit status
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Error extracting PDF fields: "));
    assert!(!dir.path().join("pdf-fields.json").exists());
}

#[test]
fn test_cli_list_fields_without_form() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(
        dir.path(),
        "plain.pdf",
        &FormPdfBuilder::new().without_acro_form(),
    )
    .unwrap();

    let output = run_cli_command(dir.path(), &["list-fields", "-i", "plain.pdf"]).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "This PDF does not contain form fields\n");
    assert!(!dir.path().join("pdf-fields.json").exists());
}

#[test]
fn test_cli_list_fields_broken_entry() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(
        dir.path(),
        "broken.pdf",
        &FormPdfBuilder::new()
            .add_field(FieldSpec::text("Name"))
            .add_raw_entry("99 0 R"),
    )
    .unwrap();

    let output = run_cli_command(dir.path(), &["list-fields", "-i", "broken.pdf"]).unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Error extracting PDF fields: Invalid object reference: 99 0 R\n"
    );
    assert!(!dir.path().join("pdf-fields.json").exists());
}

#[test]
fn test_cli_analyze_checkboxes() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "template.pdf", &character_sheet()).unwrap();

    let output =
        run_cli_command(dir.path(), &["analyze-checkboxes", "-i", "template.pdf"]).unwrap();
    assert!(output.status.success());

    let printed = stdout_of(&output);
    assert!(printed.starts_with(
        "Found Arcane field at index 2\nFound Divine field at index 3\n"
    ));
    assert!(printed.contains("\n=== ARCANE CHECKBOX ANALYSIS ===\nField Name: Arcane\n"));
    assert!(printed.contains("\n=== DIVINE CHECKBOX ANALYSIS ===\nField Name: Divine\n"));
    assert!(printed.contains("Has Kids: 1 sub-fields\n"));
    assert_eq!(printed.matches("---\n").count(), 2);
}

#[test]
fn test_cli_analyze_custom_watch_list() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "template.pdf", &character_sheet()).unwrap();

    let output = run_cli_command(
        dir.path(),
        &["analyze-checkboxes", "-i", "template.pdf", "-w", "Divine"],
    )
    .unwrap();
    assert!(output.status.success());

    let printed = stdout_of(&output);
    assert!(printed.starts_with("Found Divine field at index 3\n"));
    assert!(!printed.contains("ARCANE"));
}

#[test]
fn test_cli_analyze_missing_input() {
    let dir = create_test_output_dir().unwrap();
    let output = run_cli_command(dir.path(), &["analyze-checkboxes"]).unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Error analyzing checkboxes: "));
}

#[test]
fn test_cli_checkbox_census() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "sheet.pdf", &character_sheet()).unwrap();

    let output = run_cli_command(dir.path(), &["checkboxes", "-i", "sheet.pdf"]).unwrap();
    assert!(output.status.success());

    let printed = stdout_of(&output);
    assert!(printed.starts_with("All checkbox fields found:\n1: Arcane\n"));
    assert!(printed.contains("2: Divine\n"));
    assert!(!printed.contains("Character Name"));
}

#[test]
fn test_cli_appearances() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "sheet.pdf", &character_sheet()).unwrap();

    let output = run_cli_command(dir.path(), &["appearances", "-i", "sheet.pdf"]).unwrap();
    assert!(output.status.success());

    let printed = stdout_of(&output);
    assert!(printed.starts_with("=== PDF FIELD FORMATTING INSPECTION ===\n"));
    assert!(printed.contains("1. Field: \"Character Name\"\n"));
    assert!(printed.contains("    Default Appearance: /Helv 10 Tf 0 g\n"));
    assert!(printed.contains("    Appearance Characteristics: Present\n"));
}

#[test]
fn test_cli_verbose_logs_go_to_stderr() {
    let dir = create_test_output_dir().unwrap();
    write_fixture(dir.path(), "sheet.pdf", &character_sheet()).unwrap();

    let quiet = run_cli_command(dir.path(), &["list-fields", "-i", "sheet.pdf"]).unwrap();
    let verbose = run_cli_command(dir.path(), &["-v", "list-fields", "-i", "sheet.pdf"]).unwrap();

    assert_eq!(stdout_of(&quiet), stdout_of(&verbose));
    assert!(verbose.stderr.len() > quiet.stderr.len());
}
