use anyhow::Result;
use clap::{Parser, Subcommand};
use formscope::report::{
    run_appearance_inspection, run_checkbox_analysis, run_checkbox_census, run_listing,
    AnalysisOptions, ListingOptions, DEFAULT_OUTPUT_PATH, DEFAULT_WATCHED_FIELDS,
};
use formscope::FormDocument;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FILLABLE_TEMPLATE: &str = "FORGE - Character Sheet (01-01-25)(Form Fillable).pdf";
const CHECKBOX_TEMPLATE: &str = "Character Sheet Template (01-01-25).pdf";

#[derive(Parser)]
#[command(
    name = "formscope",
    about = "Inspect the interactive form fields of a PDF",
    version,
    author
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every form field and save the listing as JSON
    ListFields {
        /// Input PDF file
        #[arg(short, long, default_value = FILLABLE_TEMPLATE)]
        input: PathBuf,

        /// JSON output path
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// Dump the state of selected checkbox fields
    AnalyzeCheckboxes {
        /// Input PDF file
        #[arg(short, long, default_value = CHECKBOX_TEMPLATE)]
        input: PathBuf,

        /// Field name to analyze (repeatable)
        #[arg(short, long, value_name = "NAME", default_values = DEFAULT_WATCHED_FIELDS)]
        watch: Vec<String>,
    },

    /// Show every checkbox field with its checked state
    Checkboxes {
        /// Input PDF file
        #[arg(short, long, default_value = FILLABLE_TEMPLATE)]
        input: PathBuf,
    },

    /// Show the default appearance of text field widgets
    Appearances {
        /// Input PDF file
        #[arg(short, long, default_value = FILLABLE_TEMPLATE)]
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "formscope=warn",
        1 => "formscope=debug",
        _ => "formscope=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn list_fields(input: &Path, output: PathBuf, out: &mut impl Write) -> formscope::Result<()> {
    let doc = FormDocument::open(input)?;
    let records = run_listing(&doc, &ListingOptions { output }, out)?;
    debug!("listed {} fields from {}", records.len(), input.display());
    Ok(())
}

fn analyze_checkboxes(
    input: &Path,
    watched: Vec<String>,
    out: &mut impl Write,
) -> formscope::Result<()> {
    let doc = FormDocument::open(input)?;
    let matches = run_checkbox_analysis(&doc, &AnalysisOptions { watched }, out)?;
    debug!(
        "found {} of {} watched fields",
        matches.iter().flatten().count(),
        matches.len()
    );
    Ok(())
}

fn list_checkboxes(input: &Path, out: &mut impl Write) -> formscope::Result<()> {
    let doc = FormDocument::open(input)?;
    run_checkbox_census(&doc, out)?;
    Ok(())
}

fn inspect_appearances(input: &Path, out: &mut impl Write) -> formscope::Result<()> {
    let doc = FormDocument::open(input)?;
    run_appearance_inspection(&doc, out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failures are reported on stdout; the exit status stays 0.
    match cli.command {
        Commands::ListFields { input, output } => {
            if let Err(e) = list_fields(&input, output, &mut out) {
                writeln!(out, "Error extracting PDF fields: {e}")?;
            }
        }
        Commands::AnalyzeCheckboxes { input, watch } => {
            if let Err(e) = analyze_checkboxes(&input, watch, &mut out) {
                writeln!(out, "Error analyzing checkboxes: {e}")?;
            }
        }
        Commands::Checkboxes { input } => {
            if let Err(e) = list_checkboxes(&input, &mut out) {
                writeln!(out, "Error listing checkboxes: {e}")?;
            }
        }
        Commands::Appearances { input } => {
            if let Err(e) = inspect_appearances(&input, &mut out) {
                writeln!(out, "Error inspecting field appearances: {e}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
