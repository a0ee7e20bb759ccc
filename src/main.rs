// badge-pdf: Generate print-ready sheets of name-badge inserts

use chrono::Local;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;

use badge_pdf::{
    generate_badge_document, page_count, BadgeError, PageGeometry, PaperSize, StyleParameters,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate print-ready sheets of name-badge inserts")]
struct Args {
    /// Names file: a .json roster ([{"name": "..."}]) or plain text with
    /// one name per line (commas also accepted)
    #[arg(short, long)]
    input: String,

    /// Badge color as a hex triplet
    #[arg(short, long, default_value = "#F15025")]
    color: String,

    /// Template (classic, primary, subtle, outline); unknown ids fall
    /// back to classic
    #[arg(short, long)]
    template: Option<String>,

    /// Paper size
    #[arg(short, long, value_enum, default_value_t = Paper::Letter)]
    paper: Paper,

    /// Output filename (defaults to name-badges-{timestamp}.pdf)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Paper {
    Letter,
    A4,
}

impl From<Paper> for PaperSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::Letter => PaperSize::Letter,
            Paper::A4 => PaperSize::A4,
        }
    }
}

/// Roster entry from a JSON names file
#[derive(Debug, Deserialize)]
struct NameEntry {
    name: String,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BadgeError> {
    let args = Args::parse();

    let names = load_names(&args.input)?;
    let style = StyleParameters::new(&args.color, args.template.as_deref())?;
    let geometry = PageGeometry::for_paper(args.paper.into());

    let bytes = generate_badge_document(&names, &style, &geometry)?;

    let output_file = args.output.unwrap_or_else(|| {
        format!(
            "name-badges-{}.pdf",
            Local::now().format("%Y-%m-%d-%H%M%S")
        )
    });
    fs::write(&output_file, &bytes)?;

    println!("✓ Generated: {}", output_file);
    println!("  Badges: {}", names.len());
    println!("  Pages: {}", page_count(names.len(), &geometry));

    Ok(())
}

// ============================================================================
// Name Ingestion
// ============================================================================

/// Load the name list. A `.json` file is parsed as a roster array of
/// `{"name": "..."}` objects; anything else is treated as plain text split
/// on newlines and commas, with empty fragments dropped.
fn load_names(path: &str) -> Result<Vec<String>, BadgeError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BadgeError::NamesError(format!("{}: {}", path, e)))?;

    if path.to_lowercase().ends_with(".json") {
        let entries: Vec<NameEntry> = serde_json::from_str(&content)
            .map_err(|e| BadgeError::NamesError(format!("Invalid JSON: {}", e)))?;
        Ok(entries.into_iter().map(|e| e.name).collect())
    } else {
        Ok(content
            .split(['\n', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}
