// badge-pdf: layout and rendering engine for printable name-badge sheets

use thiserror::Error;

pub mod badge;
pub mod document;
pub mod geometry;
pub mod style;

pub use document::generate_badge_document;
pub use geometry::{page_count, placement, PageGeometry, PaperSize, Placement};
pub use style::{HexColor, Palette, StyleParameters, Template};

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Error, Debug)]
pub enum BadgeError {
    /// Empty name list, blank name, or malformed color. Always terminal for
    /// the generation call; no partial document is returned.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Failed to create PDF: {0}")]
    PdfError(String),
    #[error("Failed to read names file: {0}")]
    NamesError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
