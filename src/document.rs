// Document assembler: drives layout and rendering across the whole name
// list and serializes the finished document to bytes.

use printpdf::{BuiltinFont, CustomPdfConformance, Mm, PdfConformance, PdfDocument};
use std::io::{BufWriter, Cursor};
use time::OffsetDateTime;

use crate::badge::{draw_badge, Fonts};
use crate::geometry::{placement, PageGeometry};
use crate::style::StyleParameters;
use crate::BadgeError;

const DOCUMENT_TITLE: &str = "Name Badges";
const LAYER_NAME: &str = "Layer 1";

/// Fixed document id. printpdf randomizes the id and stamps wall-clock
/// dates on every save; pinning both keeps identical inputs byte-identical.
const DOCUMENT_ID: &str = "badge-pdf-v1";

/// The trailer /ID pair printpdf emits is a fresh random 32-character
/// string per save, independent of the metadata document id above. It is
/// rewritten to this constant after serialization.
const TRAILER_ID_MARKER: &[u8] = b"/ID[(";
const TRAILER_ID_LEN: usize = 32;
const PINNED_TRAILER_ID: &[u8; 32] = b"BADGEPDFBADGEPDFBADGEPDFBADGEPDF";

/// Build the complete badge document: one badge per name, in input order,
/// paginated row-major onto as many pages as needed. Returns the serialized
/// PDF bytes; on error no partial document is returned.
pub fn generate_badge_document(
    names: &[String],
    style: &StyleParameters,
    geometry: &PageGeometry,
) -> Result<Vec<u8>, BadgeError> {
    let names = validate_names(names)?;
    let palette = style.palette();

    let (doc, page1, layer1) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(geometry.page_width),
        Mm(geometry.page_height),
        LAYER_NAME,
    );

    let epoch = OffsetDateTime::UNIX_EPOCH;
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            // XMP metadata embeds a fresh instance id on every save, which
            // would break determinism
            requires_xmp_metadata: false,
            requires_icc_profile: false,
            allows_default_fonts: true,
            ..Default::default()
        }))
        .with_document_id(DOCUMENT_ID.to_string())
        .with_creation_date(epoch)
        .with_mod_date(epoch)
        .with_metadata_date(epoch);

    // Builtin fonts are loaded once per document and reused for every badge
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| BadgeError::PdfError(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BadgeError::PdfError(e.to_string()))?,
    };

    let per_page = geometry.badges_per_page();
    let mut current_layer = doc.get_page(page1).get_layer(layer1);

    for (i, name) in names.iter().enumerate() {
        if i > 0 && i % per_page == 0 {
            let (page, layer) = doc.add_page(
                Mm(geometry.page_width),
                Mm(geometry.page_height),
                LAYER_NAME,
            );
            current_layer = doc.get_page(page).get_layer(layer);
        }

        let rect = placement(i, geometry);
        draw_badge(&current_layer, &fonts, name, &palette, &rect);
    }

    let mut bytes = Vec::new();
    {
        let cursor = Cursor::new(&mut bytes);
        let mut writer = BufWriter::new(cursor);
        doc.save(&mut writer)
            .map_err(|e| BadgeError::PdfError(e.to_string()))?;
    }

    pin_trailer_id(&mut bytes);

    Ok(bytes)
}

/// Overwrite the two random trailer /ID strings with a constant so that
/// identical inputs yield byte-identical documents. The trailer sits at the
/// end of the file, so the match is searched from the back. Leaves the
/// bytes untouched if the expected `( .. )( .. )` shape is not found.
fn pin_trailer_id(bytes: &mut [u8]) {
    let marker = match bytes
        .windows(TRAILER_ID_MARKER.len())
        .rposition(|w| w == TRAILER_ID_MARKER)
    {
        Some(pos) => pos,
        None => return,
    };

    let first = marker + TRAILER_ID_MARKER.len();
    let second = first + TRAILER_ID_LEN + 2;
    if bytes.len() < second + TRAILER_ID_LEN
        || &bytes[first + TRAILER_ID_LEN..second] != b")("
    {
        return;
    }

    bytes[first..first + TRAILER_ID_LEN].copy_from_slice(PINNED_TRAILER_ID);
    bytes[second..second + TRAILER_ID_LEN].copy_from_slice(PINNED_TRAILER_ID);
}

/// Trim every entry and reject empty lists or blank entries. Order is
/// preserved; no sorting, no dedup.
fn validate_names(names: &[String]) -> Result<Vec<String>, BadgeError> {
    if names.is_empty() {
        return Err(BadgeError::InvalidInput("name list is empty".to_string()));
    }
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                Err(BadgeError::InvalidInput(format!(
                    "name at index {} is empty after trimming",
                    i
                )))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
