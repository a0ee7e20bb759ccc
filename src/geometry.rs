// Layout engine: maps a flat badge index to a rectangle on a specific page.

// ============================================================================
// Constants
// ============================================================================

/// US Letter dimensions in mm
const LETTER_WIDTH_MM: f32 = 215.9;
const LETTER_HEIGHT_MM: f32 = 279.4;

/// A4 dimensions in mm
const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;

/// Badge insert dimensions in mm (3.5 x 2.5 inches)
const BADGE_WIDTH_MM: f32 = 88.9;
const BADGE_HEIGHT_MM: f32 = 63.5;

/// Sheet margins in mm (0.75 / 0.5 inches)
const MARGIN_LEFT_MM: f32 = 19.05;
const MARGIN_TOP_MM: f32 = 12.7;

/// Spacing between badges in mm (0.25 inches), for cutting
const SPACING_MM: f32 = 6.35;

// ============================================================================
// Page Geometry
// ============================================================================

/// Supported paper sizes for the badge sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    Letter,
    A4,
}

/// Fixed per-document grid configuration, all lengths in mm.
///
/// The presets place a 2-column x 3-row grid of 3.5" x 2.5" badge inserts;
/// both fit inside the printable area of their paper size with the grid
/// anchored at the top-left margin.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub badge_width: f32,
    pub badge_height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub badges_per_row: usize,
    pub badges_per_col: usize,
}

impl PageGeometry {
    pub fn for_paper(paper: PaperSize) -> Self {
        let (page_width, page_height) = match paper {
            PaperSize::Letter => (LETTER_WIDTH_MM, LETTER_HEIGHT_MM),
            PaperSize::A4 => (A4_WIDTH_MM, A4_HEIGHT_MM),
        };
        PageGeometry {
            page_width,
            page_height,
            badge_width: BADGE_WIDTH_MM,
            badge_height: BADGE_HEIGHT_MM,
            margin_left: MARGIN_LEFT_MM,
            margin_top: MARGIN_TOP_MM,
            spacing_x: SPACING_MM,
            spacing_y: SPACING_MM,
            badges_per_row: 2,
            badges_per_col: 3,
        }
    }

    pub fn letter() -> Self {
        Self::for_paper(PaperSize::Letter)
    }

    pub fn a4() -> Self {
        Self::for_paper(PaperSize::A4)
    }

    pub fn badges_per_page(&self) -> usize {
        self.badges_per_row * self.badges_per_col
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

// ============================================================================
// Placement
// ============================================================================

/// Where the i-th badge lands. The rectangle origin is the badge's
/// bottom-left corner in PDF user space (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page_index: usize,
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the placement for badge index `i`. Pure function of `i` and the
/// geometry, defined for all indices; the grid fills row-major
/// (left-to-right, then top-to-bottom) and a new page begins exactly when
/// `i` is a multiple of `badges_per_page`.
pub fn placement(i: usize, geometry: &PageGeometry) -> Placement {
    let per_page = geometry.badges_per_page();
    let page_index = i / per_page;
    let pos = i % per_page;
    let row = pos / geometry.badges_per_row;
    let col = pos % geometry.badges_per_row;

    let x = geometry.margin_left + col as f32 * (geometry.badge_width + geometry.spacing_x);
    let top = geometry.page_height
        - geometry.margin_top
        - row as f32 * (geometry.badge_height + geometry.spacing_y);

    Placement {
        page_index,
        row,
        col,
        x,
        y: top - geometry.badge_height,
        width: geometry.badge_width,
        height: geometry.badge_height,
    }
}

/// Number of pages needed for `n` badges (`n` >= 1).
pub fn page_count(n: usize, geometry: &PageGeometry) -> usize {
    let per_page = geometry.badges_per_page();
    (n + per_page - 1) / per_page
}

// ============================================================================
// Tests
// ============================================================================
