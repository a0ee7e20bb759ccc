// Badge renderer: paints one badge's fixed visual structure into a
// placement rectangle on a PDF layer.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{Color, IndirectFontRef, Line, Mm, PdfLayerReference, Point, Polygon, Rgb};

use crate::geometry::Placement;
use crate::style::{HexColor, Palette};

// ============================================================================
// Constants
// ============================================================================

const PT_TO_MM: f32 = 0.352_777_78;

/// Header band with the fixed caption, as a fraction of badge height
const HEADER_BAND_RATIO: f32 = 0.185;

/// Footer band with the muted caption, as a fraction of badge height
const FOOTER_BAND_RATIO: f32 = 0.15;

const HEADER_CAPTION: &str = "HELLO MY NAME IS";
const FOOTER_CAPTION: &str = "EVENT BADGE";

/// Font sizes in points
const HEADER_CAPTION_SIZE: f32 = 9.0;
const FOOTER_CAPTION_SIZE: f32 = 7.5;

/// Name size tiers keyed on character count: longer names get smaller type
/// so the text never leaves the card.
const NAME_SIZE_LARGE: f32 = 26.0;
const NAME_SIZE_MEDIUM: f32 = 20.0;
const NAME_SIZE_SMALL: f32 = 13.0;

/// Letter spacing for the captions, in points
const CAPTION_TRACKING: f32 = 0.6;

/// Average Helvetica glyph advance, as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.6;

/// Accent bar geometry in mm
const BAR_WIDTH: f32 = 1.3;
const BAR_INSET_X: f32 = 2.0;
const BAR_INSET_Y: f32 = 2.5;

const BORDER_THICKNESS: f32 = 0.5;
const HAIRLINE_THICKNESS: f32 = 0.2;

/// Fixed ink colors (template-independent)
const CARD_FILL: HexColor = HexColor::rgb(1.0, 1.0, 1.0);
const HEADER_INK: HexColor = HexColor::rgb(1.0, 1.0, 1.0);
const NAME_INK: HexColor = HexColor::rgb(0.122, 0.161, 0.216); // #1F2937
const FOOTER_INK: HexColor = HexColor::rgb(0.420, 0.447, 0.502); // #6B7280
const FOOTER_FILL: HexColor = HexColor::rgb(0.976, 0.980, 0.984); // #F9FAFB
const FOOTER_RULE: HexColor = HexColor::rgb(0.898, 0.906, 0.922); // #E5E7EB

// ============================================================================
// Fonts
// ============================================================================

/// Builtin fonts, loaded once per document and shared by every badge
pub struct Fonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
}

// ============================================================================
// Name sizing
// ============================================================================

/// Pick the name font size from the character count. Three discrete tiers;
/// boundaries are exclusive (a 10-char name still gets the largest tier,
/// a 15-char name the medium one).
pub fn name_font_size(name: &str) -> f32 {
    let len = name.chars().count();
    if len > 15 {
        NAME_SIZE_SMALL
    } else if len > 10 {
        NAME_SIZE_MEDIUM
    } else {
        NAME_SIZE_LARGE
    }
}

/// Estimated width of a text run in mm, for centering. Builtin fonts carry
/// no metrics, so this uses an average glyph advance plus tracking.
pub(crate) fn text_width_mm(chars: usize, size_pt: f32, tracking_pt: f32) -> f32 {
    (chars as f32 * (size_pt * AVG_GLYPH_WIDTH + tracking_pt)) * PT_TO_MM
}

// ============================================================================
// Badge Drawing
// ============================================================================

/// Draw one badge into `rect`. The name must be non-empty (the assembler
/// validates before calling). Drawing the same badge twice with the same
/// inputs produces identical output.
pub fn draw_badge(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    name: &str,
    palette: &Palette,
    rect: &Placement,
) {
    let header_height = rect.height * HEADER_BAND_RATIO;
    let footer_height = rect.height * FOOTER_BAND_RATIO;
    let header_bottom = rect.y + rect.height - header_height;
    let footer_top = rect.y + footer_height;
    let center_x = rect.x + rect.width / 2.0;

    // Outer card: filled background with border
    layer.set_fill_color(color(CARD_FILL));
    layer.set_outline_color(color(palette.border));
    layer.set_outline_thickness(BORDER_THICKNESS);
    fill_rect(
        layer,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        PaintMode::FillStroke,
    );

    // Header band
    layer.set_fill_color(color(palette.header));
    fill_rect(
        layer,
        rect.x,
        header_bottom,
        rect.width,
        header_height,
        PaintMode::Fill,
    );

    // Footer band with a hairline rule on top
    layer.set_fill_color(color(FOOTER_FILL));
    fill_rect(
        layer,
        rect.x,
        rect.y,
        rect.width,
        footer_height,
        PaintMode::Fill,
    );
    layer.set_outline_color(color(FOOTER_RULE));
    layer.set_outline_thickness(HAIRLINE_THICKNESS);
    draw_line(layer, rect.x, footer_top, rect.x + rect.width, footer_top);

    // Vertical accent bars near the left and right edges of the body
    layer.set_fill_color(color(palette.accent));
    let bar_bottom = footer_top + BAR_INSET_Y;
    let bar_height = header_bottom - BAR_INSET_Y - bar_bottom;
    fill_rect(
        layer,
        rect.x + BAR_INSET_X,
        bar_bottom,
        BAR_WIDTH,
        bar_height,
        PaintMode::Fill,
    );
    fill_rect(
        layer,
        rect.x + rect.width - BAR_INSET_X - BAR_WIDTH,
        bar_bottom,
        BAR_WIDTH,
        bar_height,
        PaintMode::Fill,
    );

    // Header caption: bold, letter-spaced, light-on-dark
    layer.set_fill_color(color(HEADER_INK));
    centered_text(
        layer,
        &fonts.bold,
        HEADER_CAPTION,
        HEADER_CAPTION_SIZE,
        CAPTION_TRACKING,
        center_x,
        header_bottom + header_height / 2.0,
    );

    // Name: bold, tier-sized, centered in the body region
    layer.set_fill_color(color(NAME_INK));
    centered_text(
        layer,
        &fonts.bold,
        name,
        name_font_size(name),
        0.0,
        center_x,
        (header_bottom + footer_top) / 2.0,
    );

    // Footer caption: small, muted
    layer.set_fill_color(color(FOOTER_INK));
    centered_text(
        layer,
        &fonts.regular,
        FOOTER_CAPTION,
        FOOTER_CAPTION_SIZE,
        CAPTION_TRACKING,
        center_x,
        rect.y + footer_height / 2.0,
    );
}

// ============================================================================
// Drawing Utilities
// ============================================================================

fn color(c: HexColor) -> Color {
    Color::Rgb(Rgb::new(c.r, c.g, c.b, None))
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, mode: PaintMode) {
    let points = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ];
    let polygon = Polygon {
        rings: vec![points],
        mode,
        winding_order: WindingOrder::NonZero,
    };
    layer.add_polygon(polygon);
}

fn draw_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    let points = vec![
        (Point::new(Mm(x1), Mm(y1)), false),
        (Point::new(Mm(x2), Mm(y2)), false),
    ];
    let line = Line {
        points,
        is_closed: false,
    };
    layer.add_line(line);
}

/// Draw text centered on `center_x`, with the baseline dropped so the text
/// sits optically centered on `center_y`. Width comes from the estimated
/// glyph advance; the fill color must already be set.
fn centered_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size_pt: f32,
    tracking_pt: f32,
    center_x: f32,
    center_y: f32,
) {
    let width = text_width_mm(text.chars().count(), size_pt, tracking_pt);
    let baseline_y = center_y - size_pt * 0.35 * PT_TO_MM;
    layer.set_character_spacing(tracking_pt);
    layer.use_text(text, size_pt, Mm(center_x - width / 2.0), Mm(baseline_y), font);
    layer.set_character_spacing(0.0);
}

// ============================================================================
// Tests
// ============================================================================
