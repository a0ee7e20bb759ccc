// Color parsing, badge templates, and palette resolution.

use crate::BadgeError;

// ============================================================================
// Colors
// ============================================================================

/// An RGB color parsed from a hex triplet, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl HexColor {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        HexColor { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
    pub fn parse(s: &str) -> Result<Self, BadgeError> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(BadgeError::InvalidInput(format!("malformed color: {}", s)));
        }
        let expanded;
        let hex = match hex.len() {
            6 => hex,
            3 => {
                expanded = hex
                    .chars()
                    .flat_map(|c| [c, c])
                    .collect::<String>();
                &expanded
            }
            _ => return Err(BadgeError::InvalidInput(format!("malformed color: {}", s))),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| BadgeError::InvalidInput(format!("malformed color: {}", s)))
        };

        Ok(HexColor {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Darker/lighter shade of this color. Factor < 1.0 darkens toward
    /// black, > 1.0 lightens toward white.
    pub fn shade(&self, factor: f32) -> Self {
        let mix = |c: f32| {
            if factor <= 1.0 {
                c * factor
            } else {
                c + (1.0 - c) * (factor - 1.0).min(1.0)
            }
        };
        HexColor::rgb(mix(self.r), mix(self.g), mix(self.b))
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Visual variant of the badge. Unrecognized identifiers fall back to
/// `Classic` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    Classic,
    Primary,
    Subtle,
    Outline,
}

impl Template {
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "primary" => Template::Primary,
            "subtle" => Template::Subtle,
            "outline" => Template::Outline,
            _ => Template::Classic,
        }
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Resolved colors for one badge: the header band fill, the side accent
/// bars, and the card border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub header: HexColor,
    pub accent: HexColor,
    pub border: HexColor,
}

impl Palette {
    /// Palette table keyed by template. `Classic` derives everything from
    /// the single style color; the other templates substitute a fixed
    /// color triple.
    pub fn resolve(template: Template, color: HexColor) -> Self {
        match template {
            Template::Classic => Palette {
                header: color,
                accent: color.shade(0.70),
                border: color.shade(1.55),
            },
            Template::Primary => Palette {
                header: HexColor::rgb(0.145, 0.388, 0.922), // #2563EB
                accent: HexColor::rgb(0.118, 0.251, 0.686), // #1E40AF
                border: HexColor::rgb(0.576, 0.773, 0.992), // #93C5FD
            },
            Template::Subtle => Palette {
                header: HexColor::rgb(0.420, 0.447, 0.502), // #6B7280
                accent: HexColor::rgb(0.294, 0.333, 0.388), // #4B5563
                border: HexColor::rgb(0.820, 0.835, 0.859), // #D1D5DB
            },
            Template::Outline => Palette {
                header: HexColor::rgb(0.067, 0.094, 0.153), // #111827
                accent: HexColor::rgb(0.216, 0.255, 0.318), // #374151
                border: HexColor::rgb(0.067, 0.094, 0.153), // #111827
            },
        }
    }
}

// ============================================================================
// Style Parameters
// ============================================================================

/// User-facing styling input: one color plus an optional template id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParameters {
    pub color: HexColor,
    pub template: Template,
}

impl StyleParameters {
    pub fn new(color: &str, template: Option<&str>) -> Result<Self, BadgeError> {
        Ok(StyleParameters {
            color: HexColor::parse(color)?,
            template: template.map(Template::from_id).unwrap_or_default(),
        })
    }

    pub fn palette(&self) -> Palette {
        Palette::resolve(self.template, self.color)
    }
}

// ============================================================================
// Tests
// ============================================================================
