//! Fonts, alignment and layout direction
//!
//! Only the metrics needed to size a single line of text are modeled here;
//! shaping and rasterization belong to the host.

use std::fmt;

/// Font metrics in font units (typically 1000 or 2048 units per em)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Units per em
    pub units_per_em: u16,
    /// Distance from baseline to top of tallest glyph
    pub ascender: i16,
    /// Distance from baseline to bottom, typically negative
    pub descender: i16,
    /// Additional spacing between lines
    pub line_gap: i16,
}

impl FontMetrics {
    /// Metrics of the platform UI typeface
    pub const SYSTEM: FontMetrics = FontMetrics {
        units_per_em: 2048,
        ascender: 1950,
        descender: -494,
        line_gap: 0,
    };

    /// Line height in font units
    pub fn line_height(&self) -> i32 {
        self.ascender as i32 - self.descender as i32 + self.line_gap as i32
    }

    /// Scale a value from font units to pixels
    pub fn scale(&self, value: i32, font_size: f32) -> f32 {
        if self.units_per_em == 0 {
            return 0.0;
        }
        value as f32 * font_size / self.units_per_em as f32
    }

    /// Line height in pixels
    pub fn line_height_px(&self, font_size: f32) -> f32 {
        self.scale(self.line_height(), font_size)
    }
}

/// A sized font face
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: f32,
    metrics: FontMetrics,
}

impl Font {
    /// Family name used for the platform UI typeface
    pub const SYSTEM_FAMILY: &'static str = "system-ui";

    pub fn new(family: impl Into<String>, size: f32, metrics: FontMetrics) -> Self {
        Self {
            family: family.into(),
            size,
            metrics,
        }
    }

    /// The platform UI font at `size`
    pub fn system(size: f32) -> Self {
        Self::new(Self::SYSTEM_FAMILY, size, FontMetrics::SYSTEM)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Height of a single line of text set in this font
    pub fn line_height(&self) -> f32 {
        self.metrics.line_height_px(self.size)
    }

    /// Same face at a different size
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Follow the script direction
    #[default]
    Natural,
    Left,
    Center,
    Right,
}

/// Application-wide layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_ltr(&self) -> bool {
        matches!(self, LayoutDirection::LeftToRight)
    }
}
