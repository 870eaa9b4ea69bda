//! Field configuration files
//!
//! A field can be configured from TOML. Every key is optional; keys that
//! are left out keep the widget defaults.
//!
//! ```toml
//! enabled = true
//! ltr = true
//!
//! [line]
//! normal_color = "#AAAAAA"
//! selected_color = "#000000"
//! normal_height = 1.0
//! selected_height = 2.0
//!
//! [text]
//! font = { size = 14.0 }
//!
//! [placeholder]
//! text = "Email"
//! color = "#808080"
//!
//! [images]
//! left = { source = "mail.png", width = 24.0, height = 24.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use linefield_core::{Color, Font, FontMetrics, Image, Size};
use linefield_platform::TextFieldHost;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text_field::UnderlinedTextField;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not read the file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid TOML, or a value has the wrong type
    #[error("invalid field configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A line height is negative or not a number
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidHeight { field: &'static str, value: f32 },

    /// A font size is zero, negative or not a number
    #[error("{field} must be a positive number, got {value}")]
    InvalidFontSize { field: &'static str, value: f32 },

    /// An image dimension is negative or not a number
    #[error("image '{source_name}' has invalid size {width}x{height}")]
    InvalidImageSize {
        source_name: String,
        width: f32,
        height: f32,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Underline section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
    #[serde(default)]
    pub normal_color: Option<Color>,
    #[serde(default)]
    pub selected_color: Option<Color>,
    #[serde(default)]
    pub normal_height: Option<f32>,
    #[serde(default)]
    pub selected_height: Option<f32>,
}

/// A font by family and size
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    pub size: f32,
    #[serde(default = "default_family")]
    pub family: String,
}

fn default_family() -> String {
    Font::SYSTEM_FAMILY.to_string()
}

impl FontConfig {
    /// Resolve to a font. Metrics of named families are not known here,
    /// so the platform UI metrics are used for sizing.
    pub fn to_font(&self) -> Font {
        Font::new(self.family.clone(), self.size, FontMetrics::SYSTEM)
    }
}

/// Field text section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    #[serde(default)]
    pub font: Option<FontConfig>,
}

/// Placeholder section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderConfig {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub font: Option<FontConfig>,
}

/// An accessory image by source and natural size
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    pub source: String,
    pub width: f32,
    pub height: f32,
}

impl ImageConfig {
    pub fn to_image(&self) -> Image {
        Image::new(self.source.clone(), Size::new(self.width, self.height))
    }
}

/// Accessory images section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    #[serde(default)]
    pub left: Option<ImageConfig>,
    #[serde(default)]
    pub right: Option<ImageConfig>,
}

/// Complete field configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Show the underline
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Explicit direction override; the platform direction is used when unset
    #[serde(default)]
    pub ltr: Option<bool>,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

impl FieldConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FieldConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("loaded field configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check value ranges that the type system does not cover
    pub fn validate(&self) -> Result<()> {
        check_height("line.normal_height", self.line.normal_height)?;
        check_height("line.selected_height", self.line.selected_height)?;
        check_font_size("text.font.size", self.text.font.as_ref())?;
        check_font_size("placeholder.font.size", self.placeholder.font.as_ref())?;
        for image in [&self.images.left, &self.images.right].into_iter().flatten() {
            if !(image.width >= 0.0 && image.height >= 0.0) {
                return Err(ConfigError::InvalidImageSize {
                    source_name: image.source.clone(),
                    width: image.width,
                    height: image.height,
                });
            }
        }
        Ok(())
    }

    /// Apply every configured value to `field`
    ///
    /// The underline is enabled last so that configured heights are in
    /// place before the line view is first created.
    pub fn apply<H: TextFieldHost>(&self, field: &mut UnderlinedTextField<H>) {
        if let Some(font) = &self.text.font {
            field.set_font(Some(font.to_font()));
        }
        if let Some(font) = &self.placeholder.font {
            field.set_placeholder_font(Some(font.to_font()));
        }
        if let Some(color) = self.placeholder.color {
            field.set_placeholder_color(color);
        }
        if let Some(text) = &self.placeholder.text {
            field.set_placeholder(Some(text.clone()));
        }

        if let Some(color) = self.line.normal_color {
            field.set_normal_color(color);
        }
        if let Some(color) = self.line.selected_color {
            field.set_selected_color(color);
        }
        if let Some(height) = self.line.normal_height {
            field.set_normal_height(height);
        }
        if let Some(height) = self.line.selected_height {
            field.set_selected_height(height);
        }

        field.set_left_image(self.images.left.as_ref().map(ImageConfig::to_image));
        field.set_right_image(self.images.right.as_ref().map(ImageConfig::to_image));

        if let Some(ltr) = self.ltr {
            field.set_ltr(ltr);
        }
        if let Some(enabled) = self.enabled {
            field.set_enabled(enabled);
        }
    }
}

fn check_height(field: &'static str, value: Option<f32>) -> Result<()> {
    match value {
        Some(value) if !(value >= 0.0) => Err(ConfigError::InvalidHeight { field, value }),
        _ => Ok(()),
    }
}

fn check_font_size(field: &'static str, font: Option<&FontConfig>) -> Result<()> {
    match font {
        Some(font) if !(font.size > 0.0 && font.size.is_finite()) => Err(ConfigError::InvalidFontSize {
            field,
            value: font.size,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefield_core::{Rect, TextAlignment};
    use linefield_platform::HeadlessField;

    const SAMPLE: &str = r##"
enabled = true
ltr = false

[line]
normal_color = "#AAAAAA"
selected_color = "#0000FF"
normal_height = 1.0
selected_height = 2.0

[text]
font = { size = 14.0 }

[placeholder]
text = "Email"
color = "#808080"

[images]
left = { source = "mail.png", width = 24.0, height = 24.0 }
"##;

    #[test]
    fn test_empty_config_is_valid() {
        let config = FieldConfig::from_toml_str("").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn test_parse_sample() {
        let config = FieldConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.enabled, Some(true));
        assert_eq!(config.line.selected_color, Some(Color::BLUE));
        assert_eq!(config.text.font.as_ref().map(|f| f.family.as_str()), Some("system-ui"));
        assert_eq!(config.images.left.as_ref().map(|i| i.width), Some(24.0));
    }

    #[test]
    fn test_rejects_negative_height() {
        let err = FieldConfig::from_toml_str("[line]\nnormal_height = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidHeight {
                field: "line.normal_height",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_font_size() {
        let err = FieldConfig::from_toml_str("[placeholder]\nfont = { size = 0.0 }").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFontSize { .. }));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_colors() {
        assert!(matches!(
            FieldConfig::from_toml_str("colour = \"#FFFFFF\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FieldConfig::from_toml_str("[line]\nnormal_color = \"grey\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = FieldConfig::load(Path::new("/nonexistent/linefield.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = FieldConfig::from_toml_str(SAMPLE).unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(FieldConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_apply_to_field() {
        let config = FieldConfig::from_toml_str(SAMPLE).unwrap();
        let host = HeadlessField::new(Rect::new(0.0, 0.0, 300.0, 40.0));
        let mut field = UnderlinedTextField::with_ltr(host, true);
        config.apply(&mut field);

        assert!(field.is_enabled());
        assert_eq!(field.text_alignment(), TextAlignment::Right);
        assert_eq!(field.indicator().unwrap().frame(), Rect::new(0.0, 39.0, 300.0, 1.0));
        assert_eq!(field.indicator().unwrap().background(), Color::from_hex(0xAAAAAA));

        let placeholder = field.host().styled_placeholder().unwrap();
        assert_eq!(placeholder.color, Color::from_hex(0x808080));
        assert_eq!(placeholder.font.size(), 14.0);

        assert!(field.host().right_view().unwrap().is_padding());
        assert_eq!(field.left_image().map(|i| i.source()), Some("mail.png"));
    }
}
