//! Placeholder styling

use linefield_core::{Color, Font};
use linefield_platform::StyledPlaceholder;

/// Configured placeholder appearance
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderStyle {
    pub color: Color,
    /// Falls back to the field font when unset
    pub font: Option<Font>,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            color: Color::LIGHT_GRAY,
            font: None,
        }
    }
}

impl PlaceholderStyle {
    /// Build the styled placeholder for `text`
    ///
    /// Returns `None` when there is no text, or when neither a placeholder
    /// font nor a field font is available.
    pub fn resolve(&self, text: Option<&str>, field_font: Option<&Font>) -> Option<StyledPlaceholder> {
        let text = text?;
        let font = self.font.as_ref().or(field_font)?;
        Some(StyledPlaceholder {
            text: text.to_string(),
            color: self.color,
            font: font.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_field_font() {
        let style = PlaceholderStyle {
            color: Color::GRAY,
            font: None,
        };
        let field_font = Font::system(14.0);

        let styled = style.resolve(Some("Email"), Some(&field_font)).unwrap();
        assert_eq!(styled.text, "Email");
        assert_eq!(styled.color, Color::GRAY);
        assert_eq!(styled.font.size(), 14.0);
    }

    #[test]
    fn test_placeholder_font_wins() {
        let style = PlaceholderStyle {
            color: Color::GRAY,
            font: Some(Font::system(11.0)),
        };
        let styled = style.resolve(Some("Email"), Some(&Font::system(14.0))).unwrap();
        assert_eq!(styled.font.size(), 11.0);
    }

    #[test]
    fn test_missing_inputs_short_circuit() {
        let style = PlaceholderStyle::default();
        assert!(style.resolve(None, Some(&Font::system(14.0))).is_none());
        assert!(style.resolve(Some("Email"), None).is_none());
    }
}
