//! The native text input a field decorates
//!
//! Interaction state (focus, selection) and text content are owned by the
//! host and only ever read by the field. Presentation properties flow the
//! other way: the field computes them and pushes them through the setters.

use linefield_core::{Color, Font, Image, Rect, TextAlignment};

/// Border drawn by the host around its text area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// No border; required while an underline is shown
    None,
    Line,
    Bezel,
    #[default]
    RoundedRect,
}

/// When an accessory view is visible
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Never,
    WhileEditing,
    UnlessEditing,
    Always,
}

/// What an accessory view shows
#[derive(Clone, Debug, PartialEq)]
pub enum AccessoryContent {
    /// Empty spacer that keeps text off the field edge
    Padding,
    /// An image placed at `frame` inside the container
    Image {
        image: Image,
        /// Image frame in container coordinates
        frame: Rect,
    },
}

/// A view placed at the left or right edge of the text area
#[derive(Clone, Debug, PartialEq)]
pub struct AccessoryView {
    /// Container frame in accessory-slot coordinates
    pub frame: Rect,
    pub content: AccessoryContent,
    pub mode: ViewMode,
}

impl AccessoryView {
    pub fn is_padding(&self) -> bool {
        matches!(self.content, AccessoryContent::Padding)
    }

    pub fn image(&self) -> Option<&Image> {
        match &self.content {
            AccessoryContent::Image { image, .. } => Some(image),
            AccessoryContent::Padding => None,
        }
    }
}

/// Placeholder text with resolved color and font
#[derive(Clone, Debug, PartialEq)]
pub struct StyledPlaceholder {
    pub text: String,
    pub color: Color,
    pub font: Font,
}

/// Native single-line text input
///
/// Hooks with default bodies are optional; a host that does not need the
/// notification can ignore it.
pub trait TextFieldHost {
    /// Bounds in the field's own coordinate space
    fn bounds(&self) -> Rect;

    /// Whether the field is first responder (being edited)
    fn is_focused(&self) -> bool;

    /// Whether the control is in its selected state
    fn is_selected(&self) -> bool;

    /// Font used for the field's text, if any
    fn font(&self) -> Option<&Font>;

    fn set_font(&mut self, font: Option<Font>);

    /// Unstyled placeholder text
    fn placeholder(&self) -> Option<&str>;

    fn set_placeholder(&mut self, text: Option<String>);

    /// Replace the rendered placeholder with a styled one
    fn set_styled_placeholder(&mut self, placeholder: StyledPlaceholder);

    fn set_text_alignment(&mut self, alignment: TextAlignment);

    fn set_border_style(&mut self, style: BorderStyle);

    fn set_left_view(&mut self, view: AccessoryView);

    fn set_right_view(&mut self, view: AccessoryView);

    /// Physical pixels per logical pixel for the screen the field is on
    fn scale_factor(&self) -> f32 {
        1.0
    }

    /// The underline view was added as a subview
    fn indicator_attached(&mut self) {}

    /// The underline view changed frame or color
    fn indicator_updated(&mut self, _frame: Rect, _color: Color) {}

    /// Appearance changed; repaint before the next frame
    fn set_needs_display(&mut self) {}

    /// Preferred size changed; re-run auto layout
    fn invalidate_intrinsic_content_size(&mut self) {}
}
