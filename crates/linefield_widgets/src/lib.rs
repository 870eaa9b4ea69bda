//! linefield Widget Library
//!
//! [`UnderlinedTextField`] decorates a host text input with an underline
//! indicator, image accessories, placeholder styling and direction-aware
//! alignment.
//!
//! # Architecture
//!
//! ```text
//! host callbacks (layout, focus, selection, edit, design preview)
//!     ↓ FieldEvent
//! UnderlinedTextField::handle_event
//!     ↓ evaluate(style, interaction, bounds)
//! LineView (frame + color)  ──►  TextFieldHost::indicator_updated
//!     ↓
//! EventDispatcher listeners
//! ```
//!
//! Configuration setters re-evaluate synchronously, so the host always
//! paints the latest state.

pub mod accessory;
pub mod config;
pub mod placeholder;
pub mod text_field;
pub mod underline;

pub use accessory::{image_accessory, padding_accessory, Side, ACCESSORY_MARGIN, PADDING_FRAME};
pub use config::{ConfigError, FieldConfig};
pub use placeholder::PlaceholderStyle;
pub use text_field::UnderlinedTextField;
pub use underline::{
    evaluate, line_rect_for_bounds, IndicatorStyle, IndicatorVisual, InteractionState, LineView,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::text_field::UnderlinedTextField;
    pub use crate::underline::{IndicatorStyle, InteractionState, LineView};
    pub use linefield_core::{Color, FieldEvent, Font, Image, Rect, Size};
    pub use linefield_platform::{HeadlessField, HeadlessPlatform, Platform, TextFieldHost};
}
