//! linefield Platform Abstraction Layer
//!
//! A field never draws text or manages focus on its own. It decorates a
//! native text input owned by the host toolkit. This crate describes that
//! boundary:
//!
//! - [`Platform`] - application-wide environment (layout direction, scale)
//! - [`TextFieldHost`] - the native text input a field decorates
//! - [`HeadlessPlatform`] / [`HeadlessField`] - in-memory implementations
//!   used by tests and the command line previewer
//!
//! # Example
//!
//! ```rust
//! use linefield_core::Rect;
//! use linefield_platform::{HeadlessField, TextFieldHost};
//!
//! let mut host = HeadlessField::new(Rect::new(0.0, 0.0, 300.0, 40.0));
//! host.set_focused(true);
//! assert!(host.is_focused());
//! ```

mod error;
mod headless;
mod host;
mod platform;

pub use error::{PlatformError, Result};
pub use headless::{HeadlessField, HeadlessPlatform, LAYOUT_DIRECTION_ENV};
pub use host::{AccessoryContent, AccessoryView, BorderStyle, StyledPlaceholder, TextFieldHost, ViewMode};
pub use platform::Platform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::headless::{HeadlessField, HeadlessPlatform};
    pub use crate::host::{
        AccessoryContent, AccessoryView, BorderStyle, StyledPlaceholder, TextFieldHost, ViewMode,
    };
    pub use crate::platform::Platform;
}
