//! linefield Core
//!
//! This crate provides the foundational types shared by the linefield crates:
//!
//! - **Geometry**: points, sizes and rectangles in logical pixels
//! - **Color**: RGBA colors with hex parsing and serde support
//! - **Text**: font metrics, fonts, alignment and layout direction
//! - **Images**: sized image handles used by accessory views
//! - **Events**: the fixed set of field events and a listener dispatcher
//!
//! # Example
//!
//! ```rust
//! use linefield_core::{Color, Rect};
//!
//! let bounds = Rect::new(0.0, 0.0, 300.0, 40.0);
//! assert_eq!(bounds.width(), 300.0);
//!
//! let gray = Color::from_hex_str("#AAAAAA").unwrap();
//! assert_eq!(gray, Color::from_hex(0xAAAAAA));
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod image;
pub mod text;

pub use color::{Color, ColorParseError};
pub use events::{EventDispatcher, EventType, FieldEvent, ListenerId};
pub use geometry::{Point, Rect, Size};
pub use image::Image;
pub use text::{Font, FontMetrics, LayoutDirection, TextAlignment};
