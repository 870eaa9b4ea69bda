//! Image handles
//!
//! Decoding and drawing are done by the host. The field only needs the
//! source identifier and the natural size to lay out accessory containers.

use crate::geometry::Size;

/// A decoded image known by its source and natural size
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    source: String,
    size: Size,
}

impl Image {
    pub fn new(source: impl Into<String>, size: Size) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}
