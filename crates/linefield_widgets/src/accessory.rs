//! Left and right accessory views
//!
//! An image accessory is a container `ACCESSORY_MARGIN` wider than the
//! image with the image centered inside. A padding accessory is a small
//! spacer keeping text off the field edge.

use linefield_core::{Image, Rect, Size};
use linefield_platform::{AccessoryContent, AccessoryView, ViewMode};

/// Horizontal room added around an accessory image
pub const ACCESSORY_MARGIN: f32 = 20.0;

/// Frame of the padding spacer
pub const PADDING_FRAME: Rect = Rect::new(0.0, 5.0, 5.0, 5.0);

/// Which edge of the field an accessory sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Container holding `image` centered, always visible
pub fn image_accessory(image: &Image) -> AccessoryView {
    let container = Rect::from(Size::new(image.width() + ACCESSORY_MARGIN, image.height()));
    AccessoryView {
        frame: container,
        content: AccessoryContent::Image {
            image: image.clone(),
            frame: container.centered(image.size()),
        },
        mode: ViewMode::Always,
    }
}

/// Minimum padding spacer, always visible
pub fn padding_accessory() -> AccessoryView {
    AccessoryView {
        frame: PADDING_FRAME,
        content: AccessoryContent::Padding,
        mode: ViewMode::Always,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_container_geometry() {
        let image = Image::new("mail.png", Size::new(24.0, 18.0));
        let view = image_accessory(&image);

        assert_eq!(view.frame, Rect::new(0.0, 0.0, 44.0, 18.0));
        assert_eq!(view.mode, ViewMode::Always);
        match view.content {
            AccessoryContent::Image { frame, .. } => {
                assert_eq!(frame, Rect::new(10.0, 0.0, 24.0, 18.0))
            }
            AccessoryContent::Padding => panic!("expected image content"),
        }
    }

    #[test]
    fn test_zero_sized_image_is_accepted() {
        let view = image_accessory(&Image::new("", Size::ZERO));
        assert_eq!(view.frame.width(), ACCESSORY_MARGIN);
        assert!(view.image().is_some());
    }

    #[test]
    fn test_padding_accessory() {
        let view = padding_accessory();
        assert!(view.is_padding());
        assert_eq!(view.frame, PADDING_FRAME);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
