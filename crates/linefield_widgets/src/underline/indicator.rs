//! The underline view
//!
//! Created lazily the first time the underline is enabled and kept for the
//! lifetime of the field. It never receives input.

use linefield_core::{Color, Rect};

use super::evaluator::IndicatorVisual;

/// Line drawn beneath the text
#[derive(Clone, Debug, PartialEq)]
pub struct LineView {
    frame: Rect,
    background: Color,
    /// Bumped on every applied evaluation
    revision: u64,
}

impl LineView {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            background: Color::TRANSPARENT,
            revision: 0,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// The line sits over the text area and must not swallow touches
    pub fn is_user_interaction_enabled(&self) -> bool {
        false
    }

    /// Number of evaluations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn apply(&mut self, visual: &IndicatorVisual) {
        self.frame = visual.rect;
        self.background = visual.color;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_frame_and_color() {
        let mut view = LineView::new();
        assert_eq!(view.revision(), 0);
        assert!(!view.is_user_interaction_enabled());

        view.apply(&IndicatorVisual {
            color: Color::RED,
            height: 2.0,
            rect: Rect::new(0.0, 38.0, 300.0, 2.0),
        });

        assert_eq!(view.frame(), Rect::new(0.0, 38.0, 300.0, 2.0));
        assert_eq!(view.background(), Color::RED);
        assert_eq!(view.revision(), 1);
    }
}
