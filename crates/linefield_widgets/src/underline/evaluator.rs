//! Visual-state evaluation for the underline indicator
//!
//! Maps the configured style and the host's interaction state to the
//! indicator's color, height and frame. Pure; the responder in
//! [`crate::text_field`] applies the result.
//!
//! ```text
//!   focused ─┐
//!            ├─ OR ──► active ──► (selected_color, selected_height)
//!   selected ┘            │
//!                         └─ !active ► (normal_color, normal_height)
//!
//!   rect = (0, bounds.height - height, bounds.width, height)
//! ```

use linefield_core::{Color, Rect, Size};

/// Default line height before the indicator is first created
pub const DEFAULT_LINE_HEIGHT: f32 = 1.0;

/// Configured indicator colors and heights
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    /// Line color while inactive
    pub normal_color: Color,
    /// Line color while focused or selected
    pub selected_color: Color,
    /// Line height while inactive, never negative
    pub normal_height: f32,
    /// Line height while focused or selected, never negative
    pub selected_height: f32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            normal_color: Color::LIGHT_GRAY,
            selected_color: Color::BLACK,
            normal_height: DEFAULT_LINE_HEIGHT,
            selected_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Interaction flags observed from the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub focused: bool,
    pub selected: bool,
}

impl InteractionState {
    pub const fn new(focused: bool, selected: bool) -> Self {
        Self { focused, selected }
    }

    /// Focused or selected
    pub fn is_active(&self) -> bool {
        self.focused || self.selected
    }
}

/// Result of one evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorVisual {
    pub color: Color,
    pub height: f32,
    pub rect: Rect,
}

/// Frame of a bottom-anchored, full-width line of `height` inside `bounds`
pub fn line_rect_for_bounds(bounds: Size, height: f32) -> Rect {
    Rect::new(0.0, bounds.height - height, bounds.width, height)
}

/// Evaluate the indicator appearance
pub fn evaluate(style: &IndicatorStyle, interaction: InteractionState, bounds: Size) -> IndicatorVisual {
    let (color, height) = if interaction.is_active() {
        (style.selected_color, style.selected_height)
    } else {
        (style.normal_color, style.normal_height)
    };

    IndicatorVisual {
        color,
        height,
        rect: line_rect_for_bounds(bounds, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> IndicatorStyle {
        IndicatorStyle {
            normal_color: Color::GRAY,
            selected_color: Color::BLUE,
            normal_height: 1.0,
            selected_height: 2.0,
        }
    }

    #[test]
    fn test_active_states_use_selected_appearance() {
        let bounds = Size::new(300.0, 40.0);
        for interaction in [
            InteractionState::new(true, false),
            InteractionState::new(false, true),
            InteractionState::new(true, true),
        ] {
            let visual = evaluate(&style(), interaction, bounds);
            assert_eq!(visual.color, Color::BLUE);
            assert_eq!(visual.height, 2.0);
        }

        let idle = evaluate(&style(), InteractionState::default(), bounds);
        assert_eq!(idle.color, Color::GRAY);
        assert_eq!(idle.height, 1.0);
    }

    #[test]
    fn test_rect_spans_width_and_hugs_bottom() {
        for width in [0.0, 1.0, 123.5, 1024.0] {
            for bounds_height in [2.0, 40.0, 88.0] {
                let bounds = Size::new(width, bounds_height);
                let visual = evaluate(&style(), InteractionState::new(true, false), bounds);
                assert_eq!(visual.rect.width(), width);
                assert_eq!(visual.rect.x(), 0.0);
                assert_eq!(visual.rect.y(), bounds_height - visual.height);
                assert_eq!(visual.rect.max_y(), bounds_height);
            }
        }
    }

    #[test]
    fn test_scenario_300_by_40() {
        let bounds = Size::new(300.0, 40.0);
        let idle = evaluate(&style(), InteractionState::default(), bounds);
        assert_eq!(idle.rect, Rect::new(0.0, 39.0, 300.0, 1.0));

        let focused = evaluate(&style(), InteractionState::new(true, false), bounds);
        assert_eq!(focused.rect, Rect::new(0.0, 38.0, 300.0, 2.0));
    }

    #[test]
    fn test_zero_height_line() {
        let mut flat = style();
        flat.normal_height = 0.0;
        let visual = evaluate(&flat, InteractionState::default(), Size::new(50.0, 20.0));
        assert_eq!(visual.rect, Rect::new(0.0, 20.0, 50.0, 0.0));
    }
}
