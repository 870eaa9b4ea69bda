//! Underline indicator: evaluation and view

pub mod evaluator;
pub mod indicator;

pub use evaluator::{
    evaluate, line_rect_for_bounds, IndicatorStyle, IndicatorVisual, InteractionState,
    DEFAULT_LINE_HEIGHT,
};
pub use indicator::LineView;
