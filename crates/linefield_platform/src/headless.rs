//! Headless platform and text field
//!
//! An in-memory host that records every presentation mutation it receives.
//! Used by tests and by the `linefield preview` command, where no windowing
//! system is available.

use linefield_core::{Color, Font, LayoutDirection, Rect, TextAlignment};

use crate::error::{PlatformError, Result};
use crate::host::{AccessoryView, BorderStyle, StyledPlaceholder, TextFieldHost};
use crate::platform::Platform;

/// Environment variable overriding the headless layout direction (`ltr`/`rtl`)
pub const LAYOUT_DIRECTION_ENV: &str = "LINEFIELD_LAYOUT_DIRECTION";

/// Platform without a display
#[derive(Clone, Debug)]
pub struct HeadlessPlatform {
    direction: LayoutDirection,
    scale_factor: f64,
}

impl HeadlessPlatform {
    /// Create with an explicit direction and scale factor
    pub fn with_settings(direction: LayoutDirection, scale_factor: f64) -> Result<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(PlatformError::InvalidScaleFactor(scale_factor));
        }
        Ok(Self {
            direction,
            scale_factor,
        })
    }

    /// Parse a layout direction name (`ltr` or `rtl`, case-insensitive)
    pub fn parse_direction(name: &str) -> Result<LayoutDirection> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ltr" | "left-to-right" => Ok(LayoutDirection::LeftToRight),
            "rtl" | "right-to-left" => Ok(LayoutDirection::RightToLeft),
            _ => Err(PlatformError::UnknownLayoutDirection(name.to_string())),
        }
    }
}

impl Platform for HeadlessPlatform {
    fn new() -> Result<Self> {
        let direction = match std::env::var(LAYOUT_DIRECTION_ENV) {
            Ok(value) => Self::parse_direction(&value)?,
            Err(std::env::VarError::NotPresent) => LayoutDirection::LeftToRight,
            Err(e) => return Err(PlatformError::InitFailed(e.to_string())),
        };
        tracing::debug!("headless platform: direction={:?}", direction);
        Self::with_settings(direction, 1.0)
    }

    fn name(&self) -> &'static str {
        "headless"
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

/// In-memory text field host
#[derive(Clone, Debug)]
pub struct HeadlessField {
    bounds: Rect,
    scale_factor: f32,
    focused: bool,
    selected: bool,
    text: String,
    font: Option<Font>,
    placeholder: Option<String>,
    styled_placeholder: Option<StyledPlaceholder>,
    alignment: TextAlignment,
    border_style: BorderStyle,
    left_view: Option<AccessoryView>,
    right_view: Option<AccessoryView>,
    indicator: Option<(Rect, Color)>,
    indicator_attached: usize,
    indicator_updates: usize,
    display_requests: usize,
    intrinsic_invalidations: usize,
}

impl HeadlessField {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            scale_factor: 1.0,
            focused: false,
            selected: false,
            text: String::new(),
            font: None,
            placeholder: None,
            styled_placeholder: None,
            alignment: TextAlignment::Natural,
            border_style: BorderStyle::default(),
            left_view: None,
            right_view: None,
            indicator: None,
            indicator_attached: 0,
            indicator_updates: 0,
            display_requests: 0,
            intrinsic_invalidations: 0,
        }
    }

    /// Set the font at construction
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the screen scale factor at construction
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    // =========================================================================
    // Host-side state (driven by the toolkit, not the field)
    // =========================================================================

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    // =========================================================================
    // Recorded presentation
    // =========================================================================

    pub fn styled_placeholder(&self) -> Option<&StyledPlaceholder> {
        self.styled_placeholder.as_ref()
    }

    pub fn text_alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub fn border_style(&self) -> BorderStyle {
        self.border_style
    }

    pub fn left_view(&self) -> Option<&AccessoryView> {
        self.left_view.as_ref()
    }

    pub fn right_view(&self) -> Option<&AccessoryView> {
        self.right_view.as_ref()
    }

    /// Last indicator frame and color pushed by the field
    pub fn indicator(&self) -> Option<(Rect, Color)> {
        self.indicator
    }

    pub fn indicator_attach_count(&self) -> usize {
        self.indicator_attached
    }

    pub fn indicator_update_count(&self) -> usize {
        self.indicator_updates
    }

    pub fn display_requests(&self) -> usize {
        self.display_requests
    }

    pub fn intrinsic_invalidations(&self) -> usize {
        self.intrinsic_invalidations
    }
}

impl TextFieldHost for HeadlessField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
    }

    fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    fn set_placeholder(&mut self, text: Option<String>) {
        self.placeholder = text;
    }

    fn set_styled_placeholder(&mut self, placeholder: StyledPlaceholder) {
        self.styled_placeholder = Some(placeholder);
    }

    fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    fn set_border_style(&mut self, style: BorderStyle) {
        self.border_style = style;
    }

    fn set_left_view(&mut self, view: AccessoryView) {
        self.left_view = Some(view);
    }

    fn set_right_view(&mut self, view: AccessoryView) {
        self.right_view = Some(view);
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn indicator_attached(&mut self) {
        self.indicator_attached += 1;
    }

    fn indicator_updated(&mut self, frame: Rect, color: Color) {
        self.indicator = Some((frame, color));
        self.indicator_updates += 1;
    }

    fn set_needs_display(&mut self) {
        self.display_requests += 1;
    }

    fn invalidate_intrinsic_content_size(&mut self) {
        self.intrinsic_invalidations += 1;
    }
}
