//! UnderlinedTextField - a host text input decorated with an underline
//!
//! The field provides:
//! - An underline indicator whose color and height follow focus/selection
//! - Left/right image accessories with automatic opposite-side padding
//! - Placeholder styling (color and font, falling back to the field font)
//! - Left-to-right / right-to-left text alignment
//! - A forced "active" appearance for design-time previews
//!
//! Interaction state lives in the host. The field observes it on every
//! [`FieldEvent`] and every configuration change, re-evaluates the
//! indicator synchronously and pushes the result back to the host.
//!
//! # Example
//!
//! ```rust
//! use linefield_core::{FieldEvent, Rect};
//! use linefield_platform::HeadlessField;
//! use linefield_widgets::UnderlinedTextField;
//!
//! let host = HeadlessField::new(Rect::new(0.0, 0.0, 300.0, 40.0));
//! let mut field = UnderlinedTextField::with_ltr(host, true);
//! field.set_normal_height(1.0);
//! field.set_selected_height(2.0);
//! field.set_enabled(true);
//!
//! assert_eq!(field.indicator().unwrap().frame(), Rect::new(0.0, 39.0, 300.0, 1.0));
//!
//! field.host_mut().set_focused(true);
//! field.handle_event(&FieldEvent::FocusGained);
//! assert_eq!(field.indicator().unwrap().frame(), Rect::new(0.0, 38.0, 300.0, 2.0));
//! ```

use linefield_core::{
    Color, EventDispatcher, EventType, FieldEvent, Font, Image, LayoutDirection, ListenerId, Size,
    TextAlignment,
};
use linefield_platform::{AccessoryView, BorderStyle, Platform, TextFieldHost};

use crate::accessory::{image_accessory, padding_accessory, Side};
use crate::placeholder::PlaceholderStyle;
use crate::underline::{evaluate, IndicatorStyle, IndicatorVisual, InteractionState, LineView};

/// Which line heights were set explicitly (and survive default sizing)
#[derive(Clone, Copy, Debug, Default)]
struct ExplicitHeights {
    normal: bool,
    selected: bool,
}

/// Host text input decorated with an underline indicator
pub struct UnderlinedTextField<H: TextFieldHost> {
    host: H,
    enabled: bool,
    style: IndicatorStyle,
    explicit_heights: ExplicitHeights,
    line_view: Option<LineView>,
    highlighted: bool,
    design_preview: bool,
    is_ltr: bool,
    placeholder: PlaceholderStyle,
    left_image: Option<Image>,
    right_image: Option<Image>,
    listeners: EventDispatcher,
}

impl<H: TextFieldHost> UnderlinedTextField<H> {
    /// Wrap `host`, taking the text direction from the platform
    ///
    /// The direction is read once. Later changes of the platform direction
    /// are not picked up; use [`set_ltr`](Self::set_ltr) instead.
    pub fn new<P: Platform>(host: H, platform: &P) -> Self {
        Self::with_direction(host, platform.layout_direction())
    }

    /// Wrap `host` with an explicit layout direction
    pub fn with_direction(host: H, direction: LayoutDirection) -> Self {
        Self::with_ltr(host, direction.is_ltr())
    }

    /// Wrap `host` with an explicit left-to-right flag
    pub fn with_ltr(host: H, is_ltr: bool) -> Self {
        let mut field = Self {
            host,
            enabled: false,
            style: IndicatorStyle::default(),
            explicit_heights: ExplicitHeights::default(),
            line_view: None,
            highlighted: false,
            design_preview: false,
            is_ltr,
            placeholder: PlaceholderStyle::default(),
            left_image: None,
            right_image: None,
            listeners: EventDispatcher::new(),
        };
        field.update_text_alignment();
        field
    }

    // =========================================================================
    // Host access
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for toolkit-side state (bounds, focus, text)
    ///
    /// Changes made here are observed on the next [`handle_event`](Self::handle_event).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // =========================================================================
    // Underline configuration
    // =========================================================================

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn the underline on or off
    ///
    /// Enabling removes the host border, creates the line view on first
    /// use and evaluates it. Disabling leaves the line view in place but
    /// stops all further updates to it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.host.set_needs_display();

        if enabled {
            self.host.set_border_style(BorderStyle::None);
            self.create_line_view();
            self.update_control();
        }

        self.update_text_alignment();
        tracing::debug!("underline {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    pub fn set_normal_color(&mut self, color: Color) {
        self.style.normal_color = color;
        self.update_line_view();
        self.host.set_needs_display();
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.style.selected_color = color;
        self.update_line_view();
        self.host.set_needs_display();
    }

    /// Set the inactive line height; negative or NaN values become 0
    pub fn set_normal_height(&mut self, height: f32) {
        self.style.normal_height = clamp_height("normal", height);
        self.explicit_heights.normal = true;
        self.update_line_view();
        self.host.set_needs_display();
    }

    /// Set the active line height; negative or NaN values become 0
    pub fn set_selected_height(&mut self, height: f32) {
        self.style.selected_height = clamp_height("selected", height);
        self.explicit_heights.selected = true;
        self.update_line_view();
        self.host.set_needs_display();
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
        self.update_line_view();
    }

    /// The line view, once the underline has been enabled
    pub fn indicator(&self) -> Option<&LineView> {
        self.line_view.as_ref()
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Focus and selection as currently reported by the host
    ///
    /// During a design-time preview the field reports itself selected.
    pub fn interaction(&self) -> InteractionState {
        InteractionState::new(
            self.host.is_focused(),
            self.host.is_selected() || self.design_preview,
        )
    }

    /// Being edited or selected
    pub fn is_active(&self) -> bool {
        self.interaction().is_active()
    }

    /// Evaluate the indicator against the current host state
    pub fn visual(&self) -> IndicatorVisual {
        evaluate(&self.style, self.interaction(), self.host.bounds().size)
    }

    /// Whether the field is rendering for a design-time preview
    pub fn is_design_preview(&self) -> bool {
        self.design_preview
    }

    /// Handle a host notification
    ///
    /// Re-evaluates the indicator, then forwards the event to listeners
    /// registered with [`on_event`](Self::on_event).
    pub fn handle_event(&mut self, event: &FieldEvent) {
        match event {
            FieldEvent::DesignPreview => self.prepare_for_design_preview(),
            _ => self.update_control(),
        }
        self.listeners.dispatch(event);
    }

    fn prepare_for_design_preview(&mut self) {
        self.host.set_border_style(BorderStyle::None);
        self.design_preview = true;
        self.update_control();
        self.host.invalidate_intrinsic_content_size();
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Observe host events of one type after the field has handled them
    pub fn on_event<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&FieldEvent) + 'static,
    {
        let id = self.listeners.subscribe(event_type, callback);
        tracing::trace!("{} field listener(s)", self.listeners.len());
        id
    }

    /// Observe text edits
    pub fn on_editing_changed<F>(&mut self, mut callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.listeners
            .subscribe(EventType::EditingChanged, move |_| callback())
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // =========================================================================
    // Accessories
    // =========================================================================

    pub fn left_image(&self) -> Option<&Image> {
        self.left_image.as_ref()
    }

    pub fn right_image(&self) -> Option<&Image> {
        self.right_image.as_ref()
    }

    /// Show `image` at the left edge. `None` leaves the current views as they are.
    pub fn set_left_image(&mut self, image: Option<Image>) {
        if let Some(image) = image {
            self.attach_image(Side::Left, image);
        }
    }

    /// Show `image` at the right edge. `None` leaves the current views as they are.
    pub fn set_right_image(&mut self, image: Option<Image>) {
        if let Some(image) = image {
            self.attach_image(Side::Right, image);
        }
    }

    fn attach_image(&mut self, side: Side, image: Image) {
        // Keep text off the opposite edge unless an image already sits there
        if self.image_on(side.opposite()).is_none() {
            self.set_accessory(side.opposite(), padding_accessory());
        }
        self.set_accessory(side, image_accessory(&image));
        tracing::debug!("{:?} accessory image '{}'", side, image.source());

        match side {
            Side::Left => self.left_image = Some(image),
            Side::Right => self.right_image = Some(image),
        }
    }

    /// Install padding spacers on both edges, replacing any accessories
    pub fn pad_both_sides(&mut self) {
        self.set_accessory(Side::Left, padding_accessory());
        self.set_accessory(Side::Right, padding_accessory());
        self.left_image = None;
        self.right_image = None;
    }

    fn image_on(&self, side: Side) -> Option<&Image> {
        match side {
            Side::Left => self.left_image.as_ref(),
            Side::Right => self.right_image.as_ref(),
        }
    }

    fn set_accessory(&mut self, side: Side, view: AccessoryView) {
        match side {
            Side::Left => self.host.set_left_view(view),
            Side::Right => self.host.set_right_view(view),
        }
    }

    // =========================================================================
    // Placeholder and font
    // =========================================================================

    pub fn placeholder_style(&self) -> &PlaceholderStyle {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, text: Option<String>) {
        self.host.set_placeholder(text);
        self.update_placeholder();
    }

    pub fn set_placeholder_color(&mut self, color: Color) {
        self.placeholder.color = color;
        self.update_placeholder();
    }

    pub fn set_placeholder_font(&mut self, font: Option<Font>) {
        self.placeholder.font = font;
        self.update_placeholder();
    }

    /// Set the field font; the placeholder follows it unless it has its own
    pub fn set_font(&mut self, font: Option<Font>) {
        self.host.set_font(font);
        self.update_placeholder();
        self.host.invalidate_intrinsic_content_size();
    }

    fn update_placeholder(&mut self) {
        let resolved = self
            .placeholder
            .resolve(self.host.placeholder(), self.host.font());
        match resolved {
            Some(styled) => self.host.set_styled_placeholder(styled),
            None => tracing::trace!("placeholder not styled: missing text or font"),
        }
    }

    // =========================================================================
    // Text direction
    // =========================================================================

    pub fn is_ltr(&self) -> bool {
        self.is_ltr
    }

    pub fn set_ltr(&mut self, is_ltr: bool) {
        self.is_ltr = is_ltr;
        self.update_text_alignment();
    }

    /// Alignment implied by the direction flag
    pub fn text_alignment(&self) -> TextAlignment {
        if self.is_ltr {
            TextAlignment::Left
        } else {
            TextAlignment::Right
        }
    }

    fn update_text_alignment(&mut self) {
        let alignment = self.text_alignment();
        self.host.set_text_alignment(alignment);
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Height of one line of text in the field font, if the host has a font
    pub fn text_height(&self) -> Option<f32> {
        self.host.font().map(Font::line_height)
    }

    /// Preferred size: current width by one line of text
    pub fn intrinsic_content_size(&self) -> Option<Size> {
        let height = self.text_height()?;
        Some(Size::new(self.host.bounds().width(), height))
    }

    // =========================================================================
    // Responder
    // =========================================================================

    fn create_line_view(&mut self) {
        if self.line_view.is_some() {
            return;
        }

        self.line_view = Some(LineView::new());
        self.configure_default_heights();
        self.host.indicator_attached();
    }

    /// Hairline defaults for heights that were never set explicitly
    fn configure_default_heights(&mut self) {
        let scale = self.host.scale_factor();
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let hairline = 2.0 / scale;

        if !self.explicit_heights.normal {
            self.style.normal_height = hairline;
        }
        if !self.explicit_heights.selected {
            self.style.selected_height = 2.0 * self.style.normal_height;
        }
        tracing::debug!(
            "line heights: normal={} selected={}",
            self.style.normal_height,
            self.style.selected_height
        );
    }

    fn update_control(&mut self) {
        self.update_line_view();
    }

    fn update_line_view(&mut self) {
        if !self.enabled {
            return;
        }
        let visual = self.visual();
        if let Some(line_view) = self.line_view.as_mut() {
            line_view.apply(&visual);
            tracing::trace!(
                "indicator frame={:?} color={}",
                visual.rect,
                visual.color.to_hex_string()
            );
            self.host.indicator_updated(visual.rect, visual.color);
        }
    }
}

fn clamp_height(which: &str, height: f32) -> f32 {
    if height >= 0.0 {
        height
    } else {
        tracing::warn!("{} line height {} is not a non-negative number; using 0", which, height);
        0.0
    }
}

impl<H: TextFieldHost + std::fmt::Debug> std::fmt::Debug for UnderlinedTextField<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnderlinedTextField")
            .field("host", &self.host)
            .field("enabled", &self.enabled)
            .field("style", &self.style)
            .field("line_view", &self.line_view)
            .field("is_ltr", &self.is_ltr)
            .finish_non_exhaustive()
    }
}
