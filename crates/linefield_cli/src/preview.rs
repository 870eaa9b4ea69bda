//! Headless preview rendering
//!
//! Builds a field on the headless host, replays the requested interaction
//! and reports what the host ended up with.

use std::fmt;

use anyhow::{Context, Result};
use linefield_core::{Color, FieldEvent, LayoutDirection, Rect, Size, TextAlignment};
use linefield_platform::{
    AccessoryView, HeadlessField, HeadlessPlatform, Platform, StyledPlaceholder,
};
use linefield_widgets::{FieldConfig, UnderlinedTextField};

/// Interaction and environment to preview with
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f64,
    /// Overrides the platform direction when set
    pub direction: Option<LayoutDirection>,
    pub focused: bool,
    pub selected: bool,
    pub design_time: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 40.0,
            scale_factor: 1.0,
            direction: None,
            focused: false,
            selected: false,
            design_time: false,
        }
    }
}

/// What the host received
#[derive(Debug, Clone)]
pub struct PreviewReport {
    pub bounds: Rect,
    pub enabled: bool,
    pub active: bool,
    pub indicator: Option<(Rect, Color)>,
    pub alignment: TextAlignment,
    pub placeholder: Option<StyledPlaceholder>,
    pub left_view: Option<AccessoryView>,
    pub right_view: Option<AccessoryView>,
    pub intrinsic_size: Option<Size>,
}

/// Render `config` on a headless host
pub fn render(config: &FieldConfig, options: &PreviewOptions) -> Result<PreviewReport> {
    let direction = match options.direction {
        Some(direction) => direction,
        None => HeadlessPlatform::new()
            .context("failed to initialize headless platform")?
            .layout_direction(),
    };
    let platform = HeadlessPlatform::with_settings(direction, options.scale_factor)
        .context("invalid preview settings")?;

    let bounds = Rect::new(0.0, 0.0, options.width, options.height);
    let host = HeadlessField::new(bounds).with_scale_factor(platform.scale_factor() as f32);
    let mut field = UnderlinedTextField::new(host, &platform);
    config.apply(&mut field);

    field.handle_event(&FieldEvent::LayoutChanged { bounds });
    if options.focused {
        field.host_mut().set_focused(true);
        field.handle_event(&FieldEvent::FocusGained);
    }
    if options.selected {
        field.host_mut().set_selected(true);
        field.handle_event(&FieldEvent::SelectionChanged { selected: true });
    }
    if options.design_time {
        field.handle_event(&FieldEvent::DesignPreview);
    }

    let host = field.host();
    Ok(PreviewReport {
        bounds,
        enabled: field.is_enabled(),
        active: field.is_active(),
        indicator: host.indicator(),
        alignment: host.text_alignment(),
        placeholder: host.styled_placeholder().cloned(),
        left_view: host.left_view().cloned(),
        right_view: host.right_view().cloned(),
        intrinsic_size: field.intrinsic_content_size(),
    })
}

fn fmt_rect(rect: &Rect) -> String {
    format!(
        "({}, {}, {}, {})",
        rect.x(),
        rect.y(),
        rect.width(),
        rect.height()
    )
}

fn fmt_accessory(view: &Option<AccessoryView>) -> String {
    match view {
        None => "none".to_string(),
        Some(view) => match view.image() {
            Some(image) => format!("image '{}' in {}", image.source(), fmt_rect(&view.frame)),
            None => format!("padding {}", fmt_rect(&view.frame)),
        },
    }
}

impl fmt::Display for PreviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bounds:       {}", fmt_rect(&self.bounds))?;
        writeln!(f, "Underline:    {}", if self.enabled { "enabled" } else { "disabled" })?;
        writeln!(f, "State:        {}", if self.active { "active" } else { "normal" })?;
        match &self.indicator {
            Some((rect, color)) => {
                writeln!(f, "Indicator:    {} {}", fmt_rect(rect), color.to_hex_string())?
            }
            None => writeln!(f, "Indicator:    none")?,
        }
        writeln!(f, "Alignment:    {:?}", self.alignment)?;
        match &self.placeholder {
            Some(p) => writeln!(
                f,
                "Placeholder:  \"{}\" {} {}",
                p.text,
                p.color.to_hex_string(),
                p.font
            )?,
            None => writeln!(f, "Placeholder:  none")?,
        }
        writeln!(f, "Left view:    {}", fmt_accessory(&self.left_view))?;
        writeln!(f, "Right view:   {}", fmt_accessory(&self.right_view))?;
        match self.intrinsic_size {
            Some(size) => write!(f, "Intrinsic:    {} x {:.2}", size.width, size.height),
            None => write!(f, "Intrinsic:    unknown (no font)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ltr() -> PreviewOptions {
        PreviewOptions {
            direction: Some(LayoutDirection::LeftToRight),
            ..PreviewOptions::default()
        }
    }

    #[test]
    fn test_preview_default_config() {
        let report = render(&FieldConfig::default(), &ltr()).unwrap();
        assert!(!report.enabled);
        assert!(report.indicator.is_none());
        assert_eq!(report.alignment, TextAlignment::Left);
        assert!(report.to_string().contains("Indicator:    none"));
    }

    #[test]
    fn test_preview_focused() {
        let config = FieldConfig::from_toml_str(
            "enabled = true\n[line]\nnormal_height = 1.0\nselected_height = 2.0",
        )
        .unwrap();
        let options = PreviewOptions {
            focused: true,
            ..ltr()
        };
        let report = render(&config, &options).unwrap();

        assert!(report.active);
        assert_eq!(
            report.indicator.map(|(r, _)| r),
            Some(Rect::new(0.0, 38.0, 300.0, 2.0))
        );
        assert!(report.to_string().contains("(0, 38, 300, 2) #000000"));
    }

    #[test]
    fn test_preview_design_time_rtl() {
        let config = FieldConfig::from_toml_str("enabled = true").unwrap();
        let options = PreviewOptions {
            design_time: true,
            scale_factor: 2.0,
            direction: Some(LayoutDirection::RightToLeft),
            ..PreviewOptions::default()
        };
        let report = render(&config, &options).unwrap();

        assert!(report.active);
        assert_eq!(report.alignment, TextAlignment::Right);
        assert_eq!(
            report.indicator.map(|(r, _)| r),
            Some(Rect::new(0.0, 38.0, 300.0, 2.0))
        );
    }

    #[test]
    fn test_preview_rejects_bad_scale() {
        let options = PreviewOptions {
            scale_factor: -1.0,
            ..ltr()
        };
        assert!(render(&FieldConfig::default(), &options).is_err());
    }
}
