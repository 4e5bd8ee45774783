//! Slider appearance and knob metrics.

use serde::{Deserialize, Serialize};
use stagecraft_core::{Color, Size, WidgetError, WidgetResult};

/// Knob dimensions and colors for a [`Slider`](crate::Slider).
///
/// The knob size drives all pointer math; the colors only affect painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Knob width in pixels
    pub knob_width: f32,
    /// Knob height in pixels; also the slider's natural height
    pub knob_height: f32,
    /// Track fill
    pub track_color: Color,
    /// Knob fill
    pub knob_color: Color,
    /// Knob outline while dragging
    pub pressed_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            knob_width: 20.0,
            knob_height: 20.0,
            track_color: Color::rgb(0.8, 0.8, 0.8),
            knob_color: Color::WHITE,
            pressed_color: Color::rgb(0.2, 0.6, 1.0),
        }
    }
}

impl SliderStyle {
    /// Default colors with the given knob size.
    #[must_use]
    pub fn new(knob_width: f32, knob_height: f32) -> Self {
        Self {
            knob_width,
            knob_height,
            ..Self::default()
        }
    }

    /// Set track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set knob color.
    #[must_use]
    pub const fn knob_color(mut self, color: Color) -> Self {
        self.knob_color = color;
        self
    }

    /// Set the outline color used while dragging.
    #[must_use]
    pub const fn pressed_color(mut self, color: Color) -> Self {
        self.pressed_color = color;
        self
    }

    /// Knob size.
    #[must_use]
    pub const fn knob_size(&self) -> Size {
        Size::new(self.knob_width, self.knob_height)
    }

    /// Reject negative or non-finite knob dimensions.
    pub fn validate(&self) -> WidgetResult<()> {
        for (name, v) in [("knob_width", self.knob_width), ("knob_height", self.knob_height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(WidgetError::invalid(format!("{name} ({v}) must be >= 0")));
            }
        }
        Ok(())
    }
}
