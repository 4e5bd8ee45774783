//! Declarative slider configuration.
//!
//! ```yaml
//! min: 0
//! max: 100
//! step: 5
//! value: 25
//! preferred_width: 240
//! style:
//!   knob_width: 16
//!   knob_height: 24
//!   track_color: "#cccccc"
//! ```

use crate::range::RangeModel;
use crate::slider::Slider;
use crate::style::SliderStyle;
use serde::{Deserialize, Serialize};
use stagecraft_core::{Color, ColorParseError, SharedFocus, WidgetError};
use thiserror::Error;

/// Errors loading a slider from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed YAML or unknown fields.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A color field is not a hex color.
    #[error("invalid color in '{field}': {source}")]
    Color {
        /// Field name
        field: &'static str,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },

    /// The values parsed but do not describe a valid slider.
    #[error(transparent)]
    Widget(#[from] WidgetError),
}

/// Style section of a [`SliderConfig`]. Colors are hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Knob width in pixels
    pub knob_width: f32,
    /// Knob height in pixels
    pub knob_height: f32,
    /// Track fill, `#rrggbb[aa]`
    pub track_color: String,
    /// Knob fill, `#rrggbb[aa]`
    pub knob_color: String,
    /// Knob outline while dragging, `#rrggbb[aa]`
    pub pressed_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = SliderStyle::default();
        Self {
            knob_width: style.knob_width,
            knob_height: style.knob_height,
            track_color: style.track_color.to_hex(),
            knob_color: style.knob_color.to_hex(),
            pressed_color: style.pressed_color.to_hex(),
        }
    }
}

impl StyleConfig {
    /// Resolve colors and build the style.
    pub fn to_style(&self) -> Result<SliderStyle, ConfigError> {
        let color = |field: &'static str, hex: &str| {
            Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
        };
        let style = SliderStyle {
            knob_width: self.knob_width,
            knob_height: self.knob_height,
            track_color: color("track_color", &self.track_color)?,
            knob_color: color("knob_color", &self.knob_color)?,
            pressed_color: color("pressed_color", &self.pressed_color)?,
        };
        style.validate()?;
        Ok(style)
    }
}

/// Everything needed to build a [`Slider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
    /// Step (`0` for continuous)
    #[serde(default)]
    pub step: f32,
    /// Initial value; defaults to `min`
    #[serde(default)]
    pub value: Option<f32>,
    /// Preferred width in pixels
    pub preferred_width: f32,
    /// Pinned preferred height; defaults to the knob height
    #[serde(default)]
    pub preferred_height: Option<f32>,
    /// Appearance
    #[serde(default)]
    pub style: StyleConfig,
}

impl SliderConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Validate the numeric range.
    pub fn range(&self) -> Result<RangeModel, WidgetError> {
        RangeModel::with_value(self.min, self.max, self.step, self.value.unwrap_or(self.min))
    }

    /// Build a slider wired to `focus`.
    pub fn build(&self, focus: SharedFocus) -> Result<Slider, ConfigError> {
        let range = self.range()?;
        let style = self.style.to_style()?;
        let slider = match self.preferred_height {
            Some(height) => {
                Slider::with_preferred_size(self.preferred_width, height, range, style, focus)?
            }
            None => Slider::new(self.preferred_width, range, style, focus)?,
        };
        log::debug!(
            "slider {:?} built from config: [{}, {}] step {}",
            stagecraft_core::Widget::id(&slider),
            self.min,
            self.max,
            self.step
        );
        Ok(slider)
    }
}
