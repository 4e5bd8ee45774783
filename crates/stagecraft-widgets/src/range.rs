//! Bounded, stepped numeric value.

use serde::Serialize;
use stagecraft_core::{WidgetError, WidgetResult};

/// A value in `[min, max]` with optional step quantization.
///
/// Invariants: `min <= max`, `step >= 0`, `min <= value <= max`. Every
/// mutation is validated; a rejected mutation leaves the model untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeModel {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
}

impl RangeModel {
    /// Create a range starting at `min`.
    pub fn new(min: f32, max: f32, step: f32) -> WidgetResult<Self> {
        Self::with_value(min, max, step, min)
    }

    /// Create a range with an explicit initial value.
    pub fn with_value(min: f32, max: f32, step: f32, value: f32) -> WidgetResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(WidgetError::invalid(format!(
                "bounds must be finite (min {min}, max {max})"
            )));
        }
        if min > max {
            return Err(WidgetError::invalid(format!(
                "min ({min}) must be <= max ({max})"
            )));
        }
        if !step.is_finite() || step < 0.0 {
            return Err(WidgetError::invalid(format!("step ({step}) must be >= 0")));
        }
        Self::check_in_range(min, max, value)?;
        Ok(Self {
            min,
            max,
            step,
            value,
        })
    }

    fn check_in_range(min: f32, max: f32, value: f32) -> WidgetResult<()> {
        // NaN fails both comparisons and lands here too
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(WidgetError::invalid(format!(
                "value ({value}) must be within [{min}, {max}]"
            )))
        }
    }

    /// Store `value` if it lies within `[min, max]`.
    pub fn set_value(&mut self, value: f32) -> WidgetResult<()> {
        Self::check_in_range(self.min, self.max, value)?;
        self.value = value;
        Ok(())
    }

    /// Store a computed value, pulling float drift back into range.
    ///
    /// NaN is never stored; it falls back to `min`.
    pub(crate) fn assign_clamped(&mut self, value: f32) {
        if value.is_nan() {
            log::debug!("computed value is NaN; using min {}", self.min);
            self.value = self.min;
        } else {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// The value rounded down to a multiple of `step`.
    ///
    /// With `step == 0` the slider is continuous and the value is returned
    /// as stored.
    #[must_use]
    pub fn quantized_value(&self) -> f32 {
        if self.step > 0.0 {
            (self.value / self.step).floor() * self.step
        } else {
            self.value
        }
    }

    /// The stored value before quantization.
    #[must_use]
    pub const fn raw_value(&self) -> f32 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Step size (`0` means continuous).
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }
}
