//! Error types shared by widgets.

use thiserror::Error;

/// Errors raised by widget construction and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    /// Out-of-range or malformed argument. The call had no effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The track is no wider than the knob, so the knob cannot travel.
    #[error("degenerate geometry: track width {track_width} leaves no travel for knob width {knob_width}")]
    DegenerateGeometry {
        /// Width of the track
        track_width: f32,
        /// Width of the knob
        knob_width: f32,
    },
}

impl WidgetError {
    /// Shorthand for [`WidgetError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = WidgetError::invalid("min must be <= max");
        assert_eq!(err.to_string(), "invalid argument: min must be <= max");
    }

    #[test]
    fn test_degenerate_geometry_display() {
        let err = WidgetError::DegenerateGeometry {
            track_width: 10.0,
            knob_width: 10.0,
        };
        assert!(err.to_string().contains("track width 10"));
    }
}
