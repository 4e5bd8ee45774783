//! Pointer-to-value math for horizontal sliders.
//!
//! Two one-directional transforms, both pure:
//!
//! - position → value: [`compute_slider_pos`] then [`position_to_value`]
//! - value → position: [`value_to_position`]
//!
//! No state survives between samples except the last knob offset kept by
//! [`PointerInteraction`], so a gesture can resume from any pointer sample.

use stagecraft_core::{WidgetError, WidgetResult};

/// Distance the knob can move along the track. Never negative.
#[must_use]
pub fn travel(track_width: f32, knob_width: f32) -> f32 {
    (track_width - knob_width).max(0.0)
}

/// Knob offset for a pointer at `pointer_x`, with the knob centred under
/// the pointer and clamped to `[0, track_width - knob_width]`.
#[must_use]
pub fn compute_slider_pos(pointer_x: f32, track_width: f32, knob_width: f32) -> f32 {
    let pos = pointer_x - knob_width / 2.0;
    if pos.is_nan() {
        return 0.0;
    }
    pos.clamp(0.0, travel(track_width, knob_width))
}

/// Map a knob offset to a value in `[min, max]`.
///
/// Fails with [`WidgetError::DegenerateGeometry`] when the knob has no room
/// to travel.
pub fn try_position_to_value(
    slider_pos: f32,
    track_width: f32,
    knob_width: f32,
    min: f32,
    max: f32,
) -> WidgetResult<f32> {
    let travel = track_width - knob_width;
    if travel.is_nan() || travel <= 0.0 {
        return Err(WidgetError::DegenerateGeometry {
            track_width,
            knob_width,
        });
    }
    let t = slider_pos / travel;
    let span = max - min;
    if span.is_finite() {
        Ok(span.mul_add(t, min))
    } else {
        // Bounds far enough apart that the span overflows; work in halves.
        Ok(2.0 * (max * 0.5 - min * 0.5).mul_add(t, min * 0.5))
    }
}

/// Like [`try_position_to_value`], but degenerate geometry yields `min`.
///
/// Track and knob sizes come from layout and style, not from the caller, so
/// a zero-travel configuration is absorbed here instead of surfacing as an
/// error during input handling.
#[must_use]
pub fn position_to_value(
    slider_pos: f32,
    track_width: f32,
    knob_width: f32,
    min: f32,
    max: f32,
) -> f32 {
    try_position_to_value(slider_pos, track_width, knob_width, min, max).unwrap_or_else(|err| {
        log::debug!("{err}; using min {min}");
        min
    })
}

/// Knob offset that represents `value`.
///
/// An empty range (`max == min`) places the knob at the start of the track.
#[must_use]
pub fn value_to_position(
    value: f32,
    track_width: f32,
    knob_width: f32,
    min: f32,
    max: f32,
) -> f32 {
    let travel = travel(track_width, knob_width);
    if min.is_nan() || max.is_nan() || max <= min {
        return 0.0;
    }
    let span = max - min;
    let fraction = if span.is_finite() {
        (value - min) / span
    } else {
        (value * 0.5 - min * 0.5) / (max * 0.5 - min * 0.5)
    };
    let pos = fraction * travel;
    if pos.is_nan() {
        return 0.0;
    }
    pos.clamp(0.0, travel)
}

/// Per-gesture pointer state: the knob offset from the latest sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInteraction {
    slider_pos: f32,
}

impl PointerInteraction {
    /// Create with the knob at the start of the track.
    #[must_use]
    pub const fn new() -> Self {
        Self { slider_pos: 0.0 }
    }

    /// Turn a pointer sample into a value, remembering the knob offset.
    pub fn sample(
        &mut self,
        pointer_x: f32,
        track_width: f32,
        knob_width: f32,
        min: f32,
        max: f32,
    ) -> f32 {
        self.slider_pos = compute_slider_pos(pointer_x, track_width, knob_width);
        position_to_value(self.slider_pos, track_width, knob_width, min, max)
    }

    /// Knob offset from the latest sample.
    #[must_use]
    pub const fn slider_pos(&self) -> f32 {
        self.slider_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compute_slider_pos_centres_knob() {
        assert_eq!(compute_slider_pos(55.0, 110.0, 10.0), 50.0);
    }

    #[test]
    fn test_compute_slider_pos_clamps_low() {
        assert_eq!(compute_slider_pos(-40.0, 110.0, 10.0), 0.0);
        assert_eq!(compute_slider_pos(2.0, 110.0, 10.0), 0.0);
    }

    #[test]
    fn test_compute_slider_pos_clamps_high() {
        assert_eq!(compute_slider_pos(500.0, 110.0, 10.0), 100.0);
        assert_eq!(compute_slider_pos(f32::INFINITY, 110.0, 10.0), 100.0);
    }

    #[test]
    fn test_compute_slider_pos_knob_wider_than_track() {
        assert_eq!(compute_slider_pos(30.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_compute_slider_pos_nan_pointer() {
        assert_eq!(compute_slider_pos(f32::NAN, 110.0, 10.0), 0.0);
    }

    #[test]
    fn test_position_to_value_round_trip_example() {
        let pos = compute_slider_pos(55.0, 110.0, 10.0);
        assert_eq!(position_to_value(pos, 110.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_position_to_value_offset_range() {
        assert_eq!(position_to_value(25.0, 110.0, 10.0, -50.0, 50.0), -25.0);
    }

    #[test]
    fn test_try_position_to_value_degenerate() {
        let err = try_position_to_value(0.0, 10.0, 10.0, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            WidgetError::DegenerateGeometry {
                track_width: 10.0,
                knob_width: 10.0
            }
        );
    }

    #[test]
    fn test_position_to_value_degenerate_returns_min() {
        assert_eq!(position_to_value(0.0, 10.0, 10.0, 3.0, 7.0), 3.0);
        assert_eq!(position_to_value(0.0, 5.0, 10.0, 3.0, 7.0), 3.0);
    }

    #[test]
    fn test_value_to_position() {
        assert_eq!(value_to_position(50.0, 110.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(value_to_position(0.0, 110.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(value_to_position(100.0, 110.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_value_to_position_uses_min_offset() {
        assert_eq!(value_to_position(15.0, 110.0, 10.0, 10.0, 20.0), 50.0);
    }

    #[test]
    fn test_value_to_position_empty_range() {
        assert_eq!(value_to_position(5.0, 110.0, 10.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_pointer_interaction_caches_pos() {
        let mut interaction = PointerInteraction::new();
        let value = interaction.sample(55.0, 110.0, 10.0, 0.0, 100.0);
        assert_eq!(value, 50.0);
        assert_eq!(interaction.slider_pos(), 50.0);

        // any later sample stands on its own
        let value = interaction.sample(5.0, 110.0, 10.0, 0.0, 100.0);
        assert_eq!(value, 0.0);
        assert_eq!(interaction.slider_pos(), 0.0);
    }

    #[test]
    fn test_position_to_value_full_float_range() {
        let (min, max) = (-f32::MAX, f32::MAX);
        assert_eq!(position_to_value(0.0, 110.0, 10.0, min, max), min);
        assert_eq!(position_to_value(50.0, 110.0, 10.0, min, max), 0.0);
        assert_eq!(position_to_value(100.0, 110.0, 10.0, min, max), max);
    }

    #[test]
    fn test_value_to_position_full_float_range() {
        let (min, max) = (-f32::MAX, f32::MAX);
        assert_eq!(value_to_position(min, 110.0, 10.0, min, max), 0.0);
        assert_eq!(value_to_position(0.0, 110.0, 10.0, min, max), 50.0);
        assert_eq!(value_to_position(max, 110.0, 10.0, min, max), 100.0);
    }

    proptest! {
        #[test]
        fn prop_extreme_bounds_give_finite_values(
            min in -f32::MAX..0.0f32,
            max in 0.0f32..f32::MAX,
            x in -1.0e4f32..1.0e4,
        ) {
            let pos = compute_slider_pos(x, 210.0, 10.0);
            let value = position_to_value(pos, 210.0, 10.0, min, max);
            prop_assert!(value.is_finite(), "{} for [{}, {}]", value, min, max);
            let back = value_to_position(value, 210.0, 10.0, min, max);
            prop_assert!((0.0..=200.0).contains(&back));
        }

        #[test]
        fn prop_slider_pos_within_travel(
            x in -1.0e6f32..1.0e6,
            track in 0.0f32..2000.0,
            knob in 0.0f32..200.0,
        ) {
            let pos = compute_slider_pos(x, track, knob);
            prop_assert!(pos >= 0.0);
            prop_assert!(pos <= travel(track, knob));
        }

        #[test]
        fn prop_clamping_idempotent(
            x in -1.0e6f32..1.0e6,
            track in 0.0f32..2000.0,
            knob in 0.0f32..200.0,
        ) {
            let once = compute_slider_pos(x, track, knob);
            let clamped = once.clamp(0.0, travel(track, knob));
            prop_assert_eq!(clamped, once);
        }

        #[test]
        fn prop_value_monotonic_in_pointer(
            x1 in -500.0f32..2500.0,
            dx in 0.0f32..500.0,
            track in 1.0f32..2000.0,
            knob in 0.0f32..200.0,
            min in -100.0f32..100.0,
            span in 0.0f32..1000.0,
        ) {
            let max = min + span;
            let x2 = x1 + dx;
            let v1 = position_to_value(compute_slider_pos(x1, track, knob), track, knob, min, max);
            let v2 = position_to_value(compute_slider_pos(x2, track, knob), track, knob, min, max);
            prop_assert!(v1 <= v2, "{} > {} for x {} -> {}", v1, v2, x1, x2);
        }

        #[test]
        fn prop_degenerate_always_min(
            x in -1.0e6f32..1.0e6,
            width in 0.0f32..500.0,
            min in -100.0f32..100.0,
        ) {
            let pos = compute_slider_pos(x, width, width);
            prop_assert_eq!(position_to_value(pos, width, width, min, min + 10.0), min);
        }
    }
}
