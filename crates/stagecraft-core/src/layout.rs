//! Lazily recomputed layout state.
//!
//! A widget's preferred height usually depends on style metrics that can
//! change at any time (a new skin, a new knob texture). Rather than
//! recomputing on every change, the widget marks its layout invalid and the
//! next reader that needs geometry calls [`LayoutState::ensure_layout`].
//!
//! The cached height and the flag live in [`Cell`]s so the paint step, which
//! only has `&self`, can still bring the cache up to date.

use crate::geometry::Size;
use std::cell::Cell;

/// Preferred and actual size of a widget plus an invalidation flag.
#[derive(Debug, Clone)]
pub struct LayoutState {
    preferred_width: f32,
    preferred_height: Cell<f32>,
    actual: Size,
    invalid: Cell<bool>,
}

impl LayoutState {
    /// Create a layout with a fixed preferred width.
    ///
    /// The preferred height is unknown until the first
    /// [`ensure_layout`](Self::ensure_layout), so the state starts invalid.
    #[must_use]
    pub const fn new(preferred_width: f32) -> Self {
        Self {
            preferred_width,
            preferred_height: Cell::new(0.0),
            actual: Size::ZERO,
            invalid: Cell::new(true),
        }
    }

    /// Mark the cached geometry stale. Nothing is recomputed here.
    pub fn mark_invalid(&mut self) {
        self.invalid.set(true);
    }

    /// Whether the cached preferred height is stale.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid.get()
    }

    /// Run `recompute` if the layout is invalid, cache its result as the
    /// preferred height, and clear the flag.
    ///
    /// Returns `true` if `recompute` ran.
    pub fn ensure_layout(&self, recompute: impl FnOnce() -> f32) -> bool {
        if !self.invalid.get() {
            return false;
        }
        let height = recompute();
        log::trace!("layout recomputed: preferred height {height}");
        self.preferred_height.set(height);
        self.invalid.set(false);
        true
    }

    /// Preferred width.
    #[must_use]
    pub const fn preferred_width(&self) -> f32 {
        self.preferred_width
    }

    /// Cached preferred height. Call [`ensure_layout`](Self::ensure_layout)
    /// first; the value is stale while [`is_invalid`](Self::is_invalid).
    #[must_use]
    pub fn preferred_height(&self) -> f32 {
        self.preferred_height.get()
    }

    /// Change the preferred width.
    pub fn set_preferred_width(&mut self, width: f32) {
        self.preferred_width = width;
    }

    /// Size assigned by the owning container.
    #[must_use]
    pub const fn actual_size(&self) -> Size {
        self.actual
    }

    /// Record the size assigned by the owning container.
    pub fn set_actual_size(&mut self, size: Size) {
        self.actual = size;
    }
}
