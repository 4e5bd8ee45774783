//! Widget identity and the capability traits widgets implement.
//!
//! Instead of a base class with overridable hooks, a widget implements three
//! small traits:
//!
//! 1. [`Measurable`]: report a preferred size and accept the bounds its
//!    container assigns
//! 2. [`Drawable`]: issue draw calls into a [`Canvas`]
//! 3. [`PointerTarget`]: hit-test and consume pointer samples
//!
//! [`Widget`] bundles the three with an identity.
//!
//! # Examples
//!
//! ```
//! use stagecraft_core::WidgetId;
//!
//! let a = WidgetId::next();
//! let b = WidgetId::next();
//! assert_ne!(a, b);
//! ```

use crate::canvas::Canvas;
use crate::constraints::Constraints;
use crate::event::PointerEvent;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-unique ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Size negotiation with the owning container.
pub trait Measurable {
    /// Preferred width.
    fn preferred_width(&self) -> f32;

    /// Preferred height, brought up to date if the layout is invalid.
    fn preferred_height(&self) -> f32;

    /// Preferred size fitted into `constraints`.
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.preferred_width(), self.preferred_height()))
    }

    /// Accept the bounds assigned by the container.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Mark cached geometry stale.
    fn invalidate(&mut self);
}

/// Paint step.
pub trait Drawable {
    /// Issue draw calls for the current state. Never mutates the model.
    fn paint(&self, canvas: &mut dyn Canvas);
}

/// Pointer input.
pub trait PointerTarget {
    /// Whether `local` (widget coordinates) falls inside the widget.
    fn hit(&self, local: Point) -> bool;

    /// Handle a pointer sample. Returns `true` if the sample was consumed.
    fn pointer_event(&mut self, event: &PointerEvent) -> bool;
}

/// A complete widget: measurable, drawable, and a pointer target.
pub trait Widget: Measurable + Drawable + PointerTarget {
    /// Identity used as the focus key.
    fn id(&self) -> WidgetId;

    /// Bounds from the most recent [`Measurable::layout`].
    fn bounds(&self) -> Rect;
}
