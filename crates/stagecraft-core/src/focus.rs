//! Pointer focus: which widget receives the rest of a gesture.
//!
//! Widgets do not reach into their parent to find out who holds focus.
//! The container hands each widget a [`SharedFocus`] at construction and the
//! widget asks it directly.

use crate::event::PointerId;
use crate::widget::WidgetId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Grants and revokes per-pointer focus.
pub trait FocusManager {
    /// Give `widget` focus for `pointer`, replacing any previous holder.
    fn request_focus(&mut self, widget: WidgetId, pointer: PointerId);

    /// Clear focus for `pointer`.
    fn release_focus(&mut self, pointer: PointerId);

    /// The widget currently holding focus for `pointer`.
    fn focused(&self, pointer: PointerId) -> Option<WidgetId>;

    /// Whether `widget` holds focus for `pointer`.
    fn has_focus(&self, widget: WidgetId, pointer: PointerId) -> bool {
        self.focused(pointer) == Some(widget)
    }
}

/// Focus manager handle shared between a container and its widgets.
///
/// Everything runs on one event-processing thread, so `Rc<RefCell<_>>` is
/// enough.
pub type SharedFocus = Rc<RefCell<dyn FocusManager>>;

/// Focus manager with one slot per pointer.
#[derive(Debug, Default)]
pub struct FocusTable {
    slots: HashMap<PointerId, WidgetId>,
}

impl FocusTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table behind a shared handle.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Drop focus for every pointer, e.g. when the stage loses the window.
    pub fn clear_all(&mut self) {
        if !self.slots.is_empty() {
            log::debug!("focus cleared for {} pointer(s)", self.slots.len());
        }
        self.slots.clear();
    }

    /// Number of pointers that currently have a focused widget.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no pointer has a focused widget.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FocusManager for FocusTable {
    fn request_focus(&mut self, widget: WidgetId, pointer: PointerId) {
        log::debug!("focus granted to {widget:?} for {pointer:?}");
        self.slots.insert(pointer, widget);
    }

    fn release_focus(&mut self, pointer: PointerId) {
        if let Some(widget) = self.slots.remove(&pointer) {
            log::debug!("focus released from {widget:?} for {pointer:?}");
        }
    }

    fn focused(&self, pointer: PointerId) -> Option<WidgetId> {
        self.slots.get(&pointer).copied()
    }
}
