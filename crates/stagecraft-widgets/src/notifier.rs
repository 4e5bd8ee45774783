//! Single-slot value-change listener.

use std::fmt;

/// Receives value changes from a widget of type `W`.
///
/// Any `FnMut(&W, f32)` closure is a listener.
pub trait ValueChangedListener<W: ?Sized> {
    /// Called after the widget's value changed.
    fn changed(&mut self, widget: &W, value: f32);
}

impl<W: ?Sized, F> ValueChangedListener<W> for F
where
    F: FnMut(&W, f32),
{
    fn changed(&mut self, widget: &W, value: f32) {
        self(widget, value);
    }
}

/// Holds at most one listener. Setting a new one replaces the old one.
pub struct ChangeNotifier<W: ?Sized> {
    listener: Option<Box<dyn ValueChangedListener<W>>>,
}

impl<W: ?Sized> ChangeNotifier<W> {
    /// Create an empty notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self { listener: None }
    }

    /// Install `listener`, dropping any previous one.
    pub fn set_listener(&mut self, listener: impl ValueChangedListener<W> + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is installed.
    #[must_use]
    pub const fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Forward a change to the listener, if any.
    pub fn notify(&mut self, widget: &W, value: f32) {
        if let Some(listener) = self.listener.as_mut() {
            listener.changed(widget, value);
        }
    }
}

impl<W: ?Sized> Default for ChangeNotifier<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ?Sized> fmt::Debug for ChangeNotifier<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
