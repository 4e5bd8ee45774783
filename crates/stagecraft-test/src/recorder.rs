//! Listener that records notifications.

use std::cell::RefCell;
use std::rc::Rc;

/// Records every value a widget reports.
///
/// Clones share the same log, so one clone can be handed to the widget as a
/// listener while the test keeps another for assertions.
#[derive(Debug, Clone, Default)]
pub struct ValueRecorder {
    values: Rc<RefCell<Vec<f32>>>,
}

impl ValueRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener closure feeding this recorder.
    pub fn listener<W: ?Sized + 'static>(&self) -> impl FnMut(&W, f32) + 'static {
        let values = Rc::clone(&self.values);
        move |_: &W, value: f32| values.borrow_mut().push(value)
    }

    /// All recorded values, oldest first.
    #[must_use]
    pub fn values(&self) -> Vec<f32> {
        self.values.borrow().clone()
    }

    /// Number of notifications.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.borrow().len()
    }

    /// Most recent value.
    #[must_use]
    pub fn last(&self) -> Option<f32> {
        self.values.borrow().last().copied()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }

    /// Assert the number of notifications.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, expected: usize) -> &Self {
        let actual = self.count();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} notification(s) but got {actual}: {:?}",
            self.values()
        );
        self
    }

    /// Assert the recorded values exactly.
    ///
    /// # Panics
    ///
    /// Panics if the values differ.
    pub fn assert_values(&self, expected: &[f32]) -> &Self {
        let actual = self.values();
        assert_eq!(actual, expected, "Unexpected notifications");
        self
    }
}
