//! Gesture-level test harness.

use stagecraft_core::{
    FocusManager, FocusTable, Point, PointerEvent, PointerId, RecordingCanvas, Rect,
    SharedFocus, Widget,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Drives a single widget the way a stage would.
///
/// Positions passed to the gesture methods are in stage coordinates; the
/// harness converts them into the widget's local space using its bounds.
pub struct Harness<W: Widget> {
    widget: W,
    focus: Rc<RefCell<FocusTable>>,
    pointer: PointerId,
    event_queue: VecDeque<PointerEvent>,
    handled: Vec<bool>,
}

impl<W: Widget> Harness<W> {
    /// Build the widget with the harness's focus table.
    pub fn new(build: impl FnOnce(SharedFocus) -> W) -> Self {
        let focus = FocusTable::shared();
        let shared: SharedFocus = focus.clone();
        let widget = build(shared);
        Self {
            widget,
            focus,
            pointer: PointerId::PRIMARY,
            event_queue: VecDeque::new(),
            handled: Vec::new(),
        }
    }

    /// Lay the widget out at `bounds`.
    pub fn place(&mut self, bounds: Rect) -> &mut Self {
        self.widget.layout(bounds);
        self
    }

    /// Use `pointer` for subsequent gestures.
    pub fn with_pointer(&mut self, pointer: PointerId) -> &mut Self {
        self.pointer = pointer;
        self
    }

    // === Event Simulation ===

    /// Press at a stage position.
    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        let event = PointerEvent::down(self.pointer, self.to_local(x, y));
        self.dispatch(event)
    }

    /// Move the pressed pointer to a stage position.
    pub fn drag_to(&mut self, x: f32, y: f32) -> &mut Self {
        let event = PointerEvent::moved(self.pointer, self.to_local(x, y));
        self.dispatch(event)
    }

    /// Release at a stage position.
    pub fn release(&mut self, x: f32, y: f32) -> &mut Self {
        let event = PointerEvent::up(self.pointer, self.to_local(x, y));
        self.dispatch(event)
    }

    /// Press at `from`, move through `path`, release at the last point of
    /// `path` (or at `from` if `path` is empty).
    pub fn drag(&mut self, from: Point, path: &[Point]) -> &mut Self {
        let end = path.last().copied().unwrap_or(from);
        self.event_queue
            .push_back(PointerEvent::down(self.pointer, self.to_local(from.x, from.y)));
        for p in path {
            self.event_queue
                .push_back(PointerEvent::moved(self.pointer, self.to_local(p.x, p.y)));
        }
        self.event_queue
            .push_back(PointerEvent::up(self.pointer, self.to_local(end.x, end.y)));
        self.process_events();
        self
    }

    /// Send an already-built event (local coordinates) to the widget.
    pub fn dispatch(&mut self, event: PointerEvent) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Take focus away from every pointer, as a container would when it
    /// cancels input.
    pub fn clear_focus(&mut self) -> &mut Self {
        self.focus.borrow_mut().clear_all();
        self
    }

    fn to_local(&self, x: f32, y: f32) -> Point {
        self.widget.bounds().to_local(Point::new(x, y))
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let consumed = self.widget.pointer_event(&event);
            self.handled.push(consumed);
        }
    }

    // === Queries ===

    /// The widget under test.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget under test.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Whether each dispatched event was consumed, in dispatch order.
    #[must_use]
    pub fn handled(&self) -> &[bool] {
        &self.handled
    }

    /// Whether the widget holds focus for the current pointer.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focus.borrow().has_focus(self.widget.id(), self.pointer)
    }

    /// Paint the widget into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that the widget holds focus for the current pointer.
    ///
    /// # Panics
    ///
    /// Panics if it does not.
    pub fn assert_focused(&self) -> &Self {
        assert!(
            self.is_focused(),
            "Expected widget {:?} to hold focus for {:?}",
            self.widget.id(),
            self.pointer
        );
        self
    }

    /// Assert that the widget does not hold focus for the current pointer.
    ///
    /// # Panics
    ///
    /// Panics if it does.
    pub fn assert_not_focused(&self) -> &Self {
        assert!(
            !self.is_focused(),
            "Expected widget {:?} not to hold focus for {:?}",
            self.widget.id(),
            self.pointer
        );
        self
    }
}
