//! Slider widget for value selection.
//!
//! The slider composes a [`RangeModel`], a [`LayoutState`], pointer math from
//! [`crate::pointer`] and a single-slot [`ChangeNotifier`].
//!
//! # Gesture
//!
//! ```text
//! Idle --down inside--> Dragging --move--> Dragging
//!                          |
//!                          +--up (holding focus)--> Idle
//! ```
//!
//! Only the primary pointer (and, for mice, the left button) is accepted.
//! A press inside the bounds claims focus for that pointer from the injected
//! [`FocusManager`](stagecraft_core::FocusManager). If the container takes
//! focus away mid-drag, the next sample finds the slider no longer focused
//! and the gesture is dropped without a notification.
//!
//! # Examples
//!
//! ```
//! use stagecraft_core::{FocusTable, Point, PointerEvent, PointerId, PointerTarget, SharedFocus};
//! use stagecraft_widgets::{RangeModel, Slider, SliderStyle};
//!
//! let focus: SharedFocus = FocusTable::shared();
//! let range = RangeModel::new(0.0, 100.0, 1.0).expect("valid range");
//! let mut slider = Slider::new(110.0, range, SliderStyle::new(10.0, 10.0), focus)
//!     .expect("valid slider");
//!
//! slider.pointer_event(&PointerEvent::down(PointerId::PRIMARY, Point::new(55.0, 5.0)));
//! assert_eq!(slider.value(), 50.0);
//! ```

use crate::notifier::{ChangeNotifier, ValueChangedListener};
use crate::pointer::{value_to_position, PointerInteraction};
use crate::range::RangeModel;
use crate::style::SliderStyle;
use stagecraft_core::{
    Canvas, Drawable, LayoutResult, LayoutState, Measurable, Point, PointerEvent, PointerId,
    PointerPhase, PointerTarget, Rect, SharedFocus, Size, Widget, WidgetError, WidgetId,
    WidgetResult,
};
use std::fmt;

/// Outline width drawn around the knob while dragging.
const PRESSED_OUTLINE_WIDTH: f32 = 1.0;

/// Where the slider is in a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Knob follows `pointer`
    Dragging {
        /// Pointer that started the drag
        pointer: PointerId,
    },
}

/// Horizontal slider selecting a value from a range.
pub struct Slider {
    id: WidgetId,
    range: RangeModel,
    layout: LayoutState,
    style: SliderStyle,
    /// Height set through [`Slider::set_preferred_size`]; overrides the knob height
    pinned_height: Option<f32>,
    origin: Point,
    interaction: PointerInteraction,
    drag: DragState,
    notifier: ChangeNotifier<Self>,
    focus: SharedFocus,
}

impl Slider {
    /// Create a slider.
    ///
    /// The preferred height comes from the style's knob height and the
    /// initial actual size equals the preferred size. The range's initial
    /// value is taken as-is; no listener is notified.
    pub fn new(
        preferred_width: f32,
        range: RangeModel,
        style: SliderStyle,
        focus: SharedFocus,
    ) -> WidgetResult<Self> {
        Self::build(preferred_width, None, range, style, focus)
    }

    /// Create a slider whose preferred height is pinned to `preferred_height`
    /// instead of following the knob. The initial actual size is
    /// `preferred_width` x `preferred_height`.
    pub fn with_preferred_size(
        preferred_width: f32,
        preferred_height: f32,
        range: RangeModel,
        style: SliderStyle,
        focus: SharedFocus,
    ) -> WidgetResult<Self> {
        check_dimension("preferred height", preferred_height)?;
        Self::build(preferred_width, Some(preferred_height), range, style, focus)
    }

    fn build(
        preferred_width: f32,
        pinned_height: Option<f32>,
        range: RangeModel,
        style: SliderStyle,
        focus: SharedFocus,
    ) -> WidgetResult<Self> {
        check_dimension("preferred width", preferred_width)?;
        style.validate()?;

        let mut slider = Self {
            id: WidgetId::next(),
            range,
            layout: LayoutState::new(preferred_width),
            style,
            pinned_height,
            origin: Point::ORIGIN,
            interaction: PointerInteraction::new(),
            drag: DragState::Idle,
            notifier: ChangeNotifier::new(),
            focus,
        };
        slider.refresh_layout();
        let size = Size::new(preferred_width, slider.layout.preferred_height());
        slider.layout.set_actual_size(size);
        Ok(slider)
    }

    /// Install the value-changed listener, replacing any previous one.
    #[must_use]
    pub fn with_listener(mut self, listener: impl ValueChangedListener<Self> + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Install the value-changed listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl ValueChangedListener<Self> + 'static) {
        self.notifier.set_listener(listener);
    }

    /// Remove the value-changed listener.
    pub fn clear_listener(&mut self) {
        self.notifier.clear_listener();
    }

    /// Current value, quantized to the step.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.range.quantized_value()
    }

    /// Current value before quantization.
    #[must_use]
    pub const fn raw_value(&self) -> f32 {
        self.range.raw_value()
    }

    /// Set the value and notify the listener.
    ///
    /// Values outside `[min, max]` are rejected and nothing changes.
    pub fn set_value(&mut self, value: f32) -> WidgetResult<()> {
        self.range.set_value(value)?;
        self.notify();
        Ok(())
    }

    /// The underlying range.
    #[must_use]
    pub const fn range(&self) -> &RangeModel {
        &self.range
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Replace the style. Layout is recomputed lazily.
    pub fn set_style(&mut self, style: SliderStyle) -> WidgetResult<()> {
        style.validate()?;
        self.style = style;
        self.layout.mark_invalid();
        Ok(())
    }

    /// Pin the preferred size. The height no longer follows the knob.
    pub fn set_preferred_size(&mut self, width: f32, height: f32) -> WidgetResult<()> {
        check_dimension("preferred width", width)?;
        check_dimension("preferred height", height)?;
        self.layout.set_preferred_width(width);
        self.pinned_height = Some(height);
        self.layout.mark_invalid();
        Ok(())
    }

    /// Let the preferred height follow the knob height again.
    pub fn clear_preferred_height(&mut self) {
        self.pinned_height = None;
        self.layout.mark_invalid();
    }

    /// Whether cached layout is stale.
    #[must_use]
    pub fn is_layout_invalid(&self) -> bool {
        self.layout.is_invalid()
    }

    /// Gesture state.
    ///
    /// A drag whose pointer focus was taken away by the container reads as
    /// [`DragState::Idle`] right away, before any further pointer event.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        match self.drag {
            DragState::Dragging { pointer } if self.focus.borrow().has_focus(self.id, pointer) => {
                self.drag
            }
            _ => DragState::Idle,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag_state(), DragState::Dragging { .. })
    }

    /// Knob offset from the latest pointer sample.
    #[must_use]
    pub const fn slider_pos(&self) -> f32 {
        self.interaction.slider_pos()
    }

    /// Knob offset that represents the current value in the current layout.
    #[must_use]
    pub fn knob_offset(&self) -> f32 {
        self.refresh_layout();
        value_to_position(
            self.range.raw_value(),
            self.layout.actual_size().width,
            self.style.knob_width,
            self.range.min(),
            self.range.max(),
        )
    }

    /// Abandon the current drag without notifying, releasing focus if held.
    pub fn cancel_gesture(&mut self) {
        if let DragState::Dragging { pointer } = self.drag {
            let held = self.focus.borrow().has_focus(self.id, pointer);
            if held {
                self.focus.borrow_mut().release_focus(pointer);
            }
            log::debug!("slider {:?}: drag cancelled", self.id);
        }
        self.drag = DragState::Idle;
    }

    fn refresh_layout(&self) {
        let knob_height = self.style.knob_height;
        let pinned = self.pinned_height;
        self.layout.ensure_layout(|| pinned.unwrap_or(knob_height));
    }

    /// Whether the drag for `pointer` is still live. A drag whose focus was
    /// taken away by the container is dropped here.
    fn holds_gesture(&mut self, pointer: PointerId) -> bool {
        match self.drag {
            DragState::Dragging { pointer: p } if p == pointer => {
                if self.focus.borrow().has_focus(self.id, pointer) {
                    true
                } else {
                    log::debug!("slider {:?}: focus lost, drag dropped", self.id);
                    self.drag = DragState::Idle;
                    false
                }
            }
            _ => false,
        }
    }

    fn apply_pointer(&mut self, pointer_x: f32) {
        self.refresh_layout();
        let value = self.interaction.sample(
            pointer_x,
            self.layout.actual_size().width,
            self.style.knob_width,
            self.range.min(),
            self.range.max(),
        );
        self.range.assign_clamped(value);
        log::trace!(
            "slider {:?}: pointer x {pointer_x} -> pos {} value {}",
            self.id,
            self.interaction.slider_pos(),
            self.range.raw_value()
        );
        self.notify();
    }

    fn notify(&mut self) {
        let value = self.range.quantized_value();
        // The listener only gets `&Self`, so it cannot touch the slot while
        // it is moved out.
        let mut notifier = std::mem::take(&mut self.notifier);
        notifier.notify(self, value);
        self.notifier = notifier;
    }
}

fn check_dimension(name: &str, value: f32) -> WidgetResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WidgetError::invalid(format!("{name} ({value}) must be >= 0")))
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("id", &self.id)
            .field("range", &self.range)
            .field("layout", &self.layout)
            .field("style", &self.style)
            .field("pinned_height", &self.pinned_height)
            .field("origin", &self.origin)
            .field("interaction", &self.interaction)
            .field("drag", &self.drag)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl Measurable for Slider {
    fn preferred_width(&self) -> f32 {
        self.layout.preferred_width()
    }

    fn preferred_height(&self) -> f32 {
        self.refresh_layout();
        self.layout.preferred_height()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.refresh_layout();
        self.origin = bounds.origin();
        self.layout.set_actual_size(bounds.size());
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn invalidate(&mut self) {
        self.layout.mark_invalid();
    }
}

impl Drawable for Slider {
    fn paint(&self, canvas: &mut dyn Canvas) {
        let offset = self.knob_offset();
        let size = self.layout.actual_size();

        canvas.fill_rect(Rect::from_origin_size(self.origin, size), self.style.track_color);

        let knob = Rect::new(
            self.origin.x + offset,
            self.origin.y,
            self.style.knob_width,
            self.style.knob_height,
        );
        canvas.fill_rect(knob, self.style.knob_color);

        if self.is_dragging() {
            canvas.stroke_rect(knob, self.style.pressed_color, PRESSED_OUTLINE_WIDTH);
        }
    }
}

impl PointerTarget for Slider {
    fn hit(&self, local: Point) -> bool {
        self.refresh_layout();
        self.layout.actual_size().contains_local(local)
    }

    fn pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !event.is_primary() {
            return false;
        }

        match event.phase {
            PointerPhase::Down => {
                if !self.hit(event.position) {
                    return false;
                }
                self.focus.borrow_mut().request_focus(self.id, event.pointer);
                self.drag = DragState::Dragging {
                    pointer: event.pointer,
                };
                log::debug!("slider {:?}: drag started", self.id);
                self.apply_pointer(event.position.x);
                true
            }
            PointerPhase::Move => {
                if !self.holds_gesture(event.pointer) {
                    return false;
                }
                self.apply_pointer(event.position.x);
                true
            }
            PointerPhase::Up => {
                if !self.holds_gesture(event.pointer) {
                    return false;
                }
                self.apply_pointer(event.position.x);
                self.drag = DragState::Idle;
                self.focus.borrow_mut().release_focus(event.pointer);
                log::debug!("slider {:?}: drag ended", self.id);
                true
            }
        }
    }
}

impl Widget for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.layout.actual_size())
    }
}
