//! Integration tests for the Stagecraft slider.

use proptest::prelude::*;
use stagecraft::widgets::{DragState, RangeModel, Slider, SliderConfig, SliderStyle};
use stagecraft::{
    Constraints, DrawCommand, FocusManager, FocusTable, Measurable, Point, PointerEvent, PointerId,
    PointerTarget, Rect, Size, Widget, WidgetError,
};
use stagecraft_test::{Harness, ValueRecorder};

fn percent(recorder: &ValueRecorder) -> Harness<Slider> {
    let listener = recorder.listener::<Slider>();
    Harness::new(|focus| {
        let range = RangeModel::new(0.0, 100.0, 1.0).expect("valid range");
        Slider::new(110.0, range, SliderStyle::new(10.0, 10.0), focus)
            .expect("valid slider")
            .with_listener(listener)
    })
}

#[test]
fn test_reference_gesture() {
    // min=0 max=100 step=1, track 110, knob 10: x=55 -> pos 50 -> value 50
    let recorder = ValueRecorder::new();
    let mut harness = percent(&recorder);

    harness.press(55.0, 5.0);
    assert_eq!(harness.widget().slider_pos(), 50.0);
    assert_eq!(harness.widget().value(), 50.0);
    recorder.assert_values(&[50.0]);
}

#[test]
fn test_full_drag_cycle() {
    let recorder = ValueRecorder::new();
    let mut harness = percent(&recorder);

    harness.press(55.0, 5.0).assert_focused();
    assert_eq!(
        harness.widget().drag_state(),
        DragState::Dragging {
            pointer: PointerId::PRIMARY
        }
    );

    harness.drag_to(30.0, 5.0).drag_to(90.0, 5.0);
    harness.release(60.0, 5.0).assert_not_focused();

    recorder.assert_values(&[50.0, 25.0, 85.0, 55.0]);
    assert_eq!(harness.widget().drag_state(), DragState::Idle);
}

#[test]
fn test_set_value_and_drag_interleave() {
    let recorder = ValueRecorder::new();
    let mut harness = percent(&recorder);

    harness.widget_mut().set_value(12.7).expect("in range");
    assert!(matches!(
        harness.widget_mut().set_value(-1.0),
        Err(WidgetError::InvalidArgument(_))
    ));
    harness.press(105.0, 5.0).release(105.0, 5.0);

    recorder.assert_values(&[12.0, 100.0, 100.0]);
}

#[test]
fn test_container_cancels_drag() {
    let recorder = ValueRecorder::new();
    let mut harness = percent(&recorder);

    harness.press(55.0, 5.0).clear_focus();
    harness.drag_to(10.0, 5.0).release(10.0, 5.0);

    assert_eq!(harness.handled(), &[true, false, false]);
    assert_eq!(harness.widget().value(), 50.0);
    recorder.assert_count(1);
}

#[test]
fn test_two_sliders_share_focus_table() {
    let table = FocusTable::shared();
    let range = RangeModel::new(0.0, 1.0, 0.0).expect("valid range");
    let mut a = Slider::new(110.0, range, SliderStyle::new(10.0, 10.0), table.clone())
        .expect("valid slider");
    let mut b = Slider::new(110.0, range, SliderStyle::new(10.0, 10.0), table.clone())
        .expect("valid slider");

    assert!(a.pointer_event(&PointerEvent::down(PointerId::PRIMARY, Point::new(55.0, 5.0))));
    // b never saw the press, so the move is not its gesture
    assert!(!b.pointer_event(&PointerEvent::moved(PointerId::PRIMARY, Point::new(80.0, 5.0))));
    assert_eq!(table.borrow().focused(PointerId::PRIMARY), Some(a.id()));

    // b takes the pointer; a's drag is over
    assert!(b.pointer_event(&PointerEvent::down(PointerId::PRIMARY, Point::new(5.0, 5.0))));
    assert!(!a.pointer_event(&PointerEvent::moved(PointerId::PRIMARY, Point::new(80.0, 5.0))));
    assert!(!a.is_dragging());
    assert_eq!(table.borrow().focused(PointerId::PRIMARY), Some(b.id()));
}

#[test]
fn test_layout_then_paint() {
    let recorder = ValueRecorder::new();
    let mut harness = percent(&recorder);

    let size = harness
        .widget()
        .measure(Constraints::loose(Size::new(400.0, 100.0)));
    assert_eq!(size, Size::new(110.0, 10.0));

    harness.place(Rect::new(40.0, 60.0, 210.0, 10.0));
    harness.press(145.0, 65.0);
    assert_eq!(harness.widget().value(), 50.0);

    let canvas = harness.paint();
    let bounds: Vec<Rect> = canvas.commands().iter().map(DrawCommand::bounds).collect();
    assert_eq!(bounds[0], Rect::new(40.0, 60.0, 210.0, 10.0));
    assert_eq!(bounds[1], Rect::new(140.0, 60.0, 10.0, 10.0));
    // pressed outline while the pointer is down
    assert_eq!(bounds.len(), 3);
}

#[test]
fn test_config_driven_slider() {
    let yaml = "min: -1\nmax: 1\nstep: 0.5\npreferred_width: 60\nstyle:\n  knob_width: 20\n  knob_height: 8\n";
    let config = SliderConfig::from_yaml(yaml).expect("valid yaml");
    let recorder = ValueRecorder::new();
    let listener = recorder.listener::<Slider>();
    let mut harness = Harness::new(|focus| {
        config
            .build(focus)
            .expect("valid config")
            .with_listener(listener)
    });

    assert_eq!(harness.widget().preferred_height(), 8.0);
    // travel 40; x=30 -> pos 20 -> value 0
    harness.press(30.0, 4.0);
    recorder.assert_values(&[0.0]);
    // x=45 -> pos 35 -> 0.75 -> quantized 0.5
    harness.drag_to(45.0, 4.0);
    assert_eq!(harness.widget().raw_value(), 0.75);
    recorder.assert_values(&[0.0, 0.5]);
}

#[test]
fn test_zero_travel_slider_is_safe() {
    let recorder = ValueRecorder::new();
    let listener = recorder.listener::<Slider>();
    let mut harness = Harness::new(|focus| {
        let range = RangeModel::with_value(2.0, 4.0, 0.0, 3.0).expect("valid range");
        Slider::new(10.0, range, SliderStyle::new(10.0, 10.0), focus)
            .expect("valid slider")
            .with_listener(listener)
    });

    harness.press(5.0, 5.0).drag_to(9.0, 5.0).release(9.0, 5.0);
    recorder.assert_values(&[2.0, 2.0, 2.0]);
    assert_eq!(harness.paint().commands()[1].bounds().x, 0.0);
}

proptest! {
    #[test]
    fn prop_press_outside_never_drags(
        x in prop_oneof![-500.0f32..0.0, 110.0f32..500.0],
        y in -50.0f32..50.0,
        moves in proptest::collection::vec(-500.0f32..500.0, 0..5),
    ) {
        let recorder = ValueRecorder::new();
        let mut harness = percent(&recorder);
        harness.press(x, y);
        for m in moves {
            harness.drag_to(m, 5.0);
        }
        harness.release(55.0, 5.0);

        prop_assert!(harness.handled().iter().all(|&h| !h));
        prop_assert_eq!(recorder.count(), 0);
        prop_assert!(!harness.widget().is_dragging());
    }
}
