use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn s(w: f64, h: f64) -> Size {
    Size::new(w, h)
}

// =============================================================
// Event
// =============================================================

#[test]
fn event_names_match_host_callbacks() {
    assert_eq!(Event::PositionChange(p(0.0, 0.0)).name(), "onPositionChange");
    assert_eq!(Event::SizeChange(s(0.0, 0.0)).name(), "onSizeChange");
    assert_eq!(Event::ResizeEnd { size: s(1.0, 1.0), position: p(0.0, 0.0) }.name(), "onResizeEnd");
    assert_eq!(Event::DoubleClick(PointerEvent::default()).name(), "onDoubleClick");
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dispatch_preserves_order() {
    let events = vec![
        Event::ResizeEnd { size: s(10.0, 10.0), position: p(1.0, 2.0) },
        Event::PositionChange(p(1.0, 2.0)),
    ];
    let mut log: Vec<Event> = Vec::new();
    dispatch(&mut log, &events);
    assert_eq!(log, events);
}

#[test]
fn dispatch_to_unit_listener_is_noop() {
    dispatch(&mut (), &[Event::DragStart(p(0.0, 0.0))]);
}

// =============================================================
// Callbacks
// =============================================================

#[test]
fn callbacks_route_each_event_to_its_slot() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let log = |tag: &'static str| {
        let seen = Rc::clone(&seen);
        move |_: Position| seen.borrow_mut().push(tag.to_string())
    };
    let seen_resize = Rc::clone(&seen);
    let seen_click = Rc::clone(&seen);
    let mut callbacks = Callbacks::new()
        .on_drag_start(log("drag_start"))
        .on_drag_end(log("drag_end"))
        .on_position_change(log("position"))
        .on_resize_end(move |size, pos| seen_resize.borrow_mut().push(format!("resize_end {} {}", size.width, pos.x)))
        .on_click(move |e| seen_click.borrow_mut().push(format!("click {}", e.point.x)));

    dispatch(
        &mut callbacks,
        &[
            Event::DragStart(p(0.0, 0.0)),
            Event::PositionChange(p(5.0, 5.0)),
            Event::DragEnd(p(5.0, 5.0)),
            Event::ResizeEnd { size: s(120.0, 80.0), position: p(7.0, 9.0) },
            Event::Click(PointerEvent::at(3.0, 4.0)),
        ],
    );

    assert_eq!(
        *seen.borrow(),
        vec!["drag_start", "position", "drag_end", "resize_end 120 7", "click 3"]
    );
}

#[test]
fn callbacks_unset_slots_are_skipped() {
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let mut callbacks = Callbacks::new().on_size_change(move |_| *counter.borrow_mut() += 1);
    dispatch(
        &mut callbacks,
        &[
            Event::PositionChange(p(0.0, 0.0)),
            Event::SizeChange(s(1.0, 1.0)),
            Event::MouseEnter(PointerEvent::default()),
            Event::SizeChange(s(2.0, 2.0)),
        ],
    );
    assert_eq!(*hits.borrow(), 2);
}

#[test]
fn callbacks_debug_reports_configured_slots() {
    let callbacks = Callbacks::new().on_drag_end(|_| {});
    let dbg = format!("{callbacks:?}");
    assert!(dbg.contains("drag_end: true"));
    assert!(dbg.contains("drag_start: false"));
}
