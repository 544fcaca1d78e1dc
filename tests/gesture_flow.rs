//! End-to-end gestures through the public API: JSON config in, callbacks out.
#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dragresize::capture::{CaptureGuard, FnCapture};
use dragresize::input::{Button, Modifiers};
use dragresize::{
    Callbacks, Controller, DragResizeConfig, HitTarget, PointerDown, PointerEvent, Position, ResizeDirection, Size,
};

fn init_tracing() {
    drop(tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init());
}

fn at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::at(x, y)
}

type Log = Rc<RefCell<Vec<String>>>;

fn recording_callbacks(log: &Log) -> Callbacks {
    let l1 = Rc::clone(log);
    let l2 = Rc::clone(log);
    let l3 = Rc::clone(log);
    let l4 = Rc::clone(log);
    let l5 = Rc::clone(log);
    let l6 = Rc::clone(log);
    Callbacks::new()
        .on_drag_start(move |p| l1.borrow_mut().push(format!("dragStart {} {}", p.x, p.y)))
        .on_drag_end(move |p| l2.borrow_mut().push(format!("dragEnd {} {}", p.x, p.y)))
        .on_position_change(move |p| l3.borrow_mut().push(format!("position {} {}", p.x, p.y)))
        .on_size_change(move |s| l4.borrow_mut().push(format!("size {} {}", s.width, s.height)))
        .on_resize_start(move |s, p| l5.borrow_mut().push(format!("resizeStart {} {} @ {} {}", s.width, s.height, p.x, p.y)))
        .on_resize_end(move |s, p| l6.borrow_mut().push(format!("resizeEnd {} {} @ {} {}", s.width, s.height, p.x, p.y)))
}

fn window_config() -> DragResizeConfig {
    DragResizeConfig::from_json(
        r#"{
            "position": {"x": 780, "y": 580},
            "size": {"width": 100, "height": 100},
            "boundary": {"left": 0, "top": 0, "right": 800, "bottom": 600},
            "dragSelector": ".title",
            "enableResize": {"left": true, "top": true, "bottomRight": true}
        }"#,
    )
    .unwrap()
}

#[test]
fn drag_toward_corner_clamps_inside_boundary() {
    init_tracing();
    let log: Log = Rc::default();
    let mut ctl = Controller::uncaptured(window_config(), recording_callbacks(&log));

    ctl.on_pointer_down(&PointerDown::new(at(790.0, 585.0), HitTarget::within([".title"])));
    ctl.on_pointer_move(&at(850.0, 700.0));
    ctl.on_pointer_move(&at(910.0, 905.0));
    ctl.on_pointer_up(&at(910.0, 905.0));

    assert_eq!(
        *log.borrow(),
        vec!["dragStart 780 580", "position 700 500", "position 700 500", "dragEnd 700 500"]
    );
}

#[test]
fn press_outside_drag_selector_does_nothing() {
    init_tracing();
    let log: Log = Rc::default();
    let mut ctl = Controller::uncaptured(window_config(), recording_callbacks(&log));

    ctl.on_pointer_down(&PointerDown::new(at(790.0, 590.0), HitTarget::within([".body"])));
    ctl.on_pointer_move(&at(100.0, 100.0));
    ctl.on_pointer_up(&at(100.0, 100.0));

    assert!(log.borrow().is_empty());
    assert_eq!(ctl.core().position(), Position::new(780.0, 580.0));
}

#[test]
fn top_left_resize_flushes_position_after_end() {
    init_tracing();
    let log: Log = Rc::default();
    let config = DragResizeConfig::from_json(
        r#"{
            "position": {"x": 100, "y": 100},
            "size": {"width": 300, "height": 200},
            "enableResize": {"top": true, "left": true}
        }"#,
    )
    .unwrap();
    let mut ctl = Controller::uncaptured(config, recording_callbacks(&log));

    ctl.on_pointer_down(&PointerDown::new(at(100.0, 150.0), HitTarget::Handle(ResizeDirection::Left)));
    ctl.on_pointer_move(&at(60.0, 150.0));
    ctl.on_pointer_up(&at(60.0, 150.0));

    assert_eq!(
        *log.borrow(),
        vec![
            "resizeStart 300 200 @ 100 100",
            "size 340 200",
            "resizeEnd 340 200 @ 60 100",
            "position 60 100",
        ]
    );
}

#[test]
fn raw_coordinates_resolve_to_handles() {
    init_tracing();
    let log: Log = Rc::default();
    let config = DragResizeConfig::from_json(
        r#"{
            "position": {"x": 100, "y": 100},
            "size": {"width": 300, "height": 200},
            "enableResize": {"bottomRight": true},
            "maxSize": {"width": 320, "height": 400}
        }"#,
    )
    .unwrap();
    let mut ctl = Controller::uncaptured(config, recording_callbacks(&log));

    let press = at(400.0, 300.0);
    let target = ctl.core().hit_test(press.point).unwrap();
    assert_eq!(target, HitTarget::Handle(ResizeDirection::BottomRight));

    ctl.on_pointer_down(&PointerDown::new(press, target));
    ctl.on_pointer_move(&at(450.0, 330.0));
    ctl.on_pointer_up(&at(450.0, 330.0));

    assert_eq!(ctl.core().size(), Size::new(320.0, 230.0));
    assert_eq!(log.borrow().last().map(String::as_str), Some("position 100 100"));
}

#[test]
fn capture_is_released_on_every_exit_path() {
    init_tracing();
    let active = Rc::new(Cell::new(0));
    let counter = Rc::clone(&active);
    let capture = FnCapture(move || {
        counter.set(counter.get() + 1);
        let counter = Rc::clone(&counter);
        CaptureGuard::new(move || counter.set(counter.get() - 1))
    });
    let mut ctl = Controller::new(window_config(), Callbacks::new(), capture);
    let title = || PointerDown::new(at(790.0, 585.0), HitTarget::within([".title"]));

    ctl.on_pointer_down(&title());
    assert_eq!(active.get(), 1);
    ctl.on_pointer_up(&at(790.0, 585.0));
    assert_eq!(active.get(), 0);

    ctl.on_pointer_down(&title());
    ctl.cancel();
    assert_eq!(active.get(), 0);

    ctl.on_pointer_down(&title());
    assert_eq!(active.get(), 1);
    drop(ctl);
    assert_eq!(active.get(), 0);
}

#[test]
fn host_sync_between_gestures() {
    init_tracing();
    let mut ctl = Controller::uncaptured(DragResizeConfig::default(), Callbacks::new());
    ctl.on_pointer_down(&PointerDown::new(at(150.0, 150.0), HitTarget::body()));
    assert!(!ctl.sync(Position::new(0.0, 0.0), Size::new(80.0, 80.0)));
    ctl.on_pointer_up(&at(150.0, 150.0));
    assert!(ctl.sync(Position::new(0.0, 0.0), Size::new(80.0, 80.0)));
    assert_eq!(ctl.core().size(), Size::new(80.0, 80.0));
}

#[test]
fn pass_through_events_carry_button_and_modifiers() {
    init_tracing();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callbacks = Callbacks::new().on_click(move |e| sink.borrow_mut().push(e));
    let mut ctl = Controller::uncaptured(DragResizeConfig::default(), callbacks);

    let click = PointerEvent {
        point: Position::new(150.0, 150.0),
        button: Button::Secondary,
        modifiers: Modifiers { shift: true, ..Modifiers::default() },
    };
    ctl.on_click(&click);

    assert_eq!(*seen.borrow(), vec![click]);
    assert!(ctl.core().input().is_idle());
}
