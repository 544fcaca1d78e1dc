#![allow(clippy::float_cmp)]

use super::*;
use crate::hit::ResizeDirectionSet;
use crate::input::PointerEvent;

fn press(target: HitTarget) -> PointerDown {
    PointerDown::new(PointerEvent::at(150.0, 120.0), target)
}

fn resizable() -> DragResizeConfig {
    DragResizeConfig { enable_resize: ResizeDirectionSet::all(), ..Default::default() }
}

// =============================================================
// Disabled
// =============================================================

#[test]
fn disabled_ignores_body() {
    let config = DragResizeConfig { disabled: true, ..Default::default() };
    assert_eq!(classify_pointer_down(&press(HitTarget::body()), &config), None);
}

#[test]
fn disabled_ignores_enabled_handle() {
    let config = DragResizeConfig { disabled: true, ..resizable() };
    let down = press(HitTarget::Handle(ResizeDirection::Right));
    assert_eq!(classify_pointer_down(&down, &config), None);
}

// =============================================================
// Handles
// =============================================================

#[test]
fn enabled_handle_starts_resize() {
    let down = press(HitTarget::Handle(ResizeDirection::TopLeft));
    assert_eq!(classify_pointer_down(&down, &resizable()), Some(Gesture::Resize(ResizeDirection::TopLeft)));
}

#[test]
fn handle_not_enabled_is_ignored() {
    let config = DragResizeConfig {
        enable_resize: ResizeDirectionSet::from_directions(&[ResizeDirection::Right]),
        ..Default::default()
    };
    let down = press(HitTarget::Handle(ResizeDirection::Left));
    assert_eq!(classify_pointer_down(&down, &config), None);
}

#[test]
fn handle_wins_over_drag_selector() {
    let config = DragResizeConfig { drag_selector: Some(".grip".into()), ..resizable() };
    let down = press(HitTarget::Handle(ResizeDirection::Bottom));
    assert_eq!(classify_pointer_down(&down, &config), Some(Gesture::Resize(ResizeDirection::Bottom)));
}

// =============================================================
// Drag selector
// =============================================================

#[test]
fn body_without_selector_starts_drag() {
    assert_eq!(classify_pointer_down(&press(HitTarget::body()), &DragResizeConfig::default()), Some(Gesture::Drag));
}

#[test]
fn selector_match_starts_drag() {
    let config = DragResizeConfig { drag_selector: Some(".grip".into()), ..Default::default() };
    let down = press(HitTarget::within([".icon", ".grip"]));
    assert_eq!(classify_pointer_down(&down, &config), Some(Gesture::Drag));
}

#[test]
fn selector_miss_is_ignored() {
    let config = DragResizeConfig { drag_selector: Some(".grip".into()), ..Default::default() };
    assert_eq!(classify_pointer_down(&press(HitTarget::body()), &config), None);
    let down = press(HitTarget::within([".content"]));
    assert_eq!(classify_pointer_down(&down, &config), None);
}

// =============================================================
// Gesture::begin
// =============================================================

#[test]
fn begin_drag_snapshots_press() {
    let state = Gesture::Drag.begin(Position::new(150.0, 120.0), Position::new(100.0, 100.0), Size::new(200.0, 200.0));
    let InputState::Dragging { snapshot } = state else {
        panic!("expected dragging, got {state:?}");
    };
    assert_eq!(snapshot.grab_offset(), Position::new(50.0, 20.0));
    assert_eq!(snapshot.size, Size::new(200.0, 200.0));
}

#[test]
fn begin_resize_keeps_direction() {
    let state = Gesture::Resize(ResizeDirection::Left).begin(
        Position::new(100.0, 150.0),
        Position::new(100.0, 100.0),
        Size::new(300.0, 200.0),
    );
    assert!(matches!(state, InputState::Resizing { direction: ResizeDirection::Left, .. }));
}
