//! Lifecycle notifications and the dispatcher that hands them to the host.
//!
//! The engine never calls the host directly. Each input handler returns an
//! ordered `Vec<Event>`; [`dispatch`] forwards that list, in order, to a
//! [`Listener`]. Within one pointer-up of a resize, `ResizeEnd` always
//! precedes the flushing `PositionChange`.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::geom::{Position, Size};
use crate::input::PointerEvent;

/// A notification emitted for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PositionChange(Position),
    SizeChange(Size),
    DragStart(Position),
    DragEnd(Position),
    ResizeStart { size: Size, position: Position },
    ResizeEnd { size: Size, position: Position },
    MouseEnter(PointerEvent),
    MouseLeave(PointerEvent),
    Click(PointerEvent),
    DoubleClick(PointerEvent),
}

impl Event {
    /// Host-facing callback name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PositionChange(_) => "onPositionChange",
            Self::SizeChange(_) => "onSizeChange",
            Self::DragStart(_) => "onDragStart",
            Self::DragEnd(_) => "onDragEnd",
            Self::ResizeStart { .. } => "onResizeStart",
            Self::ResizeEnd { .. } => "onResizeEnd",
            Self::MouseEnter(_) => "onMouseEnter",
            Self::MouseLeave(_) => "onMouseLeave",
            Self::Click(_) => "onClick",
            Self::DoubleClick(_) => "onDoubleClick",
        }
    }
}

/// Receiver of emitted events. Return values are never consumed.
pub trait Listener {
    fn on_event(&mut self, event: &Event);
}

/// Discards every event.
impl Listener for () {
    fn on_event(&mut self, _event: &Event) {}
}

/// Records every event, in order.
impl Listener for Vec<Event> {
    fn on_event(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Forward `events` to `listener` in order.
pub fn dispatch<L: Listener + ?Sized>(listener: &mut L, events: &[Event]) {
    for event in events {
        listener.on_event(event);
    }
}

type Slot<A> = Option<Box<dyn FnMut(A)>>;
type Slot2<A, B> = Option<Box<dyn FnMut(A, B)>>;

/// One optional closure per host callback.
///
/// Unset callbacks are skipped. Built with the `on_*` methods:
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use dragresize::{Callbacks, Controller, DragResizeConfig, HitTarget, PointerDown, PointerEvent, Position};
///
/// let moved = Rc::new(Cell::new(Position::default()));
/// let sink = Rc::clone(&moved);
/// let callbacks = Callbacks::new()
///     .on_position_change(move |p| sink.set(p))
///     .on_resize_end(|s, p| println!("{s:?} at {p:?}"));
///
/// let mut controller = Controller::uncaptured(DragResizeConfig::default(), callbacks);
/// controller.on_pointer_down(&PointerDown::new(PointerEvent::at(150.0, 150.0), HitTarget::body()));
/// controller.on_pointer_move(&PointerEvent::at(170.0, 190.0));
/// assert_eq!(moved.get(), Position::new(120.0, 140.0));
/// ```
#[derive(Default)]
pub struct Callbacks {
    position_change: Slot<Position>,
    size_change: Slot<Size>,
    drag_start: Slot<Position>,
    drag_end: Slot<Position>,
    resize_start: Slot2<Size, Position>,
    resize_end: Slot2<Size, Position>,
    mouse_enter: Slot<PointerEvent>,
    mouse_leave: Slot<PointerEvent>,
    click: Slot<PointerEvent>,
    double_click: Slot<PointerEvent>,
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("position_change", &self.position_change.is_some())
            .field("size_change", &self.size_change.is_some())
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .field("resize_start", &self.resize_start.is_some())
            .field("resize_end", &self.resize_end.is_some())
            .finish_non_exhaustive()
    }
}

impl Callbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_position_change(mut self, f: impl FnMut(Position) + 'static) -> Self {
        self.position_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_size_change(mut self, f: impl FnMut(Size) + 'static) -> Self {
        self.size_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_drag_start(mut self, f: impl FnMut(Position) + 'static) -> Self {
        self.drag_start = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_drag_end(mut self, f: impl FnMut(Position) + 'static) -> Self {
        self.drag_end = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_resize_start(mut self, f: impl FnMut(Size, Position) + 'static) -> Self {
        self.resize_start = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_resize_end(mut self, f: impl FnMut(Size, Position) + 'static) -> Self {
        self.resize_end = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_mouse_enter(mut self, f: impl FnMut(PointerEvent) + 'static) -> Self {
        self.mouse_enter = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_mouse_leave(mut self, f: impl FnMut(PointerEvent) + 'static) -> Self {
        self.mouse_leave = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_click(mut self, f: impl FnMut(PointerEvent) + 'static) -> Self {
        self.click = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_double_click(mut self, f: impl FnMut(PointerEvent) + 'static) -> Self {
        self.double_click = Some(Box::new(f));
        self
    }
}

fn call<A>(slot: &mut Slot<A>, arg: A) {
    if let Some(f) = slot {
        f(arg);
    }
}

fn call2<A, B>(slot: &mut Slot2<A, B>, a: A, b: B) {
    if let Some(f) = slot {
        f(a, b);
    }
}

impl Listener for Callbacks {
    fn on_event(&mut self, event: &Event) {
        match *event {
            Event::PositionChange(p) => call(&mut self.position_change, p),
            Event::SizeChange(s) => call(&mut self.size_change, s),
            Event::DragStart(p) => call(&mut self.drag_start, p),
            Event::DragEnd(p) => call(&mut self.drag_end, p),
            Event::ResizeStart { size, position } => call2(&mut self.resize_start, size, position),
            Event::ResizeEnd { size, position } => call2(&mut self.resize_end, size, position),
            Event::MouseEnter(e) => call(&mut self.mouse_enter, e),
            Event::MouseLeave(e) => call(&mut self.mouse_leave, e),
            Event::Click(e) => call(&mut self.click, e),
            Event::DoubleClick(e) => call(&mut self.double_click, e),
        }
    }
}
