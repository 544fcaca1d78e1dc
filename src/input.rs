//! Input model: pointer events, modifier keys, and the gesture state machine.
//!
//! `PointerEvent` is what the host forwards for every pointer sample.
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up, carrying the snapshot every movement sample is computed from.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Position, Size};
use crate::hit::{HitTarget, ResizeDirection};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    /// Left mouse button, or a single-finger touch.
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// One pointer sample in global coordinates.
///
/// Gesture logic reads only `point`. `button` and `modifiers` are carried
/// unchanged into the pass-through events (`MouseEnter`, `MouseLeave`,
/// `Click`, `DoubleClick`) so hosts can inspect them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub point: Position,
    pub button: Button,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button sample at `(x, y)` with no modifiers.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { point: Position::new(x, y), ..Self::default() }
    }
}

/// A pointer-down together with what it landed on.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDown {
    pub event: PointerEvent,
    pub target: HitTarget,
}

impl PointerDown {
    #[must_use]
    pub fn new(event: PointerEvent, target: HitTarget) -> Self {
        Self { event, target }
    }
}

/// Pointer coordinates and geometry captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    /// Pointer position at press.
    pub pointer: Position,
    /// Element position at press.
    pub position: Position,
    /// Element size at press.
    pub size: Size,
}

impl GestureSnapshot {
    /// Offset from the element's top-left corner to the grab point.
    #[must_use]
    pub fn grab_offset(&self) -> Position {
        self.pointer - self.position
    }

    /// Cumulative pointer displacement since press.
    #[must_use]
    pub fn delta(&self, pointer: Position) -> Position {
        pointer - self.pointer
    }
}

/// Public view of the active gesture, without its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeDirection),
}

impl InteractionMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Resizing(_) => "resizing",
        }
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The element follows the pointer, keeping the grab offset.
    Dragging { snapshot: GestureSnapshot },
    /// The element is being resized from one of its handles.
    Resizing { direction: ResizeDirection, snapshot: GestureSnapshot },
}

impl InputState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Dragging { .. } => InteractionMode::Dragging,
            Self::Resizing { direction, .. } => InteractionMode::Resizing(*direction),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&GestureSnapshot> {
        match self {
            Self::Idle => None,
            Self::Dragging { snapshot } | Self::Resizing { snapshot, .. } => Some(snapshot),
        }
    }
}
