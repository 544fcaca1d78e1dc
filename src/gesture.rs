//! Pointer-down classification: does this press start a drag, a resize, or nothing?

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::DragResizeConfig;
use crate::geom::{Position, Size};
use crate::hit::{HitTarget, ResizeDirection};
use crate::input::{GestureSnapshot, InputState, PointerDown};

/// A gesture a pointer-down is allowed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag,
    Resize(ResizeDirection),
}

impl Gesture {
    /// Enter the matching active state, snapshotting the press.
    #[must_use]
    pub fn begin(self, pointer: Position, position: Position, size: Size) -> InputState {
        let snapshot = GestureSnapshot { pointer, position, size };
        match self {
            Self::Drag => InputState::Dragging { snapshot },
            Self::Resize(direction) => InputState::Resizing { direction, snapshot },
        }
    }
}

/// Decide which gesture, if any, `down` starts under `config`.
///
/// Handles win over the drag selector. A handle whose direction is not
/// enabled is ignored rather than trusted.
#[must_use]
pub fn classify_pointer_down(down: &PointerDown, config: &DragResizeConfig) -> Option<Gesture> {
    if config.disabled {
        tracing::debug!("pointer-down ignored: disabled");
        return None;
    }
    match &down.target {
        HitTarget::Handle(direction) => {
            if config.enable_resize.contains(*direction) {
                Some(Gesture::Resize(*direction))
            } else {
                tracing::debug!(direction = direction.name(), "pointer-down ignored: direction not enabled");
                None
            }
        }
        HitTarget::Content { matches } => match config.drag_selector.as_deref() {
            Some(selector) if !matches.iter().any(|m| m == selector) => {
                tracing::debug!(selector, "pointer-down ignored: outside drag selector");
                None
            }
            _ => Some(Gesture::Drag),
        },
    }
}
