//! Pointer-driven drag and resize controller for rectangular on-screen regions.
//!
//! The crate turns a stream of pointer samples into a consistent position and
//! size for one element, enforcing an optional containment boundary and
//! min/max size limits, and reports ordered lifecycle events to the host.
//! Rendering is left entirely to the host: it forwards raw pointer events,
//! reads back geometry, handles, and cursors, and receives [`event::Event`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::ControllerCore`] and the wired [`engine::Controller`] |
//! | [`geom`] | Position/size/boundary types and the clamp functions |
//! | [`resize`] | Per-direction resize geometry |
//! | [`hit`] | Resize directions, enabled-direction set, handle hit-testing |
//! | [`gesture`] | Pointer-down classification |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`event`] | Emitted events, listeners, callback dispatch |
//! | [`capture`] | Scoped global pointer subscription |
//! | [`config`] | Host-facing options, JSON loading, validation |
//! | [`consts`] | Defaults, handle geometry, cursor names |

pub mod capture;
pub mod config;
pub mod consts;
pub mod engine;
pub mod event;
pub mod geom;
pub mod gesture;
pub mod hit;
pub mod input;
pub mod resize;

pub use config::{ConfigError, CursorOptions, DragResizeConfig};
pub use engine::{Controller, ControllerCore};
pub use event::{Callbacks, Event, Listener};
pub use geom::{Boundary, Position, Size};
pub use hit::{HitTarget, ResizeDirection, ResizeDirectionSet};
pub use input::{PointerDown, PointerEvent};
