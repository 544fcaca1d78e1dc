//! Shared constants for the drag/resize controller.

use crate::geom::{Position, Size};

// ── Defaults ────────────────────────────────────────────────────

/// Position used when the host does not supply one.
pub const DEFAULT_POSITION: Position = Position { x: 100.0, y: 100.0 };

/// Size used when the host does not supply one.
pub const DEFAULT_SIZE: Size = Size { width: 200.0, height: 200.0 };

/// Lower size bound used when the host does not supply one.
pub const DEFAULT_MIN_SIZE: Size = Size { width: 50.0, height: 50.0 };

// ── Handles ─────────────────────────────────────────────────────

/// Thickness of an edge handle band, in pixels. Edge bands straddle the border.
pub const EDGE_HANDLE_PX: f64 = 8.0;

/// Side length of a square corner handle, in pixels. Corners are centered on the vertex.
pub const CORNER_HANDLE_PX: f64 = 12.0;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown on the container while idle.
pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_MOVE: &str = "move";
pub const CURSOR_NS: &str = "ns-resize";
pub const CURSOR_EW: &str = "ew-resize";
pub const CURSOR_NW: &str = "nw-resize";
pub const CURSOR_NE: &str = "ne-resize";
pub const CURSOR_SW: &str = "sw-resize";
pub const CURSOR_SE: &str = "se-resize";
