//! Raw resize geometry, before any clamping.
//!
//! Every direction decomposes into one edge per axis: the leading edge (left
//! or top) moves the origin and shrinks the extent, the trailing edge (right
//! or bottom) only grows the extent. Corners are the two adjacent edges
//! applied independently.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::geom::{Position, Size};
use crate::hit::ResizeDirection;
use crate::input::GestureSnapshot;

/// Which edge of one axis a handle drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisEdge {
    /// Axis is not affected.
    Fixed,
    /// Left or top edge.
    Leading,
    /// Right or bottom edge.
    Trailing,
}

impl AxisEdge {
    /// Apply a pointer displacement along this axis to `(origin, extent)`.
    ///
    /// The extent never goes below zero: dragging an edge past the opposite
    /// one collapses the axis onto that opposite edge.
    #[must_use]
    pub fn apply(self, origin: f64, extent: f64, delta: f64) -> (f64, f64) {
        match self {
            Self::Fixed => (origin, extent),
            Self::Trailing => (origin, (extent + delta).max(0.0)),
            Self::Leading => {
                let new_extent = (extent - delta).max(0.0);
                (origin + (extent - new_extent), new_extent)
            }
        }
    }
}

/// Horizontal and vertical edges dragged by `direction`.
#[must_use]
pub fn axis_edges(direction: ResizeDirection) -> (AxisEdge, AxisEdge) {
    use AxisEdge::{Fixed, Leading, Trailing};
    match direction {
        ResizeDirection::Top => (Fixed, Leading),
        ResizeDirection::Right => (Trailing, Fixed),
        ResizeDirection::Bottom => (Fixed, Trailing),
        ResizeDirection::Left => (Leading, Fixed),
        ResizeDirection::TopLeft => (Leading, Leading),
        ResizeDirection::TopRight => (Trailing, Leading),
        ResizeDirection::BottomLeft => (Leading, Trailing),
        ResizeDirection::BottomRight => (Trailing, Trailing),
    }
}

/// Size and position after dragging `direction`'s handle by `delta` since press.
///
/// Always computed from the press-time snapshot and the cumulative delta, so
/// repeated samples never accumulate rounding error.
#[must_use]
pub fn resize_transform(direction: ResizeDirection, snapshot: &GestureSnapshot, delta: Position) -> (Size, Position) {
    let (horizontal, vertical) = axis_edges(direction);
    let (x, width) = horizontal.apply(snapshot.position.x, snapshot.size.width, delta.x);
    let (y, height) = vertical.apply(snapshot.position.y, snapshot.size.height, delta.y);
    (Size { width, height }, Position { x, y })
}
