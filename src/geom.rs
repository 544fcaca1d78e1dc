//! Geometry types and the constraint functions applied to every gesture sample.
//!
//! All coordinates live in one global 2D space (typically viewport pixels).
//! Both clamp functions are pure and idempotent; the interaction engine calls
//! them after the raw geometric transform of each movement sample.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Top-left corner of the element, or any other point in the global space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Element dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Closed rectangle the whole element must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Boundary {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// The boundary expressed as an origin plus dimensions.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect {
            x: self.left,
            y: self.top,
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }
}

/// Optional per-axis lower and upper size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeConstraint {
    pub min: Option<Size>,
    pub max: Option<Size>,
}

/// Axis-aligned rectangle in the global coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self { x: position.x, y: position.y, width: size.width, height: size.height }
    }

    /// Whether `point` falls inside the rectangle. Edges are inclusive.
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x && point.x <= self.x + self.width && point.y >= self.y && point.y <= self.y + self.height
    }
}

/// Keep the full `size`-sized rectangle at `position` inside `boundary`.
///
/// Each axis is clamped with `max(lower, min(upper, value))`, so when the
/// element is larger than the boundary the upper bound falls below the lower
/// one and the result pins to `boundary.left` / `boundary.top`.
#[must_use]
pub fn clamp_position(position: Position, size: Size, boundary: Option<&Boundary>) -> Position {
    let Some(b) = boundary else {
        return position;
    };
    Position {
        x: clamp_axis(position.x, b.left, b.right - size.width),
        y: clamp_axis(position.y, b.top, b.bottom - size.height),
    }
}

fn clamp_axis(value: f64, lower: f64, upper: f64) -> f64 {
    lower.max(upper.min(value))
}

/// Apply min then max bounds to each axis independently.
///
/// Each axis is floored at zero before the bounds, so an absent min still
/// yields a non-negative size. Min is applied first, so a max smaller than
/// min wins.
#[must_use]
pub fn clamp_size(size: Size, constraint: &SizeConstraint) -> Size {
    let mut out = Size { width: size.width.max(0.0), height: size.height.max(0.0) };
    if let Some(min) = constraint.min {
        out.width = min.width.max(out.width);
        out.height = min.height.max(out.height);
    }
    if let Some(max) = constraint.max {
        out.width = max.width.min(out.width);
        out.height = max.height.min(out.height);
    }
    out
}
