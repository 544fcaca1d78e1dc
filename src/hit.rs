//! Hit targets: resize directions, the enabled-direction set, and handle geometry.
//!
//! Hosts with a DOM-like tree report what was pressed as a [`HitTarget`]
//! directly. Hosts that only have raw coordinates can call [`hit_test`], which
//! lays the eight handles out around the element rectangle.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CORNER_HANDLE_PX, EDGE_HANDLE_PX};
use crate::geom::{Position, Rect};

/// Edge or corner a resize handle is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// All directions, in handle render order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight)
    }

    /// The camelCase name used in configuration and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
        }
    }
}

/// Which resize handles are active. Serializes as `{ "top": true, ... }`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeDirectionSet {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl ResizeDirectionSet {
    /// Every direction enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
            top_left: true,
            top_right: true,
            bottom_left: true,
            bottom_right: true,
        }
    }

    #[must_use]
    pub fn from_directions(directions: &[ResizeDirection]) -> Self {
        let mut set = Self::default();
        for &d in directions {
            set.insert(d);
        }
        set
    }

    #[must_use]
    pub fn contains(&self, direction: ResizeDirection) -> bool {
        *self.slot(direction)
    }

    pub fn insert(&mut self, direction: ResizeDirection) {
        *self.slot_mut(direction) = true;
    }

    pub fn remove(&mut self, direction: ResizeDirection) {
        *self.slot_mut(direction) = false;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Enabled directions in handle render order.
    pub fn iter(&self) -> impl Iterator<Item = ResizeDirection> + '_ {
        ResizeDirection::ALL.into_iter().filter(|d| self.contains(*d))
    }

    fn slot(&self, direction: ResizeDirection) -> &bool {
        match direction {
            ResizeDirection::Top => &self.top,
            ResizeDirection::Right => &self.right,
            ResizeDirection::Bottom => &self.bottom,
            ResizeDirection::Left => &self.left,
            ResizeDirection::TopLeft => &self.top_left,
            ResizeDirection::TopRight => &self.top_right,
            ResizeDirection::BottomLeft => &self.bottom_left,
            ResizeDirection::BottomRight => &self.bottom_right,
        }
    }

    fn slot_mut(&mut self, direction: ResizeDirection) -> &mut bool {
        match direction {
            ResizeDirection::Top => &mut self.top,
            ResizeDirection::Right => &mut self.right,
            ResizeDirection::Bottom => &mut self.bottom,
            ResizeDirection::Left => &mut self.left,
            ResizeDirection::TopLeft => &mut self.top_left,
            ResizeDirection::TopRight => &mut self.top_right,
            ResizeDirection::BottomLeft => &mut self.bottom_left,
            ResizeDirection::BottomRight => &mut self.bottom_right,
        }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// One of the resize handles.
    Handle(ResizeDirection),
    /// The container or something inside it.
    ///
    /// `matches` lists the selectors matched by the pressed element and each of
    /// its ancestors up to the container. Drag-selector filtering checks
    /// membership in this list.
    Content { matches: Vec<String> },
}

impl HitTarget {
    /// A press on the container itself, matching no selector.
    #[must_use]
    pub fn body() -> Self {
        Self::Content { matches: Vec::new() }
    }

    /// A press on content whose ancestry matches the given selectors.
    #[must_use]
    pub fn within<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Content { matches: selectors.into_iter().map(Into::into).collect() }
    }
}

/// Hit region for `direction` around the element rectangle `rect`.
///
/// Edge bands run the full side and straddle the border; corner squares are
/// centered on the vertex and take priority in [`hit_test`].
#[must_use]
pub fn handle_rect(direction: ResizeDirection, rect: &Rect) -> Rect {
    let e = EDGE_HANDLE_PX;
    let c = CORNER_HANDLE_PX;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;
    let corner = |vx: f64, vy: f64| Rect::new(vx - c / 2.0, vy - c / 2.0, c, c);
    match direction {
        ResizeDirection::Top => Rect::new(rect.x, rect.y - e / 2.0, rect.width, e),
        ResizeDirection::Bottom => Rect::new(rect.x, bottom - e / 2.0, rect.width, e),
        ResizeDirection::Left => Rect::new(rect.x - e / 2.0, rect.y, e, rect.height),
        ResizeDirection::Right => Rect::new(right - e / 2.0, rect.y, e, rect.height),
        ResizeDirection::TopLeft => corner(rect.x, rect.y),
        ResizeDirection::TopRight => corner(right, rect.y),
        ResizeDirection::BottomLeft => corner(rect.x, bottom),
        ResizeDirection::BottomRight => corner(right, bottom),
    }
}

/// Resolve a raw pointer coordinate against the element and its enabled handles.
///
/// Corners are checked before edges, edges before the body. Returns `None`
/// when the point misses everything.
#[must_use]
pub fn hit_test(point: Position, rect: &Rect, enabled: &ResizeDirectionSet) -> Option<HitTarget> {
    let corners = enabled.iter().filter(|d| d.is_corner());
    let edges = enabled.iter().filter(|d| !d.is_corner());
    for direction in corners.chain(edges) {
        if handle_rect(direction, rect).contains(point) {
            return Some(HitTarget::Handle(direction));
        }
    }
    if rect.contains(point) {
        return Some(HitTarget::body());
    }
    None
}
