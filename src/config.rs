//! Controller configuration: the host-facing option surface and its defaults.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so a host can hand over the same JSON
//! object it would use for component props. Every field has a default, and
//! absent optional constraints mean "unconstrained". Validation only rejects
//! values no geometry can be computed from (non-finite numbers, negative
//! dimensions); min > max and undersized boundaries are resolved by the clamp
//! policies in `geom`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CURSOR_EW, CURSOR_MOVE, CURSOR_NE, CURSOR_NS, CURSOR_NW, CURSOR_SE, CURSOR_SW, DEFAULT_MIN_SIZE,
    DEFAULT_POSITION, DEFAULT_SIZE,
};
use crate::geom::{Boundary, Position, Size, SizeConstraint};
use crate::hit::{ResizeDirection, ResizeDirectionSet};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("non-finite value in {field}")]
    NonFinite { field: &'static str },
    #[error("negative dimension in {field}")]
    NegativeSize { field: &'static str },
}

/// Optional cursor overrides. Unset or empty entries use the built-in names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorOptions {
    /// Container cursor while dragging.
    #[serde(rename = "move")]
    pub drag: Option<String>,
    pub resize_top: Option<String>,
    pub resize_right: Option<String>,
    pub resize_bottom: Option<String>,
    pub resize_left: Option<String>,
    pub resize_top_left: Option<String>,
    pub resize_top_right: Option<String>,
    pub resize_bottom_left: Option<String>,
    pub resize_bottom_right: Option<String>,
}

impl CursorOptions {
    /// Cursor for the container while a drag is active.
    #[must_use]
    pub fn move_cursor(&self) -> &str {
        pick(self.drag.as_deref(), CURSOR_MOVE)
    }

    /// Cursor for the handle bound to `direction`.
    #[must_use]
    pub fn cursor_for(&self, direction: ResizeDirection) -> &str {
        let (custom, fallback) = match direction {
            ResizeDirection::Top => (&self.resize_top, CURSOR_NS),
            ResizeDirection::Right => (&self.resize_right, CURSOR_EW),
            ResizeDirection::Bottom => (&self.resize_bottom, CURSOR_NS),
            ResizeDirection::Left => (&self.resize_left, CURSOR_EW),
            ResizeDirection::TopLeft => (&self.resize_top_left, CURSOR_NW),
            ResizeDirection::TopRight => (&self.resize_top_right, CURSOR_NE),
            ResizeDirection::BottomLeft => (&self.resize_bottom_left, CURSOR_SW),
            ResizeDirection::BottomRight => (&self.resize_bottom_right, CURSOR_SE),
        };
        pick(custom.as_deref(), fallback)
    }
}

fn pick<'a>(custom: Option<&'a str>, fallback: &'a str) -> &'a str {
    custom.filter(|c| !c.is_empty()).unwrap_or(fallback)
}

/// Everything the host configures on one controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragResizeConfig {
    /// Initial, and host-controlled, position.
    pub position: Position,
    /// Initial, and host-controlled, size.
    pub size: Size,
    /// Containment rectangle for the whole element.
    pub boundary: Option<Boundary>,
    /// Whether the host should draw the boundary outline.
    pub show_border: bool,
    /// Selector the press must be inside of for a drag to start.
    pub drag_selector: Option<String>,
    /// Directions with an active handle.
    pub enable_resize: ResizeDirectionSet,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    /// Suppresses all gestures and hides handles.
    pub disabled: bool,
    pub cursor_options: CursorOptions,
}

impl Default for DragResizeConfig {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            size: DEFAULT_SIZE,
            boundary: None,
            show_border: false,
            drag_selector: None,
            enable_resize: ResizeDirectionSet::default(),
            min_size: Some(DEFAULT_MIN_SIZE),
            max_size: None,
            disabled: false,
            cursor_options: CursorOptions::default(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl DragResizeConfig {
    /// Parse a camelCase JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text does not parse, or the first validation error.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected drag/resize config");
            return Err(e);
        }
        Ok(config)
    }

    /// Check that every configured number can take part in the geometry.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` for NaN or infinite values and `NegativeSize` for
    /// negative dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("position", &[self.position.x, self.position.y])?;
        dimensions("size", self.size)?;
        if let Some(b) = &self.boundary {
            finite("boundary", &[b.left, b.top, b.right, b.bottom])?;
        }
        if let Some(min) = self.min_size {
            dimensions("minSize", min)?;
        }
        if let Some(max) = self.max_size {
            dimensions("maxSize", max)?;
        }
        Ok(())
    }

    /// Min/max bounds as a single constraint.
    #[must_use]
    pub fn size_constraint(&self) -> SizeConstraint {
        SizeConstraint { min: self.min_size, max: self.max_size }
    }
}

fn finite(field: &'static str, values: &[f64]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn dimensions(field: &'static str, size: Size) -> Result<(), ConfigError> {
    finite(field, &[size.width, size.height])?;
    if size.width < 0.0 || size.height < 0.0 {
        return Err(ConfigError::NegativeSize { field });
    }
    Ok(())
}
