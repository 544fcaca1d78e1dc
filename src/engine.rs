use uuid::Uuid;

use crate::capture::{NoCapture, PointerCapture};
use crate::config::DragResizeConfig;
use crate::consts::CURSOR_DEFAULT;
use crate::event::{Callbacks, Event, Listener, dispatch};
use crate::geom::{Boundary, Position, Rect, Size, clamp_position, clamp_size};
use crate::gesture::classify_pointer_down;
use crate::hit::{HitTarget, ResizeDirection, ResizeDirectionSet, handle_rect, hit_test};
use crate::input::{InputState, InteractionMode, PointerDown, PointerEvent};
use crate::resize::resize_transform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Unique identifier for one controller instance.
pub type InstanceId = Uuid;

/// An active resize handle, laid out for the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub direction: ResizeDirection,
    pub cursor: String,
    pub rect: Rect,
}

/// State flags a rendering surface can style on.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub dragging: bool,
    pub resizing: bool,
    pub disabled: bool,
    pub hovered: bool,
}

/// Core controller state: all logic that does not depend on the host event plumbing.
///
/// Separated from `Controller` so it can be tested without a listener or
/// pointer capture. Every input handler returns the events to emit, in order.
#[derive(Debug, Clone)]
pub struct ControllerCore {
    id: InstanceId,
    config: DragResizeConfig,
    position: Position,
    size: Size,
    input: InputState,
    hovered: bool,
}

impl Default for ControllerCore {
    fn default() -> Self {
        Self::new(DragResizeConfig::default())
    }
}

impl ControllerCore {
    #[must_use]
    pub fn new(config: DragResizeConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: config.position,
            size: config.size,
            config,
            input: InputState::Idle,
            hovered: false,
        }
    }

    // --- Host sync ---

    /// Reconcile the shadow position/size with host-provided values.
    ///
    /// Applied only while idle; returns `false` and keeps the gesture's own
    /// geometry when a gesture is active.
    pub fn sync(&mut self, position: Position, size: Size) -> bool {
        if !self.input.is_idle() {
            tracing::debug!(instance = %self.id, mode = self.mode().name(), "host sync ignored mid-gesture");
            return false;
        }
        self.position = position;
        self.size = size;
        true
    }

    /// Replace the configuration.
    ///
    /// While idle this is also a sync point for `position`/`size`. Disabling
    /// during a gesture abandons it without end events.
    pub fn set_config(&mut self, config: DragResizeConfig) {
        if config.disabled && !self.input.is_idle() {
            self.cancel();
        }
        let (position, size) = (config.position, config.size);
        self.config = config;
        if self.input.is_idle() {
            self.sync(position, size);
        }
    }

    // --- Gestures ---

    /// Start a drag or resize if `down` classifies as one.
    pub fn on_pointer_down(&mut self, down: &PointerDown) -> Vec<Event> {
        if !self.input.is_idle() {
            tracing::debug!(instance = %self.id, "pointer-down ignored: gesture already active");
            return Vec::new();
        }
        let Some(gesture) = classify_pointer_down(down, &self.config) else {
            return Vec::new();
        };
        self.input = gesture.begin(down.event.point, self.position, self.size);
        tracing::debug!(
            instance = %self.id,
            mode = self.mode().name(),
            x = self.position.x,
            y = self.position.y,
            width = self.size.width,
            height = self.size.height,
            "gesture started"
        );
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { .. } => vec![Event::DragStart(self.position)],
            InputState::Resizing { .. } => vec![Event::ResizeStart { size: self.size, position: self.position }],
        }
    }

    /// Recompute geometry for one movement sample.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Vec<Event> {
        let boundary = self.config.boundary.as_ref();
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { snapshot } => {
                let raw = event.point - snapshot.grab_offset();
                let position = clamp_position(raw, self.size, boundary);
                tracing::trace!(instance = %self.id, x = position.x, y = position.y, "drag sample");
                self.position = position;
                vec![Event::PositionChange(position)]
            }
            InputState::Resizing { direction, snapshot } => {
                let (raw_size, raw_position) = resize_transform(direction, &snapshot, snapshot.delta(event.point));
                let size = clamp_size(raw_size, &self.config.size_constraint());
                let position = clamp_position(raw_position, size, boundary);
                tracing::trace!(
                    instance = %self.id,
                    direction = direction.name(),
                    width = size.width,
                    height = size.height,
                    "resize sample"
                );
                self.size = size;
                self.position = position;
                vec![Event::SizeChange(size)]
            }
        }
    }

    /// Finish the active gesture and return to idle.
    ///
    /// A resize always ends with a `PositionChange` after `ResizeEnd`, even
    /// when the position did not move.
    pub fn on_pointer_up(&mut self, _event: &PointerEvent) -> Vec<Event> {
        let events = match self.input {
            InputState::Idle => return Vec::new(),
            InputState::Dragging { .. } => vec![Event::DragEnd(self.position)],
            InputState::Resizing { .. } => vec![
                Event::ResizeEnd { size: self.size, position: self.position },
                Event::PositionChange(self.position),
            ],
        };
        tracing::debug!(
            instance = %self.id,
            mode = self.mode().name(),
            x = self.position.x,
            y = self.position.y,
            width = self.size.width,
            height = self.size.height,
            "gesture ended"
        );
        self.input = InputState::Idle;
        events
    }

    /// Abandon the active gesture without end events. Returns whether one was active.
    ///
    /// Geometry stays where the last sample left it.
    pub fn cancel(&mut self) -> bool {
        if self.input.is_idle() {
            return false;
        }
        tracing::debug!(instance = %self.id, mode = self.mode().name(), "gesture cancelled");
        self.input = InputState::Idle;
        true
    }

    // --- Pass-through ---

    pub fn on_pointer_enter(&mut self, event: &PointerEvent) -> Vec<Event> {
        self.hovered = true;
        vec![Event::MouseEnter(*event)]
    }

    pub fn on_pointer_leave(&mut self, event: &PointerEvent) -> Vec<Event> {
        self.hovered = false;
        vec![Event::MouseLeave(*event)]
    }

    #[must_use]
    pub fn on_click(&self, event: &PointerEvent) -> Vec<Event> {
        vec![Event::Click(*event)]
    }

    #[must_use]
    pub fn on_double_click(&self, event: &PointerEvent) -> Vec<Event> {
        vec![Event::DoubleClick(*event)]
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &DragResizeConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.input.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.input, InputState::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.input, InputState::Resizing { .. })
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Container cursor for the current mode.
    ///
    /// Only a drag changes it. Resize cursors belong to the handles, see [`Self::handles`].
    #[must_use]
    pub fn cursor(&self) -> &str {
        match self.input {
            InputState::Dragging { .. } => self.config.cursor_options.move_cursor(),
            InputState::Idle | InputState::Resizing { .. } => CURSOR_DEFAULT,
        }
    }

    /// Handle directions that are live: none while disabled.
    #[must_use]
    pub fn active_directions(&self) -> ResizeDirectionSet {
        if self.config.disabled {
            ResizeDirectionSet::default()
        } else {
            self.config.enable_resize
        }
    }

    /// Active handles in render order, positioned around the current rectangle.
    #[must_use]
    pub fn handles(&self) -> Vec<Handle> {
        let rect = self.rect();
        self.active_directions()
            .iter()
            .map(|direction| Handle {
                direction,
                cursor: self.config.cursor_options.cursor_for(direction).to_string(),
                rect: handle_rect(direction, &rect),
            })
            .collect()
    }

    /// Boundary rectangle to outline, when `show_border` is set and a boundary exists.
    #[must_use]
    pub fn boundary_outline(&self) -> Option<Rect> {
        if !self.config.show_border {
            return None;
        }
        self.config.boundary.as_ref().map(Boundary::to_rect)
    }

    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        VisualState {
            dragging: self.is_dragging(),
            resizing: self.is_resizing(),
            disabled: self.config.disabled,
            hovered: self.hovered,
        }
    }

    /// Resolve a raw coordinate against the current rectangle and live handles.
    #[must_use]
    pub fn hit_test(&self, point: Position) -> Option<HitTarget> {
        hit_test(point, &self.rect(), &self.active_directions())
    }
}

/// A controller wired to a listener and a global pointer capture.
///
/// Wraps `ControllerCore`, forwards every emitted event to the listener, and
/// holds the capture guard exactly while a gesture is active.
pub struct Controller<L = Callbacks, C = NoCapture>
where
    C: PointerCapture,
{
    core: ControllerCore,
    listener: L,
    capture: C,
    guard: Option<C::Guard>,
}

impl<L, C> std::fmt::Debug for Controller<L, C>
where
    L: std::fmt::Debug,
    C: PointerCapture,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("core", &self.core)
            .field("listener", &self.listener)
            .field("capturing", &self.guard.is_some())
            .finish_non_exhaustive()
    }
}

impl<L: Listener> Controller<L, NoCapture> {
    /// Controller for hosts that deliver every pointer event directly.
    #[must_use]
    pub fn uncaptured(config: DragResizeConfig, listener: L) -> Self {
        Self::new(config, listener, NoCapture)
    }
}

impl<L: Listener, C: PointerCapture> Controller<L, C> {
    #[must_use]
    pub fn new(config: DragResizeConfig, listener: L, capture: C) -> Self {
        Self { core: ControllerCore::new(config), listener, capture, guard: None }
    }

    // --- Delegated host sync ---

    pub fn sync(&mut self, position: Position, size: Size) -> bool {
        self.core.sync(position, size)
    }

    pub fn set_config(&mut self, config: DragResizeConfig) {
        self.core.set_config(config);
        self.settle_capture();
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, down: &PointerDown) {
        let events = self.core.on_pointer_down(down);
        self.emit(&events);
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let events = self.core.on_pointer_move(event);
        self.emit(&events);
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        let events = self.core.on_pointer_up(event);
        self.emit(&events);
    }

    pub fn on_pointer_enter(&mut self, event: &PointerEvent) {
        let events = self.core.on_pointer_enter(event);
        self.emit(&events);
    }

    pub fn on_pointer_leave(&mut self, event: &PointerEvent) {
        let events = self.core.on_pointer_leave(event);
        self.emit(&events);
    }

    pub fn on_click(&mut self, event: &PointerEvent) {
        let events = self.core.on_click(event);
        self.emit(&events);
    }

    pub fn on_double_click(&mut self, event: &PointerEvent) {
        let events = self.core.on_double_click(event);
        self.emit(&events);
    }

    /// Forced reset: abandon the gesture and release the capture.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.core.cancel();
        self.settle_capture();
        was_active
    }

    // --- Queries ---

    #[must_use]
    pub fn core(&self) -> &ControllerCore {
        &self.core
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Whether the global pointer subscription is currently held.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.guard.is_some()
    }

    fn emit(&mut self, events: &[Event]) {
        self.settle_capture();
        dispatch(&mut self.listener, events);
    }

    /// Hold the capture guard iff a gesture is active.
    fn settle_capture(&mut self) {
        let active = !self.core.input().is_idle();
        if active && self.guard.is_none() {
            tracing::trace!(instance = %self.core.id(), "pointer capture acquired");
            self.guard = Some(self.capture.acquire());
        } else if !active && self.guard.is_some() {
            tracing::trace!(instance = %self.core.id(), "pointer capture released");
            self.guard = None;
        }
    }
}
