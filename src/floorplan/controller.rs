//! Pan / Zoom / Selection Controller
//!
//! [`ViewState`] is a plain value updated through reducer-style transitions.
//! [`InteractionController`] owns it and turns pointer gestures into those
//! transitions.

use eframe::egui::{Pos2, Rect, Vec2};

use super::hit::hit_test;
use super::model::{LayoutData, LayoutObject};
use crate::config::ViewerConfig;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom, pan and selection for one viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// User zoom multiplier, always within [`MIN_ZOOM`, `MAX_ZOOM`]
    pub scale: f32,

    /// Pixel translation applied after centering
    pub offset: Vec2,

    pub selected_id: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            selected_id: None,
        }
    }
}

impl ViewState {
    /// Add `delta` to the zoom, clamped
    pub fn apply_zoom(self, delta: f32) -> Self {
        let scale = self.scale + delta;
        self.with_scale(scale)
    }

    /// Multiply the zoom by `factor`, clamped
    pub fn apply_zoom_factor(self, factor: f32) -> Self {
        let scale = self.scale * factor;
        self.with_scale(scale)
    }

    fn with_scale(self, scale: f32) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            self.scale
        };
        Self { scale, ..self }
    }

    /// Replace the pan offset
    pub fn apply_pan(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    pub fn select(self, selected_id: Option<String>) -> Self {
        Self { selected_id, ..self }
    }

    /// Zoom 1.0, no pan. Selection is kept.
    pub fn reset(self) -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            ..self
        }
    }

    /// The selected object, if it exists in `layout`
    pub fn selected_in<'a>(&self, layout: &'a LayoutData) -> Option<&'a LayoutObject> {
        self.selected_id.as_deref().and_then(|id| layout.object(id))
    }

    /// Whether `id` is the current selection
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// Result of a finished pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Released without passing the drag threshold
    Click,
    /// Pointer travelled far enough to pan
    Drag,
}

/// Where the controller is in a press/release sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Pending,
    Dragging,
}

/// An open pan gesture.
///
/// Not `Clone`: the controller holds the only one and [`DragSession::end`]
/// consumes it, so each session ends exactly once.
#[derive(Debug)]
pub struct DragSession {
    start_pointer: Pos2,
    start_offset: Vec2,
    threshold: f32,
    dragging: bool,
}

impl DragSession {
    fn new(start_pointer: Pos2, start_offset: Vec2, threshold: f32) -> Self {
        Self {
            start_pointer,
            start_offset,
            threshold,
            dragging: false,
        }
    }

    /// New pan offset for `pointer`, once the threshold has been passed
    fn update(&mut self, pointer: Pos2) -> Option<Vec2> {
        let delta = pointer - self.start_pointer;
        if !self.dragging && delta.length() > self.threshold {
            self.dragging = true;
        }
        self.dragging.then(|| self.start_offset + delta)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn end(self) -> GestureOutcome {
        if self.dragging {
            GestureOutcome::Drag
        } else {
            GestureOutcome::Click
        }
    }
}

/// Owns the [`ViewState`] of one viewer
#[derive(Debug)]
pub struct InteractionController {
    state: ViewState,
    drag: Option<DragSession>,
    suppress_click: bool,
    drag_threshold: f32,
    zoom_step: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            state: ViewState::default(),
            drag: None,
            suppress_click: false,
            drag_threshold: config.drag_threshold,
            zoom_step: config.zoom_step,
        }
    }

    /// Snapshot read by the renderer
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn update(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        self.state = f(std::mem::take(&mut self.state));
    }

    // --- Zoom ---

    /// Add `delta` to the zoom factor, clamped to [`MIN_ZOOM`, `MAX_ZOOM`]
    pub fn set_zoom(&mut self, delta: f32) {
        self.update(|s| s.apply_zoom(delta));
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(-self.zoom_step);
    }

    /// Multiplicative zoom (scroll wheel)
    pub fn zoom_by(&mut self, factor: f32) {
        self.update(|s| s.apply_zoom_factor(factor));
    }

    pub fn reset_view(&mut self) {
        self.update(ViewState::reset);
    }

    // --- Pan gesture ---

    /// Start a press. Any session still open is ended first.
    pub fn begin_pan(&mut self, pointer: Pos2) {
        if self.drag.is_some() {
            log::debug!("pan started while another was open; ending the old one");
            self.end_pan();
        }
        self.suppress_click = false;
        self.drag = Some(DragSession::new(
            pointer,
            self.state.offset,
            self.drag_threshold,
        ));
    }

    /// Pointer moved while pressed
    pub fn pan_to(&mut self, pointer: Pos2) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if let Some(offset) = session.update(pointer) {
            self.update(|s| s.apply_pan(offset));
        }
    }

    /// Pointer released. Returns `None` if no gesture was open.
    pub fn end_pan(&mut self) -> Option<GestureOutcome> {
        let outcome = self.drag.take()?.end();
        self.suppress_click = outcome == GestureOutcome::Drag;
        Some(outcome)
    }

    pub fn gesture_state(&self) -> GestureState {
        match &self.drag {
            None => GestureState::Idle,
            Some(s) if s.is_dragging() => GestureState::Dragging,
            Some(_) => GestureState::Pending,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.drag.is_some()
    }

    // --- Selection ---

    /// Select whatever is under `pointer` (or nothing). Ignored once right
    /// after a drag.
    pub fn handle_click(
        &mut self,
        pointer: Pos2,
        layout: Option<&LayoutData>,
        viewport: Rect,
        config: &ViewerConfig,
    ) {
        if std::mem::take(&mut self.suppress_click) {
            return;
        }
        let hit = hit_test(pointer, layout, &self.state, viewport, config);
        log::debug!("click at {:?} -> {:?}", pointer, hit);
        self.update(|s| s.select(hit));
    }

    pub fn select(&mut self, id: Option<String>) {
        self.update(|s| s.select(id));
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Currently selected object, if it is still part of `layout`
    pub fn selected_object<'a>(&self, layout: &'a LayoutData) -> Option<&'a LayoutObject> {
        self.state.selected_in(layout)
    }

    /// Drop a selection that no longer names an object in `layout`
    pub fn retain_selection(&mut self, layout: Option<&LayoutData>) {
        let stale = match (&self.state.selected_id, layout) {
            (Some(id), Some(layout)) => !layout.contains(id),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if stale {
            self.clear_selection();
        }
    }
}
