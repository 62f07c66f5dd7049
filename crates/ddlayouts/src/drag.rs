//! Drag gesture tracking.

use ddlayouts_core::math::Vec2;
use serde_json::Value;
use tracing::{debug, trace};

use crate::component::{ComponentId, DragSource};
use crate::mouse::MouseEventDetails;
use crate::protocol;
use crate::transfer::Transferable;

/// Drag threshold in pixels before a drag operation starts.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// State of an in-flight drag.
#[derive(Debug)]
pub struct DragState {
    /// What is being dragged.
    pub transferable: Transferable,
    /// Position where the drag started.
    pub start_pos: Vec2,
    /// Current drag position.
    pub current_pos: Vec2,
    /// Whether the drag threshold has been exceeded.
    pub is_active: bool,
}

impl DragState {
    pub fn new(transferable: Transferable, start_pos: Vec2) -> Self {
        Self {
            transferable,
            start_pos,
            current_pos: start_pos,
            is_active: false,
        }
    }

    /// Update the current position and check if threshold exceeded.
    pub fn update(&mut self, pos: Vec2) {
        self.current_pos = pos;
        if !self.is_active && DragManager::exceeds_threshold(self.start_pos, pos) {
            self.is_active = true;
        }
    }

    /// Get the drag delta from start.
    pub fn delta(&self) -> Vec2 {
        self.current_pos - self.start_pos
    }
}

/// Tracks at most one drag gesture at a time.
#[derive(Debug, Default)]
pub struct DragManager {
    drag_state: Option<DragState>,
}

impl DragManager {
    pub fn new() -> Self {
        Self { drag_state: None }
    }

    /// Start a drag on the child at `index` of `source`.
    ///
    /// Refused when the source does not allow dragging that child (drag mode
    /// is `None`, the index is out of range, or the drag filter rejects it).
    /// Any previous drag is discarded. Returns `true` if a drag is now
    /// pending.
    pub fn start_drag(&mut self, source: &dyn DragSource, index: usize, mouse_down: MouseEventDetails) -> bool {
        let Some(component) = source.child_at(index).filter(|_| source.can_drag(index)) else {
            trace!(source = %source.id(), index, "Drag refused");
            return false;
        };

        let mut raw = protocol::payload();
        raw.insert(protocol::MOUSE_DOWN.to_string(), Value::from(mouse_down.serialize()));
        let transferable = Transferable::new(source.id(), index, component, raw);

        debug!(source = %source.id(), index, %component, "Drag pending");
        self.drag_state = Some(DragState::new(transferable, mouse_down.client_position()));
        true
    }

    /// Update the current drag position.
    ///
    /// Returns true if there's a drag in flight.
    pub fn update(&mut self, pos: Vec2) -> bool {
        if let Some(ref mut state) = self.drag_state {
            let was_active = state.is_active;
            state.update(pos);
            if state.is_active && !was_active {
                debug!(component = %state.transferable.component(), "Drag started");
            }
            true
        } else {
            false
        }
    }

    /// Check if the threshold was exceeded and the drag is live.
    pub fn is_dragging(&self) -> bool {
        self.drag_state.as_ref().is_some_and(|s| s.is_active)
    }

    /// Check if there's a pending drag (mouse down but threshold not exceeded).
    pub fn has_pending_drag(&self) -> bool {
        self.drag_state.as_ref().is_some_and(|s| !s.is_active)
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    /// Component being dragged, if any.
    pub fn dragged_component(&self) -> Option<ComponentId> {
        self.drag_state.as_ref().map(|s| s.transferable.component())
    }

    /// Get the drag delta if the drag is live.
    pub fn drag_delta(&self) -> Option<Vec2> {
        self.drag_state
            .as_ref()
            .filter(|s| s.is_active)
            .map(|s| s.delta())
    }

    /// Abort the drag (escape key, pointer leaving the window). The
    /// transferable is discarded.
    pub fn cancel_drag(&mut self) {
        if self.drag_state.take().is_some() {
            debug!("Drag cancelled");
        }
    }

    /// Finish the drag, handing over the transferable for the drop.
    ///
    /// A drag that never passed the threshold was a click and yields None.
    pub fn end_drag(&mut self) -> Option<Transferable> {
        let state = self.drag_state.take()?;
        if state.is_active {
            debug!(component = %state.transferable.component(), "Drag ended");
            Some(state.transferable)
        } else {
            trace!("Drag released below threshold");
            None
        }
    }

    /// Check if a position exceeds the drag threshold from the start position.
    pub fn exceeds_threshold(start: Vec2, current: Vec2) -> bool {
        (current - start).length() >= DRAG_THRESHOLD
    }
}
