//! Layout containers with drag and drop support.
//!
//! One [`DraggableContainer`] type serves every layout variant. The variant
//! ([`LayoutKind`]) only picks the layout axis, the child limit and the
//! default [`Capabilities`]; the drag and drop behaviour is shared.

use std::fmt;

use ddlayouts_core::alloc::HashMap;
use tracing::{debug, trace};

use crate::component::{Capabilities, Component, ComponentId, DragSource, DropTarget, Shimmable};
use crate::config::{ConfigFields, DropConfiguration, LayoutDragMode};
use crate::details::{DropLocationResult, RawData, TargetDetails};
use crate::error::{ConfigError, DecodeError, LayoutError};
use crate::filter::SharedFilter;
use crate::geometry::{Axis, Rect};
use crate::handler::{DragAndDropEvent, DropHandler, DropOutcome};
use crate::mouse::MouseEventDetails;
use crate::resolver::DropResolver;
use crate::sync::StateDiff;
use crate::transfer::Transferable;

/// Layout variants a container can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Children stacked top to bottom.
    VerticalLayout,
    /// Children placed left to right.
    HorizontalLayout,
    /// Two panes, first on top.
    VerticalSplitPanel,
    /// Two panes, first on the left.
    HorizontalSplitPanel,
}

impl LayoutKind {
    pub fn axis(&self) -> Axis {
        match self {
            LayoutKind::VerticalLayout | LayoutKind::VerticalSplitPanel => Axis::Vertical,
            LayoutKind::HorizontalLayout | LayoutKind::HorizontalSplitPanel => Axis::Horizontal,
        }
    }

    /// Maximum number of children, None for unlimited.
    pub fn max_children(&self) -> Option<usize> {
        match self {
            LayoutKind::VerticalLayout | LayoutKind::HorizontalLayout => None,
            LayoutKind::VerticalSplitPanel | LayoutKind::HorizontalSplitPanel => Some(2),
        }
    }

    pub fn default_capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    pub fn debug_name(&self) -> &'static str {
        match self {
            LayoutKind::VerticalLayout => "VerticalLayout",
            LayoutKind::HorizontalLayout => "HorizontalLayout",
            LayoutKind::VerticalSplitPanel => "VerticalSplitPanel",
            LayoutKind::HorizontalSplitPanel => "HorizontalSplitPanel",
        }
    }
}

/// Supplies the current bounding box of components, from the rendering side.
pub trait GeometryProvider {
    fn bounds(&self, id: ComponentId) -> Option<Rect>;
}

impl GeometryProvider for HashMap<ComponentId, Rect> {
    fn bounds(&self, id: ComponentId) -> Option<Rect> {
        self.get(&id).copied()
    }
}

impl<F> GeometryProvider for F
where
    F: Fn(ComponentId) -> Option<Rect>,
{
    fn bounds(&self, id: ComponentId) -> Option<Rect> {
        self(id)
    }
}

/// A layout container whose children can be dragged and dropped.
pub struct DraggableContainer {
    id: ComponentId,
    kind: LayoutKind,
    capabilities: Capabilities,
    children: Vec<ComponentId>,
    enabled: bool,
    config: DropConfiguration,
    drop_handler: Option<Box<dyn DropHandler>>,
}

impl DraggableContainer {
    pub fn new(id: ComponentId, kind: LayoutKind) -> Self {
        Self {
            id,
            kind,
            capabilities: kind.default_capabilities(),
            children: Vec::new(),
            enabled: true,
            config: DropConfiguration::default(),
            drop_handler: None,
        }
    }

    /// Restrict or extend the exposed capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        let accepted = self.accepts_drops();
        self.capabilities = capabilities;
        self.drop_acceptance_changed(accepted);
        self
    }

    /// Start from the given configuration.
    pub fn with_config(mut self, config: DropConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn with_drop_handler(mut self, handler: impl DropHandler + 'static) -> Self {
        self.set_drop_handler(Some(Box::new(handler)));
        self
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn axis(&self) -> Axis {
        self.kind.axis()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn index_of(&self, child: ComponentId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    /// Append a child, returning its index.
    pub fn add_child(&mut self, child: ComponentId) -> Result<usize, LayoutError> {
        let index = self.children.len();
        self.insert_child(index, child)?;
        Ok(index)
    }

    pub fn insert_child(&mut self, index: usize, child: ComponentId) -> Result<(), LayoutError> {
        if let Some(limit) = self.kind.max_children()
            && self.children.len() >= limit
        {
            return Err(LayoutError::ChildLimit {
                kind: self.kind,
                limit,
            });
        }
        if self.children.contains(&child) {
            return Err(LayoutError::DuplicateChild(child));
        }
        if index > self.children.len() {
            return Err(LayoutError::IndexOutOfBounds {
                index,
                len: self.children.len(),
            });
        }
        self.children.insert(index, child);
        self.children_changed();
        Ok(())
    }

    /// Remove a child, returning the index it had.
    pub fn remove_child(&mut self, child: ComponentId) -> Option<usize> {
        let index = self.index_of(child)?;
        self.children.remove(index);
        self.children_changed();
        Some(index)
    }

    /// Move the child at `from` so it ends up at `to`.
    pub fn move_child(&mut self, from: usize, to: usize) -> Result<(), LayoutError> {
        let len = self.children.len();
        for index in [from, to] {
            if index >= len {
                return Err(LayoutError::IndexOutOfBounds { index, len });
            }
        }
        if from != to {
            let child = self.children.remove(from);
            self.children.insert(to, child);
            self.children_changed();
        }
        Ok(())
    }

    fn children_changed(&mut self) {
        // Filter flags are published per child position.
        self.config.mark(ConfigFields::DRAG_FILTER);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the container. A disabled container publishes no
    /// drag mode and delivers no drops. Returns `true` if the state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        let accepted = self.accepts_drops();
        self.enabled = enabled;
        self.config.mark(ConfigFields::DRAG_MODE);
        self.drop_acceptance_changed(accepted);
        debug!(container = %self.id, enabled, "Container enabled state changed");
        true
    }

    /// Whether drops are delivered: the container is enabled, exposes
    /// [`Capabilities::DROP_TARGET`] and has a drop handler.
    pub fn accepts_drops(&self) -> bool {
        self.enabled && self.capabilities.contains(Capabilities::DROP_TARGET) && self.drop_handler.is_some()
    }

    fn drop_acceptance_changed(&mut self, accepted: bool) {
        if self.accepts_drops() != accepted {
            self.config.mark(ConfigFields::DROP_ENABLED);
        }
    }

    pub fn config(&self) -> &DropConfiguration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DropConfiguration {
        &mut self.config
    }

    /// See [`DropConfiguration::set_drop_ratio`].
    pub fn set_drop_ratio(&mut self, ratio: f32) -> Result<bool, ConfigError> {
        self.config.set_drop_ratio(ratio)
    }

    /// Drag mode as published to the peer.
    pub fn published_drag_mode(&self) -> LayoutDragMode {
        if self.enabled {
            self.config.drag_mode()
        } else {
            LayoutDragMode::None
        }
    }

    pub fn resolver(&self) -> DropResolver {
        DropResolver::new(self.axis(), self.config.drop_ratio())
    }

    /// Children paired with their current bounds.
    ///
    /// Children the provider has no bounds for get an empty box, which never
    /// matches a drop but keeps indices aligned with the child sequence.
    pub fn candidates(&self, geometry: &dyn GeometryProvider) -> Vec<(ComponentId, Rect)> {
        self.children
            .iter()
            .map(|&child| (child, geometry.bounds(child).unwrap_or(Rect::ZERO)))
            .collect()
    }

    /// Resolve a drop at the event's client position against the current
    /// child geometry.
    pub fn resolve_drop(
        &self,
        geometry: &dyn GeometryProvider,
        mouse: MouseEventDetails,
    ) -> DropLocationResult {
        self.resolver().resolve(self.id, &self.candidates(geometry), mouse)
    }

    /// Collect pending configuration changes, if any.
    pub fn take_diff(&mut self) -> Option<StateDiff> {
        let fields = self.config.take_pending();
        if fields.is_empty() {
            return None;
        }
        trace!(container = %self.id, ?fields, "Collected state diff");
        Some(StateDiff::encode(
            &self.config,
            fields,
            self.enabled,
            self.accepts_drops(),
            &self.children,
        ))
    }

    /// Full state for a peer attaching for the first time.
    pub fn full_state(&self) -> StateDiff {
        StateDiff::encode(
            &self.config,
            ConfigFields::all(),
            self.enabled,
            self.accepts_drops(),
            &self.children,
        )
    }

    /// Deliver a drop payload to the drop handler.
    ///
    /// The handler only runs if its accept criterion accepts the drop.
    pub fn handle_drop(
        &mut self,
        raw: RawData,
        transferable: Transferable,
    ) -> Result<DropOutcome, DecodeError> {
        if !self.accepts_drops() {
            return Ok(DropOutcome::NoHandler);
        }
        let details = TargetDetails::from_raw(raw, self.id, &self.children)?;
        let Some(handler) = self.drop_handler.as_mut() else {
            return Ok(DropOutcome::NoHandler);
        };

        let event = DragAndDropEvent::new(transferable, details);
        if !handler.accept_criterion().accepts(&event) {
            debug!(container = %self.id, "Drop rejected by accept criterion");
            return Ok(DropOutcome::Rejected);
        }

        debug!(
            container = %self.id,
            over = %event.target_details().over_component(),
            location = %event.target_details().drop_location(),
            "Drop accepted"
        );
        handler.on_drop(event);
        Ok(DropOutcome::Dropped)
    }
}

impl fmt::Debug for DraggableContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableContainer")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("capabilities", &self.capabilities)
            .field("children", &self.children)
            .field("enabled", &self.enabled)
            .field("config", &self.config)
            .field("has_drop_handler", &self.drop_handler.is_some())
            .finish()
    }
}

impl Component for DraggableContainer {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn debug_name(&self) -> &str {
        self.kind.debug_name()
    }

    fn as_drag_source(&self) -> Option<&dyn DragSource> {
        self.capabilities
            .contains(Capabilities::DRAG_SOURCE)
            .then_some(self as &dyn DragSource)
    }

    fn as_drop_target(&self) -> Option<&dyn DropTarget> {
        self.capabilities
            .contains(Capabilities::DROP_TARGET)
            .then_some(self as &dyn DropTarget)
    }

    fn as_shimmable(&self) -> Option<&dyn Shimmable> {
        self.capabilities
            .contains(Capabilities::SHIMMABLE)
            .then_some(self as &dyn Shimmable)
    }

    fn as_drag_source_mut(&mut self) -> Option<&mut dyn DragSource> {
        if self.capabilities.contains(Capabilities::DRAG_SOURCE) {
            Some(self)
        } else {
            None
        }
    }

    fn as_drop_target_mut(&mut self) -> Option<&mut dyn DropTarget> {
        if self.capabilities.contains(Capabilities::DROP_TARGET) {
            Some(self)
        } else {
            None
        }
    }

    fn as_shimmable_mut(&mut self) -> Option<&mut dyn Shimmable> {
        if self.capabilities.contains(Capabilities::SHIMMABLE) {
            Some(self)
        } else {
            None
        }
    }
}

impl DragSource for DraggableContainer {
    fn drag_mode(&self) -> LayoutDragMode {
        self.config.drag_mode()
    }

    fn set_drag_mode(&mut self, mode: LayoutDragMode) -> bool {
        self.config.set_drag_mode(mode)
    }

    fn drag_filter(&self) -> &SharedFilter {
        self.config.drag_filter()
    }

    fn set_drag_filter(&mut self, filter: SharedFilter) -> bool {
        self.config.set_drag_filter(filter)
    }

    fn child_at(&self, index: usize) -> Option<ComponentId> {
        self.children.get(index).copied()
    }

    fn can_drag(&self, index: usize) -> bool {
        self.published_drag_mode() != LayoutDragMode::None
            && self
                .child_at(index)
                .is_some_and(|child| self.drag_filter().is_draggable(child))
    }

    fn transferable(&self, raw: RawData) -> Result<Transferable, DecodeError> {
        Transferable::from_raw(self.id, &self.children, raw)
    }
}

impl DropTarget for DraggableContainer {
    fn drop_handler(&self) -> Option<&dyn DropHandler> {
        self.drop_handler.as_deref()
    }

    fn set_drop_handler(&mut self, handler: Option<Box<dyn DropHandler>>) {
        if handler.is_none() && self.drop_handler.is_none() {
            return;
        }
        let accepted = self.accepts_drops();
        debug!(container = %self.id, present = handler.is_some(), "Drop handler replaced");
        self.drop_handler = handler;
        self.drop_acceptance_changed(accepted);
    }

    fn translate_drop_target_details(&self, raw: RawData) -> Result<TargetDetails, DecodeError> {
        TargetDetails::from_raw(raw, self.id, &self.children)
    }
}

impl Shimmable for DraggableContainer {
    fn set_shim(&mut self, shim: bool) -> bool {
        self.config.set_iframe_shims(shim)
    }

    fn is_shimmed(&self) -> bool {
        self.config.iframe_shims()
    }
}
