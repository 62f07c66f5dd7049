//! Component identity and drag and drop capability traits.
//!
//! Containers do not inherit drag and drop behaviour. They expose it through
//! capability query methods on [`Component`], the same way a host queries any
//! optional behaviour:
//!
//! ```rust,ignore
//! fn enable_dragging(component: &mut dyn Component) {
//!     if let Some(source) = component.as_drag_source_mut() {
//!         source.set_drag_mode(LayoutDragMode::Clone);
//!     }
//! }
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::config::LayoutDragMode;
use crate::details::{RawData, TargetDetails};
use crate::error::DecodeError;
use crate::filter::SharedFilter;
use crate::handler::DropHandler;
use crate::transfer::Transferable;

/// Opaque reference to a component in the host's component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Create an ID from a string key.
    ///
    /// Uses FNV-1a so the same key always yields the same ID.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

bitflags! {
    /// Drag and drop capabilities a container exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Children can be dragged out of the container.
        const DRAG_SOURCE = 0b001;
        /// Components can be dropped into the container.
        const DROP_TARGET = 0b010;
        /// Embedded frames are covered while a drag is in progress.
        const SHIMMABLE   = 0b100;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Base trait for components taking part in drag and drop.
pub trait Component: Send + Sync {
    fn id(&self) -> ComponentId;

    /// Name for logs and debugging.
    fn debug_name(&self) -> &str {
        "Component"
    }

    fn as_drag_source(&self) -> Option<&dyn DragSource> {
        None
    }

    fn as_drop_target(&self) -> Option<&dyn DropTarget> {
        None
    }

    fn as_shimmable(&self) -> Option<&dyn Shimmable> {
        None
    }

    fn as_drag_source_mut(&mut self) -> Option<&mut dyn DragSource> {
        None
    }

    fn as_drop_target_mut(&mut self) -> Option<&mut dyn DropTarget> {
        None
    }

    fn as_shimmable_mut(&mut self) -> Option<&mut dyn Shimmable> {
        None
    }
}

/// Capability: children can be dragged out of this component.
pub trait DragSource: Component {
    /// How dragging is visualized. [`LayoutDragMode::None`] disables it.
    fn drag_mode(&self) -> LayoutDragMode;

    /// Returns `true` if the mode changed.
    fn set_drag_mode(&mut self, mode: LayoutDragMode) -> bool;

    fn drag_filter(&self) -> &SharedFilter;

    /// Returns `true` if a different filter was installed.
    fn set_drag_filter(&mut self, filter: SharedFilter) -> bool;

    /// Child at `index`, if any.
    fn child_at(&self, index: usize) -> Option<ComponentId>;

    /// Whether a drag gesture may start on the child at `index`.
    fn can_drag(&self, index: usize) -> bool {
        self.drag_mode() != LayoutDragMode::None
            && self
                .child_at(index)
                .is_some_and(|child| self.drag_filter().is_draggable(child))
    }

    /// Rebuild the transferable described by a drag start payload.
    fn transferable(&self, raw: RawData) -> Result<Transferable, DecodeError>;
}

/// Capability: components can be dropped onto this component.
pub trait DropTarget: Component {
    fn drop_handler(&self) -> Option<&dyn DropHandler>;

    /// Install or remove the drop handler. `None` disables dropping.
    fn set_drop_handler(&mut self, handler: Option<Box<dyn DropHandler>>);

    /// Decode a drop payload into target details for this component.
    fn translate_drop_target_details(&self, raw: RawData) -> Result<TargetDetails, DecodeError>;
}

/// Capability: embedded frames can be covered during a drag.
pub trait Shimmable: Component {
    /// Returns `true` if the flag changed.
    fn set_shim(&mut self, shim: bool) -> bool;

    fn is_shimmed(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_is_stable() {
        assert_eq!(ComponentId::new("button-1"), ComponentId::new("button-1"));
        assert_ne!(ComponentId::new("button-1"), ComponentId::new("button-2"));
        assert_eq!(ComponentId::from_raw(7).as_u64(), 7);
    }

    #[test]
    fn test_default_capabilities() {
        let caps = Capabilities::default();
        assert!(caps.contains(Capabilities::DRAG_SOURCE | Capabilities::DROP_TARGET));
        assert!(caps.contains(Capabilities::SHIMMABLE));
    }
}
