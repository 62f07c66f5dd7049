//! ddlayouts - drag and drop reordering for layout containers
//!
//! This crate provides the logic behind reorderable layouts:
//! - Drop position resolution (which child, which zone)
//! - Drag and drop configuration with incremental state sync
//! - Drag filters deciding which children may be dragged
//! - Transferable and target detail carriers handed to drop handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use ddlayouts::{ComponentId, DraggableContainer, DropLocation, LayoutKind, MouseEventDetails, MouseEventType, Rect};
//! use ddlayouts_core::alloc::HashMap;
//!
//! let mut layout = DraggableContainer::new(ComponentId::new("layout"), LayoutKind::VerticalLayout);
//! let a = ComponentId::new("a");
//! let b = ComponentId::new("b");
//! layout.add_child(a).unwrap();
//! layout.add_child(b).unwrap();
//!
//! let mut geometry = HashMap::new();
//! geometry.insert(a, Rect::new(0.0, 0.0, 100.0, 10.0));
//! geometry.insert(b, Rect::new(0.0, 10.0, 100.0, 10.0));
//!
//! let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 11);
//! let result = layout.resolve_drop(&geometry, mouse);
//! assert_eq!(result.over_index(), Some(1));
//! assert_eq!(result.location(), DropLocation::Top);
//! ```

pub mod component;
pub mod config;
pub mod container;
pub mod details;
pub mod drag;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod handler;
pub mod location;
pub mod mouse;
pub mod protocol;
pub mod resolver;
pub mod sync;
pub mod transfer;
pub mod versioned;

pub use component::{Capabilities, Component, ComponentId, DragSource, DropTarget, Shimmable};
pub use config::{ConfigFields, DropConfiguration, LayoutDragMode};
pub use container::{DraggableContainer, GeometryProvider, LayoutKind};
pub use details::{DropLocationResult, Over, RawData, TargetDetails};
pub use drag::{DRAG_THRESHOLD, DragManager, DragState};
pub use error::{ConfigError, DecodeError, LayoutError};
pub use filter::{AllowAll, DragFilter, SharedFilter};
pub use geometry::{Axis, Rect};
pub use handler::{AcceptAll, AcceptCriterion, DragAndDropEvent, DropHandler, DropOutcome, SourceIsTarget};
pub use location::{DropLocation, Zone};
pub use mouse::{MouseButton, MouseEventDetails, MouseEventType};
pub use protocol::Payload;
pub use resolver::{DropRatio, DropResolver};
pub use sync::{ClientState, StateDiff};
pub use transfer::Transferable;
pub use versioned::Versioned;
