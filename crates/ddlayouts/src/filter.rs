//! Drag filters deciding which children may start a drag.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::component::ComponentId;

/// Predicate gating which children can be dragged.
///
/// Evaluated when a drag gesture starts, never during drop resolution.
/// Closures of type `Fn(ComponentId) -> bool` implement it directly.
pub trait DragFilter: Send + Sync {
    fn is_draggable(&self, child: ComponentId) -> bool;
}

/// Filter that lets every child be dragged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl DragFilter for AllowAll {
    fn is_draggable(&self, _child: ComponentId) -> bool {
        true
    }
}

impl<F> DragFilter for F
where
    F: Fn(ComponentId) -> bool + Send + Sync,
{
    fn is_draggable(&self, child: ComponentId) -> bool {
        self(child)
    }
}

static ALL: LazyLock<SharedFilter> = LazyLock::new(|| SharedFilter::new(AllowAll));

/// Reference counted filter handle.
///
/// Two handles are equal when they point at the same filter instance, which
/// is what configuration setters use to suppress no-op changes.
#[derive(Clone)]
pub struct SharedFilter(Arc<dyn DragFilter>);

impl SharedFilter {
    pub fn new(filter: impl DragFilter + 'static) -> Self {
        Self(Arc::new(filter))
    }

    /// The shared [`AllowAll`] instance.
    pub fn all() -> Self {
        ALL.clone()
    }

    pub fn is_draggable(&self, child: ComponentId) -> bool {
        self.0.is_draggable(child)
    }
}

impl Default for SharedFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl PartialEq for SharedFilter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == *ALL {
            f.write_str("SharedFilter(ALL)")
        } else {
            write!(f, "SharedFilter({:p})", Arc::as_ptr(&self.0))
        }
    }
}

impl From<Arc<dyn DragFilter>> for SharedFilter {
    fn from(filter: Arc<dyn DragFilter>) -> Self {
        Self(filter)
    }
}
