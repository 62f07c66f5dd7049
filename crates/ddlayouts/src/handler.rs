//! Drop handlers and accept criteria supplied by the host application.

use crate::details::TargetDetails;
use crate::transfer::Transferable;

/// A drop ready for the drop handler.
#[derive(Debug)]
pub struct DragAndDropEvent {
    transferable: Transferable,
    details: TargetDetails,
}

impl DragAndDropEvent {
    pub fn new(transferable: Transferable, details: TargetDetails) -> Self {
        Self {
            transferable,
            details,
        }
    }

    pub fn transferable(&self) -> &Transferable {
        &self.transferable
    }

    pub fn target_details(&self) -> &TargetDetails {
        &self.details
    }

    pub fn into_parts(self) -> (Transferable, TargetDetails) {
        (self.transferable, self.details)
    }
}

/// Decides whether a drop is accepted.
///
/// Closures of type `Fn(&DragAndDropEvent) -> bool` implement it directly.
pub trait AcceptCriterion: Send + Sync {
    fn accepts(&self, event: &DragAndDropEvent) -> bool;
}

/// Accepts every drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AcceptCriterion for AcceptAll {
    fn accepts(&self, _event: &DragAndDropEvent) -> bool {
        true
    }
}

/// Accepts only drops whose source container is the drop target, i.e.
/// reordering within one container.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceIsTarget;

impl AcceptCriterion for SourceIsTarget {
    fn accepts(&self, event: &DragAndDropEvent) -> bool {
        event.transferable.source_container() == event.details.target()
    }
}

impl<F> AcceptCriterion for F
where
    F: Fn(&DragAndDropEvent) -> bool + Send + Sync,
{
    fn accepts(&self, event: &DragAndDropEvent) -> bool {
        self(event)
    }
}

/// Host supplied handler receiving accepted drops.
///
/// What the handler does with a drop (moving children, inserting new ones)
/// is up to the application.
pub trait DropHandler: Send + Sync {
    fn accept_criterion(&self) -> &dyn AcceptCriterion;

    fn on_drop(&mut self, event: DragAndDropEvent);
}

/// Outcome of delivering a drop to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The criterion accepted the drop and the handler ran.
    Dropped,
    /// The criterion rejected the drop.
    Rejected,
    /// The container has no handler or is disabled.
    NoHandler,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;
    use crate::details::DropLocationResult;
    use crate::location::DropLocation;
    use crate::mouse::MouseEventDetails;
    use crate::protocol;

    fn event(source: &str, target: &str) -> DragAndDropEvent {
        let source = ComponentId::new(source);
        let target = ComponentId::new(target);
        let child = ComponentId::new("child");
        let transferable = Transferable::new(source, 0, child, protocol::payload());
        let raw = DropLocationResult::over_container(target, DropLocation::Bottom, MouseEventDetails::default())
            .to_raw();
        let details = TargetDetails::from_raw(raw, target, &[]).unwrap();
        DragAndDropEvent::new(transferable, details)
    }

    #[test]
    fn test_source_is_target() {
        assert!(SourceIsTarget.accepts(&event("layout", "layout")));
        assert!(!SourceIsTarget.accepts(&event("left", "right")));
        assert!(AcceptAll.accepts(&event("left", "right")));
    }

    #[test]
    fn test_closure_criterion() {
        let top_only = |event: &DragAndDropEvent| event.target_details().drop_location() == DropLocation::Top;
        assert!(!top_only.accepts(&event("a", "a")));
    }
}
