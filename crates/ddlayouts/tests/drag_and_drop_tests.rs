//! End-to-end drag and drop flows through a container and its drop handler.

use std::sync::{Arc, Mutex};

use ddlayouts::protocol;
use ddlayouts::{
    AcceptAll, AcceptCriterion, Capabilities, Component, ComponentId, DecodeError, DragAndDropEvent,
    DragManager, DragSource, DraggableContainer, DropHandler, DropLocation, DropOutcome, DropTarget,
    LayoutKind, MouseEventDetails, MouseEventType, Rect, SharedFilter, SourceIsTarget, Transferable,
};
use ddlayouts_core::alloc::HashMap;
use ddlayouts_core::math::Vec2;
use serde_json::Value;

/// Drop recorded by [`RecordingHandler`]: dragged component, target child and location.
type Recorded = (ComponentId, Option<usize>, DropLocation, usize);

struct RecordingHandler<C> {
    criterion: C,
    drops: Arc<Mutex<Vec<Recorded>>>,
}

impl<C: AcceptCriterion> DropHandler for RecordingHandler<C> {
    fn accept_criterion(&self) -> &dyn AcceptCriterion {
        &self.criterion
    }

    fn on_drop(&mut self, event: DragAndDropEvent) {
        let details = event.target_details();
        self.drops.lock().unwrap().push((
            event.transferable().component(),
            details.over_index(),
            details.drop_location(),
            details.result().insertion_index(3),
        ));
    }
}

fn recording<C: AcceptCriterion>(criterion: C) -> (RecordingHandler<C>, Arc<Mutex<Vec<Recorded>>>) {
    let drops = Arc::new(Mutex::new(Vec::new()));
    let handler = RecordingHandler {
        criterion,
        drops: drops.clone(),
    };
    (handler, drops)
}

fn children() -> [ComponentId; 3] {
    [ComponentId::new("a"), ComponentId::new("b"), ComponentId::new("c")]
}

fn layout(id: &str) -> DraggableContainer {
    let mut layout = DraggableContainer::new(ComponentId::new(id), LayoutKind::VerticalLayout);
    for child in children() {
        layout.add_child(child).unwrap();
    }
    layout.set_drag_mode(ddlayouts::LayoutDragMode::Clone);
    layout
}

fn geometry() -> HashMap<ComponentId, Rect> {
    children()
        .into_iter()
        .enumerate()
        .map(|(i, child)| (child, Rect::new(0.0, i as f32 * 10.0, 100.0, 10.0)))
        .collect()
}

fn drag(source: &DraggableContainer, index: usize) -> Transferable {
    let mut manager = DragManager::new();
    assert!(manager.start_drag(source, index, MouseEventDetails::at(MouseEventType::MouseDown, 50, 5)));
    manager.update(Vec2::new(50.0, 20.0));
    assert!(manager.is_dragging());
    manager.end_drag().unwrap()
}

#[test]
fn test_reorder_within_container() {
    let (handler, drops) = recording(SourceIsTarget);
    let mut layout = layout("layout").with_drop_handler(handler);

    let transferable = drag(&layout, 0);
    let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 19);
    let raw = layout.resolve_drop(&geometry(), mouse).to_raw();

    assert_eq!(layout.handle_drop(raw, transferable), Ok(DropOutcome::Dropped));
    assert_eq!(
        drops.lock().unwrap().as_slice(),
        &[(ComponentId::new("a"), Some(1), DropLocation::Bottom, 2)]
    );
}

#[test]
fn test_criterion_rejects_foreign_drop() {
    let (handler, drops) = recording(SourceIsTarget);
    let source = layout("left");
    let mut target = layout("right").with_drop_handler(handler);

    let transferable = drag(&source, 2);
    let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 5);
    let raw = target.resolve_drop(&geometry(), mouse).to_raw();

    assert_eq!(target.handle_drop(raw, transferable), Ok(DropOutcome::Rejected));
    assert!(drops.lock().unwrap().is_empty());
}

#[test]
fn test_drop_below_children_appends() {
    let (handler, drops) = recording(AcceptAll);
    let source = layout("left");
    let mut target = layout("right").with_drop_handler(handler);

    let transferable = drag(&source, 1);
    let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 80);
    let raw = target.resolve_drop(&geometry(), mouse).to_raw();

    assert_eq!(target.handle_drop(raw, transferable), Ok(DropOutcome::Dropped));
    assert_eq!(
        drops.lock().unwrap().as_slice(),
        &[(ComponentId::new("b"), None, DropLocation::Bottom, 3)]
    );
}

#[test]
fn test_no_handler_or_disabled() {
    let source = layout("source");
    let mut target = layout("target");
    let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 5);

    let raw = target.resolve_drop(&geometry(), mouse).to_raw();
    assert_eq!(target.handle_drop(raw, drag(&source, 0)), Ok(DropOutcome::NoHandler));

    let (handler, drops) = recording(AcceptAll);
    target.set_drop_handler(Some(Box::new(handler)));
    target.set_enabled(false);
    let raw = target.resolve_drop(&geometry(), mouse).to_raw();
    assert_eq!(target.handle_drop(raw, drag(&source, 0)), Ok(DropOutcome::NoHandler));
    assert!(drops.lock().unwrap().is_empty());
}

#[test]
fn test_undecodable_drop_is_an_error() {
    let (handler, drops) = recording(AcceptAll);
    let source = layout("source");
    let mut target = layout("target").with_drop_handler(handler);

    let mut raw = protocol::payload();
    raw.insert(protocol::DROP_INDEX.to_string(), Value::from(0));
    raw.insert(protocol::DROP_LOCATION.to_string(), Value::from("SIDEWAYS"));
    raw.insert(
        protocol::MOUSE_EVENT.to_string(),
        Value::from(MouseEventDetails::default().serialize()),
    );

    assert_eq!(
        target.handle_drop(raw, drag(&source, 0)),
        Err(DecodeError::UnknownDropLocation {
            token: "SIDEWAYS".to_string()
        })
    );
    assert!(drops.lock().unwrap().is_empty());
}

#[test]
fn test_filtered_child_cannot_be_dragged() {
    let mut source = layout("source");
    let pinned = ComponentId::new("b");
    source.set_drag_filter(SharedFilter::new(move |child: ComponentId| child != pinned));

    let mut manager = DragManager::new();
    let mouse = MouseEventDetails::at(MouseEventType::MouseDown, 50, 15);
    assert!(!manager.start_drag(&source, 1, mouse));
    assert!(manager.start_drag(&source, 2, mouse));
}

#[test]
fn test_transferable_replays_on_source() {
    let source = layout("source");
    let transferable = drag(&source, 2);

    let replayed = source.transferable(transferable.raw().clone()).unwrap();
    assert_eq!(replayed, transferable);
    assert_eq!(replayed.component(), ComponentId::new("c"));
}

#[test]
fn test_capabilities_gate_queries() {
    let mut layout = layout("plain").with_capabilities(Capabilities::DRAG_SOURCE);
    assert!(layout.as_drop_target().is_none());
    assert!(layout.as_drag_source().is_some_and(|source| source.can_drag(0)));

    let (handler, _drops) = recording(AcceptAll);
    layout.set_drop_handler(Some(Box::new(handler)));
    let mouse = MouseEventDetails::at(MouseEventType::MouseUp, 50, 5);
    let raw = layout.resolve_drop(&geometry(), mouse).to_raw();
    let transferable = drag(&layout, 0);
    assert_eq!(layout.handle_drop(raw, transferable), Ok(DropOutcome::NoHandler));
}
