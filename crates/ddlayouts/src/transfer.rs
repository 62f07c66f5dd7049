//! Descriptor of the component being dragged.

use serde_json::Value;

use crate::component::ComponentId;
use crate::details::RawData;
use crate::error::DecodeError;
use crate::mouse::MouseEventDetails;
use crate::protocol;

/// What is being dragged: a child of a source container.
///
/// Built once when the drag starts and consumed by the drop handler. It is
/// deliberately not `Clone`.
#[derive(Debug, PartialEq)]
pub struct Transferable {
    source_container: ComponentId,
    source_index: usize,
    component: ComponentId,
    raw: RawData,
}

impl Transferable {
    /// Transferable for the child at `source_index`, which is `component`.
    ///
    /// The drag index is recorded in `raw` so the payload can be replayed on
    /// the other side.
    pub fn new(
        source_container: ComponentId,
        source_index: usize,
        component: ComponentId,
        mut raw: RawData,
    ) -> Self {
        raw.insert(protocol::DRAG_INDEX.to_string(), Value::from(source_index));
        Self {
            source_container,
            source_index,
            component,
            raw,
        }
    }

    /// Rebuild a transferable from a drag start payload against the source
    /// container's current children.
    ///
    /// Unlike drop indices, a drag always starts on a child, so a missing or
    /// invalid index is an error.
    pub fn from_raw(
        source_container: ComponentId,
        children: &[ComponentId],
        raw: RawData,
    ) -> Result<Self, DecodeError> {
        let invalid = || DecodeError::InvalidValue {
            key: protocol::DRAG_INDEX.to_string(),
            expected: "the index of an existing child",
        };

        let index = raw
            .get(protocol::DRAG_INDEX)
            .ok_or(DecodeError::MissingKey {
                key: protocol::DRAG_INDEX,
            })?
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(invalid)?;
        let component = *children.get(index).ok_or_else(invalid)?;

        Ok(Self {
            source_container,
            source_index: index,
            component,
            raw,
        })
    }

    pub fn source_container(&self) -> ComponentId {
        self.source_container
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// The dragged component.
    pub fn component(&self) -> ComponentId {
        self.component
    }

    pub fn raw(&self) -> &RawData {
        &self.raw
    }

    pub fn data(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Mouse-down event that started the drag, if recorded.
    pub fn mouse_down(&self) -> Result<Option<MouseEventDetails>, DecodeError> {
        match self.raw.get(protocol::MOUSE_DOWN) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => MouseEventDetails::deserialize(s).map(Some),
            Some(_) => Err(DecodeError::InvalidValue {
                key: protocol::MOUSE_DOWN.to_string(),
                expected: "a string",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse::MouseEventType;

    #[test]
    fn test_new_records_drag_index() {
        let layout = ComponentId::new("layout");
        let child = ComponentId::new("b");
        let transferable = Transferable::new(layout, 1, child, protocol::payload());

        assert_eq!(transferable.source_container(), layout);
        assert_eq!(transferable.source_index(), 1);
        assert_eq!(transferable.component(), child);
        assert_eq!(transferable.data(protocol::DRAG_INDEX), Some(&Value::from(1)));
        assert_eq!(transferable.mouse_down(), Ok(None));
    }

    #[test]
    fn test_from_raw() {
        let layout = ComponentId::new("layout");
        let children = [ComponentId::new("a"), ComponentId::new("b")];
        let mouse = MouseEventDetails::at(MouseEventType::MouseDown, 4, 8);

        let mut raw = protocol::payload();
        raw.insert(protocol::DRAG_INDEX.to_string(), Value::from(1));
        raw.insert(protocol::MOUSE_DOWN.to_string(), Value::from(mouse.serialize()));

        let transferable = Transferable::from_raw(layout, &children, raw).unwrap();
        assert_eq!(transferable.component(), children[1]);
        assert_eq!(transferable.mouse_down(), Ok(Some(mouse)));
    }

    #[test]
    fn test_from_raw_rejects_bad_index() {
        let layout = ComponentId::new("layout");
        let children = [ComponentId::new("a")];

        let err = Transferable::from_raw(layout, &children, protocol::payload()).unwrap_err();
        assert_eq!(err, DecodeError::MissingKey { key: protocol::DRAG_INDEX });

        let mut raw = protocol::payload();
        raw.insert(protocol::DRAG_INDEX.to_string(), Value::from(5));
        assert!(matches!(
            Transferable::from_raw(layout, &children, raw),
            Err(DecodeError::InvalidValue { .. })
        ));
    }
}
