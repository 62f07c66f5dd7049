//! Drop outcomes and their decoding from raw drop payloads.

use serde_json::Value;
use tracing::warn;

use crate::component::ComponentId;
use crate::error::DecodeError;
use crate::location::{DropLocation, Zone};
use crate::mouse::MouseEventDetails;
use crate::protocol::{self, Payload};

/// Raw drop or drag payload as received from the transport.
pub type RawData = Payload;

/// What a drop landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Over {
    /// A child of the target container.
    Child(ComponentId),
    /// The container itself, e.g. empty space after the last child.
    Container(ComponentId),
}

impl Over {
    pub fn component(&self) -> ComponentId {
        match self {
            Over::Child(id) | Over::Container(id) => *id,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Over::Container(_))
    }
}

/// Result of resolving a drop.
///
/// `over_index` is set exactly when `over` is a child.
#[derive(Debug, Clone, PartialEq)]
pub struct DropLocationResult {
    over_index: Option<usize>,
    over: Over,
    location: DropLocation,
    mouse: MouseEventDetails,
}

impl DropLocationResult {
    /// Drop over the child `child` at `index`.
    pub fn over_child(
        index: usize,
        child: ComponentId,
        location: DropLocation,
        mouse: MouseEventDetails,
    ) -> Self {
        Self {
            over_index: Some(index),
            over: Over::Child(child),
            location,
            mouse,
        }
    }

    /// Drop over no specific child of `container`.
    pub fn over_container(
        container: ComponentId,
        location: DropLocation,
        mouse: MouseEventDetails,
    ) -> Self {
        Self {
            over_index: None,
            over: Over::Container(container),
            location,
            mouse,
        }
    }

    pub fn over_index(&self) -> Option<usize> {
        self.over_index
    }

    /// Index as carried on the wire, `-1` when over no child.
    pub fn over_index_raw(&self) -> i64 {
        self.over_index.map_or(-1, |index| index as i64)
    }

    pub fn over(&self) -> Over {
        self.over
    }

    /// The child dropped over, or the container when there is none.
    pub fn over_component(&self) -> ComponentId {
        self.over.component()
    }

    pub fn location(&self) -> DropLocation {
        self.location
    }

    pub fn mouse(&self) -> &MouseEventDetails {
        &self.mouse
    }

    /// Index at which a reordering handler should insert the dropped
    /// component in a container of `len` children.
    ///
    /// Trailing drops insert after the child; leading and middle drops take
    /// its place. Drops over the container append.
    pub fn insertion_index(&self, len: usize) -> usize {
        match self.over_index {
            Some(index) if self.location.zone() == Zone::Trailing => (index + 1).min(len),
            Some(index) => index.min(len),
            None => len,
        }
    }

    /// Encode into the raw payload the peer sends on drop.
    pub fn to_raw(&self) -> RawData {
        let mut raw = protocol::payload();
        raw.insert(protocol::DROP_INDEX.to_string(), Value::from(self.over_index_raw()));
        raw.insert(
            protocol::DROP_LOCATION.to_string(),
            Value::from(self.location.token()),
        );
        raw.insert(
            protocol::MOUSE_EVENT.to_string(),
            Value::from(self.mouse.serialize()),
        );
        raw
    }
}

/// Details of a drop delivered to a drop handler.
///
/// Keeps the raw payload around so handlers can read extra keys.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDetails {
    target: ComponentId,
    result: DropLocationResult,
    raw: RawData,
}

impl TargetDetails {
    /// Decode a drop payload for `target`, whose current children are
    /// `children`.
    ///
    /// A missing, malformed or out of range drop index falls back to the
    /// container. An unknown location token or an unparsable mouse event is
    /// an error.
    pub fn from_raw(
        raw: RawData,
        target: ComponentId,
        children: &[ComponentId],
    ) -> Result<Self, DecodeError> {
        let location: DropLocation = required_str(&raw, protocol::DROP_LOCATION)?.parse()?;
        let mouse = MouseEventDetails::deserialize(required_str(&raw, protocol::MOUSE_EVENT)?)?;

        let result = match over_index(&raw, children.len()) {
            Some(index) => {
                DropLocationResult::over_child(index, children[index], location, mouse)
            }
            None => DropLocationResult::over_container(target, location, mouse),
        };

        Ok(Self {
            target,
            result,
            raw,
        })
    }

    /// The container the drop was made on.
    pub fn target(&self) -> ComponentId {
        self.target
    }

    pub fn result(&self) -> &DropLocationResult {
        &self.result
    }

    pub fn into_result(self) -> DropLocationResult {
        self.result
    }

    pub fn over_component(&self) -> ComponentId {
        self.result.over_component()
    }

    pub fn over_index(&self) -> Option<usize> {
        self.result.over_index()
    }

    pub fn drop_location(&self) -> DropLocation {
        self.result.location()
    }

    pub fn mouse_event(&self) -> &MouseEventDetails {
        self.result.mouse()
    }

    /// Raw payload value for `key`.
    pub fn data(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }
}

fn required_str<'a>(raw: &'a RawData, key: &'static str) -> Result<&'a str, DecodeError> {
    match raw.get(key) {
        None | Some(Value::Null) => Err(DecodeError::MissingKey { key }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::InvalidValue {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

fn over_index(raw: &RawData, len: usize) -> Option<usize> {
    let index = match raw.get(protocol::DROP_INDEX)? {
        Value::Null => return None,
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let Some(index) = index else {
        warn!(value = ?raw.get(protocol::DROP_INDEX), "Malformed drop index, falling back to container");
        return None;
    };

    usize::try_from(index).ok().filter(|&index| index < len)
}
