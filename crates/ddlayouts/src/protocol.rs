//! Keys of the string keyed payloads exchanged with the peer.
//!
//! Payload values are opaque JSON values; each key documents the shape it
//! carries.

use ddlayouts_core::alloc::RandomState;
use indexmap::IndexMap;
use serde_json::Value;

/// Ordered string keyed payload, as delivered by the transport.
pub type Payload = IndexMap<String, Value, RandomState>;

/// Index of the child the drop was made over, `-1` for none (integer or
/// numeric string).
pub const DROP_INDEX: &str = "drop-index";

/// Drop location token, e.g. `"TOP"` (string).
pub const DROP_LOCATION: &str = "drop-location";

/// Serialized mouse event of the drop (string).
pub const MOUSE_EVENT: &str = "mouse-event";

/// Index of the child a drag started on (integer).
pub const DRAG_INDEX: &str = "drag-index";

/// Serialized mouse-down event that started the drag (string).
pub const MOUSE_DOWN: &str = "mouse-down";

/// Drop ratio of the container (number).
pub const DROP_RATIO: &str = "drop-ratio";

/// Drag mode ordinal (integer).
pub const DRAG_MODE: &str = "drag-mode";

/// Whether embedded frames are shimmed during drags (boolean).
pub const SHIM_ENABLED: &str = "shim-enabled";

/// Per-child draggability flags in child order (array of booleans).
pub const DRAG_FILTER: &str = "drag-filter";

/// Whether the container currently accepts drops (boolean).
pub const DROP_ENABLED: &str = "drop-enabled";

/// Empty payload.
pub fn payload() -> Payload {
    Payload::default()
}
