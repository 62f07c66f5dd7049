//! Configuration synchronization between a container and its peer.
//!
//! The authoritative side collects pending field changes into a [`StateDiff`]
//! at each sync point. Several changes to one field between sync points are
//! coalesced: only the final value is sent. The receiving side mirrors the
//! state in a [`ClientState`].

use serde_json::Value;
use tracing::trace;

use crate::component::ComponentId;
use crate::config::{ConfigFields, DropConfiguration, LayoutDragMode};
use crate::error::DecodeError;
use crate::geometry::Axis;
use crate::protocol::{self, Payload};
use crate::resolver::{DropRatio, DropResolver};

/// Changed configuration fields encoded as a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDiff {
    fields: ConfigFields,
    values: Payload,
}

impl StateDiff {
    /// Encode `fields` of `config` for a container with `children`.
    ///
    /// A disabled container publishes [`LayoutDragMode::None`] whatever its
    /// configured mode. The drag filter is published as one draggability
    /// flag per child. `accepts_drops` is published as is.
    pub fn encode(
        config: &DropConfiguration,
        fields: ConfigFields,
        enabled: bool,
        accepts_drops: bool,
        children: &[ComponentId],
    ) -> Self {
        let mut values = protocol::payload();

        if fields.contains(ConfigFields::DRAG_MODE) {
            let mode = if enabled {
                config.drag_mode()
            } else {
                LayoutDragMode::None
            };
            values.insert(protocol::DRAG_MODE.to_string(), Value::from(mode.ordinal()));
        }
        if fields.contains(ConfigFields::DROP_RATIO) {
            values.insert(
                protocol::DROP_RATIO.to_string(),
                Value::from(config.drop_ratio().get()),
            );
        }
        if fields.contains(ConfigFields::SHIM) {
            values.insert(
                protocol::SHIM_ENABLED.to_string(),
                Value::from(config.iframe_shims()),
            );
        }
        if fields.contains(ConfigFields::DRAG_FILTER) {
            let filter = config.drag_filter();
            let flags: Vec<Value> = children
                .iter()
                .map(|&child| Value::from(filter.is_draggable(child)))
                .collect();
            values.insert(protocol::DRAG_FILTER.to_string(), Value::Array(flags));
        }
        if fields.contains(ConfigFields::DROP_ENABLED) {
            values.insert(protocol::DROP_ENABLED.to_string(), Value::from(accepts_drops));
        }

        Self { fields, values }
    }

    pub fn fields(&self) -> ConfigFields {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys in the diff.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn payload(&self) -> &Payload {
        &self.values
    }

    pub fn into_payload(self) -> Payload {
        self.values
    }
}

/// Peer side mirror of a container's drag and drop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    drag_mode: LayoutDragMode,
    drop_ratio: DropRatio,
    iframe_shims: bool,
    draggable: Vec<bool>,
    drop_enabled: bool,
    revision: u64,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            drag_mode: LayoutDragMode::None,
            drop_ratio: DropRatio::DEFAULT,
            iframe_shims: true,
            draggable: Vec::new(),
            drop_enabled: false,
            revision: 0,
        }
    }
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a diff payload.
    ///
    /// All known keys are decoded before anything is applied, so a payload
    /// with a bad value leaves the state untouched. Unknown keys are ignored.
    /// Returns the fields whose value changed.
    pub fn apply(&mut self, payload: &Payload) -> Result<ConfigFields, DecodeError> {
        let mut drag_mode = None;
        let mut drop_ratio = None;
        let mut iframe_shims = None;
        let mut draggable = None;
        let mut drop_enabled = None;

        for (key, value) in payload {
            match key.as_str() {
                protocol::DRAG_MODE => {
                    let ordinal = value.as_u64().ok_or_else(|| invalid(key, "a drag mode ordinal"))?;
                    drag_mode = Some(LayoutDragMode::from_ordinal(ordinal)?);
                }
                protocol::DROP_RATIO => {
                    let ratio = value
                        .as_f64()
                        .and_then(|ratio| DropRatio::new(ratio as f32).ok())
                        .ok_or_else(|| invalid(key, "a ratio between 0 and 0.5"))?;
                    drop_ratio = Some(ratio);
                }
                protocol::SHIM_ENABLED => {
                    iframe_shims = Some(value.as_bool().ok_or_else(|| invalid(key, "a boolean"))?);
                }
                protocol::DRAG_FILTER => {
                    let flags = value
                        .as_array()
                        .and_then(|flags| flags.iter().map(Value::as_bool).collect::<Option<Vec<_>>>())
                        .ok_or_else(|| invalid(key, "an array of booleans"))?;
                    draggable = Some(flags);
                }
                protocol::DROP_ENABLED => {
                    drop_enabled = Some(value.as_bool().ok_or_else(|| invalid(key, "a boolean"))?);
                }
                _ => trace!(%key, "Ignoring unknown state key"),
            }
        }

        let mut changed = ConfigFields::empty();
        if let Some(mode) = drag_mode.filter(|&mode| mode != self.drag_mode) {
            self.drag_mode = mode;
            changed |= ConfigFields::DRAG_MODE;
        }
        if let Some(ratio) = drop_ratio.filter(|&ratio| ratio != self.drop_ratio) {
            self.drop_ratio = ratio;
            changed |= ConfigFields::DROP_RATIO;
        }
        if let Some(shims) = iframe_shims.filter(|&shims| shims != self.iframe_shims) {
            self.iframe_shims = shims;
            changed |= ConfigFields::SHIM;
        }
        if let Some(flags) = draggable.filter(|flags| *flags != self.draggable) {
            self.draggable = flags;
            changed |= ConfigFields::DRAG_FILTER;
        }
        if let Some(accepts) = drop_enabled.filter(|&accepts| accepts != self.drop_enabled) {
            self.drop_enabled = accepts;
            changed |= ConfigFields::DROP_ENABLED;
        }

        if !changed.is_empty() {
            self.revision += 1;
            trace!(?changed, revision = self.revision, "Applied state diff");
        }
        Ok(changed)
    }

    pub fn drag_mode(&self) -> LayoutDragMode {
        self.drag_mode
    }

    pub fn drop_ratio(&self) -> DropRatio {
        self.drop_ratio
    }

    pub fn iframe_shims(&self) -> bool {
        self.iframe_shims
    }

    /// Whether the container accepts drops, i.e. the peer should run its
    /// drop side at all.
    pub fn accepts_drops(&self) -> bool {
        self.drop_enabled
    }

    /// Number of diffs that changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a drag may start on the child at `index`.
    pub fn can_drag(&self, index: usize) -> bool {
        self.drag_mode != LayoutDragMode::None && self.draggable.get(index).copied().unwrap_or(false)
    }

    /// Resolver for the mirrored ratio along `axis`.
    pub fn resolver(&self, axis: Axis) -> DropResolver {
        DropResolver::new(axis, self.drop_ratio)
    }
}

fn invalid(key: &str, expected: &'static str) -> DecodeError {
    DecodeError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}
