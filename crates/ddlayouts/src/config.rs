//! Drag and drop configuration of a container.
//!
//! The configuration is the authoritative copy of what the peer needs to
//! drive drags and drops. Every field is [`Versioned`], and setters record
//! which fields changed in a [`ConfigFields`] set until the next sync point
//! collects them (see [`crate::sync`]). Setting a field to its current value
//! records nothing.

use bitflags::bitflags;
use tracing::{debug, warn};

use crate::error::{ConfigError, DecodeError};
use crate::filter::SharedFilter;
use crate::resolver::DropRatio;
use crate::versioned::Versioned;

/// How dragging out of a layout is visualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDragMode {
    /// Dragging is disabled.
    #[default]
    None,
    /// A clone of the dragged component follows the pointer.
    Clone,
    /// Only the component's caption follows the pointer.
    Caption,
    /// A clone of another component follows the pointer.
    CloneOther,
}

impl LayoutDragMode {
    /// Ordinal used on the wire.
    pub fn ordinal(&self) -> u64 {
        match self {
            LayoutDragMode::None => 0,
            LayoutDragMode::Clone => 1,
            LayoutDragMode::Caption => 2,
            LayoutDragMode::CloneOther => 3,
        }
    }

    pub fn from_ordinal(ordinal: u64) -> Result<Self, DecodeError> {
        match ordinal {
            0 => Ok(LayoutDragMode::None),
            1 => Ok(LayoutDragMode::Clone),
            2 => Ok(LayoutDragMode::Caption),
            3 => Ok(LayoutDragMode::CloneOther),
            _ => Err(DecodeError::UnknownDragMode { ordinal }),
        }
    }
}

bitflags! {
    /// Configuration fields with changes not yet synchronized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigFields: u8 {
        const DRAG_MODE   = 0b0001;
        const DROP_RATIO  = 0b0010;
        const SHIM        = 0b0100;
        const DRAG_FILTER = 0b1000;
        /// Whether drops are accepted. Derived from container state, so
        /// only ever marked, never set through the configuration.
        const DROP_ENABLED = 0b1_0000;
    }
}

/// Drag mode, drop ratio, shim flag and drag filter of one container.
#[derive(Debug, Clone)]
pub struct DropConfiguration {
    drag_mode: Versioned<LayoutDragMode>,
    drop_ratio: Versioned<DropRatio>,
    iframe_shims: Versioned<bool>,
    drag_filter: Versioned<SharedFilter>,
    pending: ConfigFields,
}

impl Default for DropConfiguration {
    fn default() -> Self {
        Self {
            drag_mode: Versioned::new(LayoutDragMode::None),
            drop_ratio: Versioned::new(DropRatio::DEFAULT),
            iframe_shims: Versioned::new(true),
            drag_filter: Versioned::new(SharedFilter::all()),
            pending: ConfigFields::empty(),
        }
    }
}

impl DropConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial drag mode.
    pub fn with_drag_mode(mut self, mode: LayoutDragMode) -> Self {
        self.set_drag_mode(mode);
        self
    }

    /// Set the initial drop ratio.
    pub fn with_drop_ratio(mut self, ratio: DropRatio) -> Self {
        if self.drop_ratio.set(ratio) {
            self.pending |= ConfigFields::DROP_RATIO;
        }
        self
    }

    /// Set the initial shim flag.
    pub fn with_iframe_shims(mut self, shims: bool) -> Self {
        self.set_iframe_shims(shims);
        self
    }

    /// Set the initial drag filter.
    pub fn with_drag_filter(mut self, filter: SharedFilter) -> Self {
        self.set_drag_filter(filter);
        self
    }

    pub fn drag_mode(&self) -> LayoutDragMode {
        *self.drag_mode.get()
    }

    /// Returns `true` if the mode changed.
    pub fn set_drag_mode(&mut self, mode: LayoutDragMode) -> bool {
        let changed = self.drag_mode.set(mode);
        if changed {
            debug!(?mode, "Drag mode changed");
            self.pending |= ConfigFields::DRAG_MODE;
        }
        changed
    }

    pub fn drop_ratio(&self) -> DropRatio {
        *self.drop_ratio.get()
    }

    /// Set the ratio dividing each child into drop zones.
    ///
    /// The ratio is measured from both edges along the layout axis: 0.3
    /// gives three bands, 0.5 disables middle drops, 0 disables edge drops.
    /// Returns `Ok(true)` if the ratio changed. An out of range ratio is
    /// rejected and leaves the configuration untouched.
    pub fn set_drop_ratio(&mut self, ratio: f32) -> Result<bool, ConfigError> {
        let ratio = DropRatio::new(ratio).inspect_err(|err| warn!(%err, "Rejected drop ratio"))?;
        let changed = self.drop_ratio.set(ratio);
        if changed {
            debug!(%ratio, "Drop ratio changed");
            self.pending |= ConfigFields::DROP_RATIO;
        }
        Ok(changed)
    }

    pub fn iframe_shims(&self) -> bool {
        *self.iframe_shims.get()
    }

    /// Returns `true` if the flag changed.
    pub fn set_iframe_shims(&mut self, shims: bool) -> bool {
        let changed = self.iframe_shims.set(shims);
        if changed {
            debug!(shims, "Iframe shims changed");
            self.pending |= ConfigFields::SHIM;
        }
        changed
    }

    pub fn drag_filter(&self) -> &SharedFilter {
        self.drag_filter.get()
    }

    /// Returns `true` if a different filter instance was installed.
    pub fn set_drag_filter(&mut self, filter: SharedFilter) -> bool {
        let changed = self.drag_filter.set(filter);
        if changed {
            debug!("Drag filter changed");
            self.pending |= ConfigFields::DRAG_FILTER;
        }
        changed
    }

    /// Fields changed since the last sync point.
    pub fn pending(&self) -> ConfigFields {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Mark fields for resynchronization without changing them, e.g. when
    /// the published form of a field depends on container state.
    pub fn mark(&mut self, fields: ConfigFields) {
        self.pending |= fields;
    }

    /// Take the pending set, starting a new sync interval.
    pub fn take_pending(&mut self) -> ConfigFields {
        std::mem::take(&mut self.pending)
    }

    /// Sum of all field versions; grows with every effective change.
    pub fn revision(&self) -> u64 {
        self.drag_mode.version() as u64
            + self.drop_ratio.version() as u64
            + self.iframe_shims.version() as u64
            + self.drag_filter.version() as u64
    }
}
