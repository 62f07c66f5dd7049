//! Error types for configuration, payload decoding and layout mutation.

use std::fmt;

use crate::component::ComponentId;
use crate::container::LayoutKind;

/// Errors raised by configuration setters.
///
/// A failed setter never leaves a partially updated configuration behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The drop ratio was outside `[0, 0.5]` or not a number.
    InvalidDropRatio {
        /// The rejected ratio.
        ratio: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDropRatio { ratio } => {
                write!(f, "Drop ratio must be between 0 and 0.5, got {}", ratio)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while decoding payloads produced by the paired peer.
///
/// These indicate a protocol violation rather than a user mistake, so
/// callers are expected to propagate them instead of guessing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required key was absent from the payload.
    MissingKey {
        /// The missing key.
        key: &'static str,
    },

    /// A key held a value of the wrong shape.
    InvalidValue {
        /// The offending key.
        key: String,
        /// What the key should have held.
        expected: &'static str,
    },

    /// The drop location token is not one of the known locations.
    UnknownDropLocation {
        /// The token as received.
        token: String,
    },

    /// The serialized mouse event could not be parsed.
    MalformedMouseEvent {
        /// The descriptor as received.
        descriptor: String,
        /// Description of what was wrong.
        reason: &'static str,
    },

    /// The drag mode ordinal does not name a mode.
    UnknownDragMode {
        /// The ordinal as received.
        ordinal: u64,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingKey { key } => write!(f, "Missing payload key '{}'", key),
            DecodeError::InvalidValue { key, expected } => {
                write!(f, "Payload key '{}' must hold {}", key, expected)
            }
            DecodeError::UnknownDropLocation { token } => {
                write!(f, "Unknown drop location: {}", token)
            }
            DecodeError::MalformedMouseEvent { descriptor, reason } => {
                write!(f, "Malformed mouse event '{}': {}", descriptor, reason)
            }
            DecodeError::UnknownDragMode { ordinal } => {
                write!(f, "Unknown drag mode ordinal: {}", ordinal)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised when the host mutates a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout cannot hold more children.
    ChildLimit {
        /// The layout that is full.
        kind: LayoutKind,
        /// Its maximum child count.
        limit: usize,
    },

    /// The component is already a child of this container.
    DuplicateChild(ComponentId),

    /// An index did not address an existing child.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of children.
        len: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ChildLimit { kind, limit } => {
                write!(f, "{:?} holds at most {} children", kind, limit)
            }
            LayoutError::DuplicateChild(id) => {
                write!(f, "Component {} is already a child", id)
            }
            LayoutError::IndexOutOfBounds { index, len } => {
                write!(f, "Child index {} out of bounds (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::InvalidDropRatio { ratio: 0.6 };
        assert_eq!(err.to_string(), "Drop ratio must be between 0 and 0.5, got 0.6");

        let err = DecodeError::UnknownDropLocation {
            token: "SIDEWAYS".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown drop location: SIDEWAYS");

        let err = LayoutError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Child index 4 out of bounds (len 2)");
    }
}
