//! Mouse event descriptors carried alongside drag and drop payloads.
//!
//! The descriptor travels as a single comma separated string:
//!
//! ```text
//! button,clientX,clientY,altKey,ctrlKey,metaKey,shiftKey,type,relativeX,relativeY
//! ```
//!
//! Buttons and event types use the browser's integer codes. Relative
//! coordinates are `-1` when unknown.

use std::fmt;
use std::str::FromStr;

use ddlayouts_core::math::Vec2;

use crate::error::DecodeError;

const DELIMITER: char = ',';
const FIELD_COUNT: usize = 10;

/// Mouse button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn code(&self) -> u32 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Right),
            4 => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Kind of mouse event that produced the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseEventType {
    Click,
    DoubleClick,
    MouseDown,
    #[default]
    MouseUp,
    MouseOver,
    MouseOut,
    MouseMove,
}

impl MouseEventType {
    pub fn code(&self) -> u32 {
        match self {
            MouseEventType::Click => 0x01,
            MouseEventType::DoubleClick => 0x02,
            MouseEventType::MouseDown => 0x04,
            MouseEventType::MouseUp => 0x08,
            MouseEventType::MouseOver => 0x10,
            MouseEventType::MouseOut => 0x20,
            MouseEventType::MouseMove => 0x40,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x01 => Some(MouseEventType::Click),
            0x02 => Some(MouseEventType::DoubleClick),
            0x04 => Some(MouseEventType::MouseDown),
            0x08 => Some(MouseEventType::MouseUp),
            0x10 => Some(MouseEventType::MouseOver),
            0x20 => Some(MouseEventType::MouseOut),
            0x40 => Some(MouseEventType::MouseMove),
            _ => None,
        }
    }
}

/// Details of the mouse event behind a drag or drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEventDetails {
    pub button: MouseButton,
    pub client_x: i32,
    pub client_y: i32,
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub event_type: MouseEventType,
    pub relative_x: i32,
    pub relative_y: i32,
}

impl Default for MouseEventDetails {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            client_x: 0,
            client_y: 0,
            alt_key: false,
            ctrl_key: false,
            meta_key: false,
            shift_key: false,
            event_type: MouseEventType::MouseUp,
            relative_x: -1,
            relative_y: -1,
        }
    }
}

impl MouseEventDetails {
    /// Plain left button event of `event_type` at the given client position.
    pub fn at(event_type: MouseEventType, client_x: i32, client_y: i32) -> Self {
        Self {
            client_x,
            client_y,
            event_type,
            ..Self::default()
        }
    }

    /// Client position as a pointer coordinate.
    pub fn client_position(&self) -> Vec2 {
        Vec2::new(self.client_x as f32, self.client_y as f32)
    }

    pub fn with_modifiers(mut self, alt: bool, ctrl: bool, meta: bool, shift: bool) -> Self {
        self.alt_key = alt;
        self.ctrl_key = ctrl;
        self.meta_key = meta;
        self.shift_key = shift;
        self
    }

    pub fn with_relative(mut self, x: i32, y: i32) -> Self {
        self.relative_x = x;
        self.relative_y = y;
        self
    }

    /// Serialize into the comma separated descriptor.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Parse a descriptor produced by [`MouseEventDetails::serialize`].
    pub fn deserialize(descriptor: &str) -> Result<Self, DecodeError> {
        descriptor.parse()
    }
}

impl fmt::Display for MouseEventDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{}",
            self.button.code(),
            self.client_x,
            self.client_y,
            self.alt_key,
            self.ctrl_key,
            self.meta_key,
            self.shift_key,
            self.event_type.code(),
            self.relative_x,
            self.relative_y
        )
    }
}

impl FromStr for MouseEventDetails {
    type Err = DecodeError;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| DecodeError::MalformedMouseEvent {
            descriptor: descriptor.to_string(),
            reason,
        };

        let fields: Vec<&str> = descriptor.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(malformed("expected 10 comma separated fields"));
        }

        let int = |s: &str| s.trim().parse::<i32>().map_err(|_| malformed("invalid integer"));
        let code = |s: &str| s.trim().parse::<u32>().map_err(|_| malformed("invalid code"));
        let flag = |s: &str| match s.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(malformed("invalid boolean")),
        };

        let button = MouseButton::from_code(code(fields[0])?).ok_or_else(|| malformed("unknown button"))?;
        let event_type =
            MouseEventType::from_code(code(fields[7])?).ok_or_else(|| malformed("unknown event type"))?;

        Ok(Self {
            button,
            client_x: int(fields[1])?,
            client_y: int(fields[2])?,
            alt_key: flag(fields[3])?,
            ctrl_key: flag(fields[4])?,
            meta_key: flag(fields[5])?,
            shift_key: flag(fields[6])?,
            event_type,
            relative_x: int(fields[8])?,
            relative_y: int(fields[9])?,
        })
    }
}
