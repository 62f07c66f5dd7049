//! Drop zones and the location tokens exchanged with the peer.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::geometry::Axis;

/// Axis independent sub-region of a child's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Before the child (top or left).
    Leading,
    /// On the child itself.
    Middle,
    /// After the child (bottom or right).
    Trailing,
}

/// Where, relative to the child under the pointer, a drop landed.
///
/// Vertical containers produce `Top`, `Middle` and `Bottom`; horizontal ones
/// produce `Left`, `Center` and `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropLocation {
    Top,
    Middle,
    Bottom,
    Left,
    Center,
    Right,
}

impl DropLocation {
    /// Location for `zone` on a container laid out along `axis`.
    pub fn from_zone(axis: Axis, zone: Zone) -> Self {
        match (axis, zone) {
            (Axis::Vertical, Zone::Leading) => DropLocation::Top,
            (Axis::Vertical, Zone::Middle) => DropLocation::Middle,
            (Axis::Vertical, Zone::Trailing) => DropLocation::Bottom,
            (Axis::Horizontal, Zone::Leading) => DropLocation::Left,
            (Axis::Horizontal, Zone::Middle) => DropLocation::Center,
            (Axis::Horizontal, Zone::Trailing) => DropLocation::Right,
        }
    }

    pub fn zone(&self) -> Zone {
        match self {
            DropLocation::Top | DropLocation::Left => Zone::Leading,
            DropLocation::Middle | DropLocation::Center => Zone::Middle,
            DropLocation::Bottom | DropLocation::Right => Zone::Trailing,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            DropLocation::Top | DropLocation::Middle | DropLocation::Bottom => Axis::Vertical,
            DropLocation::Left | DropLocation::Center | DropLocation::Right => Axis::Horizontal,
        }
    }

    /// Wire token for this location.
    pub fn token(&self) -> &'static str {
        match self {
            DropLocation::Top => "TOP",
            DropLocation::Middle => "MIDDLE",
            DropLocation::Bottom => "BOTTOM",
            DropLocation::Left => "LEFT",
            DropLocation::Center => "CENTER",
            DropLocation::Right => "RIGHT",
        }
    }
}

impl fmt::Display for DropLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DropLocation {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "TOP" => Ok(DropLocation::Top),
            "MIDDLE" => Ok(DropLocation::Middle),
            "BOTTOM" => Ok(DropLocation::Bottom),
            "LEFT" => Ok(DropLocation::Left),
            "CENTER" => Ok(DropLocation::Center),
            "RIGHT" => Ok(DropLocation::Right),
            _ => Err(DecodeError::UnknownDropLocation {
                token: token.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_mapping_per_axis() {
        assert_eq!(DropLocation::from_zone(Axis::Vertical, Zone::Leading), DropLocation::Top);
        assert_eq!(DropLocation::from_zone(Axis::Horizontal, Zone::Middle), DropLocation::Center);
        assert_eq!(DropLocation::Right.zone(), Zone::Trailing);
        assert_eq!(DropLocation::Bottom.axis(), Axis::Vertical);
    }

    #[test]
    fn test_tokens() {
        assert_eq!("MIDDLE".parse::<DropLocation>(), Ok(DropLocation::Middle));
        assert_eq!(DropLocation::Left.to_string(), "LEFT");
        assert_eq!(
            "middle".parse::<DropLocation>(),
            Err(DecodeError::UnknownDropLocation {
                token: "middle".to_string()
            })
        );
    }
}
