//! Drop position resolution.
//!
//! Given the pointer and the ordered bounding boxes of a container's children,
//! works out which child the pointer is over and which zone of that child it
//! falls into. Each box is split along the layout axis by the drop ratio `r`:
//!
//! ```text
//!  0          r                     1-r          1
//!  |  leading |        middle        | trailing  |
//! ```
//!
//! The middle zone includes both of its boundaries. With `r = 0` every drop is
//! a middle drop; with `r = 0.5` the middle zone shrinks to the exact center.

use std::fmt;

use ddlayouts_core::math::Vec2;
use tracing::trace;

use crate::component::ComponentId;
use crate::details::DropLocationResult;
use crate::error::ConfigError;
use crate::geometry::{Axis, Rect};
use crate::location::{DropLocation, Zone};
use crate::mouse::MouseEventDetails;

/// Fraction of a child's extent given to each edge zone.
///
/// Always within `[0, 0.5]`; the only way to build one is through
/// [`DropRatio::new`], so consumers never need to re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DropRatio(f32);

impl DropRatio {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 0.5;

    /// Default edge fraction for new containers.
    pub const DEFAULT: DropRatio = DropRatio(0.2);

    pub fn new(ratio: f32) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(ConfigError::InvalidDropRatio { ratio })
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for DropRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for DropRatio {
    type Error = ConfigError;

    fn try_from(ratio: f32) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl fmt::Display for DropRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves pointer positions into drop locations for one layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DropResolver {
    axis: Axis,
    ratio: DropRatio,
}

impl DropResolver {
    pub fn new(axis: Axis, ratio: DropRatio) -> Self {
        Self { axis, ratio }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn ratio(&self) -> DropRatio {
        self.ratio
    }

    /// Zone for a normalized offset inside a box.
    pub fn zone_at(&self, offset: f32) -> Zone {
        let ratio = self.ratio.get();
        if offset < ratio {
            Zone::Leading
        } else if offset > 1.0 - ratio {
            Zone::Trailing
        } else {
            Zone::Middle
        }
    }

    /// Drop location of `pointer` within `bounds`.
    ///
    /// Returns None if the pointer is outside the box along the layout axis
    /// or the box has no extent.
    pub fn locate(&self, pointer: Vec2, bounds: &Rect) -> Option<DropLocation> {
        if !bounds.spans(self.axis, pointer) {
            return None;
        }
        let offset = bounds.normalized_offset(self.axis, pointer)?;
        Some(DropLocation::from_zone(self.axis, self.zone_at(offset)))
    }

    /// Resolve a drop at the event's client position.
    pub fn resolve(
        &self,
        container: ComponentId,
        candidates: &[(ComponentId, Rect)],
        mouse: MouseEventDetails,
    ) -> DropLocationResult {
        self.resolve_at(mouse.client_position(), container, candidates, mouse)
    }

    /// Resolve a drop at an explicit pointer position.
    ///
    /// The first candidate whose span along the axis contains the pointer
    /// wins. When none does, the result falls back to `container` with the
    /// trailing location, meaning "append".
    pub fn resolve_at(
        &self,
        pointer: Vec2,
        container: ComponentId,
        candidates: &[(ComponentId, Rect)],
        mouse: MouseEventDetails,
    ) -> DropLocationResult {
        for (index, (child, bounds)) in candidates.iter().enumerate() {
            if let Some(location) = self.locate(pointer, bounds) {
                trace!(index, %child, %location, "Drop resolved over child");
                return DropLocationResult::over_child(index, *child, location, mouse);
            }
        }

        let location = DropLocation::from_zone(self.axis, Zone::Trailing);
        trace!(%container, %location, "Drop resolved over container");
        DropLocationResult::over_container(container, location, mouse)
    }

    /// Area of `target` covered by `zone`, for drawing drop emphasis.
    pub fn zone_bounds(&self, zone: Zone, target: Rect) -> Rect {
        let ratio = self.ratio.get();
        match zone {
            Zone::Leading => target.slice(self.axis, 0.0, ratio),
            Zone::Middle => target.slice(self.axis, ratio, 1.0 - ratio),
            Zone::Trailing => target.slice(self.axis, 1.0 - ratio, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::Over;
    use crate::mouse::MouseEventType;

    fn ratio(r: f32) -> DropRatio {
        DropRatio::new(r).unwrap()
    }

    fn column() -> Vec<(ComponentId, Rect)> {
        (0..3)
            .map(|i| {
                (
                    ComponentId::from_raw(i as u64 + 1),
                    Rect::new(0.0, i as f32 * 10.0, 100.0, 10.0),
                )
            })
            .collect()
    }

    fn mouse_at(y: i32) -> MouseEventDetails {
        MouseEventDetails::at(MouseEventType::MouseUp, 50, y)
    }

    #[test]
    fn test_ratio_bounds() {
        assert!(DropRatio::new(0.0).is_ok());
        assert!(DropRatio::new(0.5).is_ok());
        assert_eq!(
            DropRatio::new(-0.1),
            Err(ConfigError::InvalidDropRatio { ratio: -0.1 })
        );
        assert!(DropRatio::new(0.6).is_err());
        assert!(DropRatio::new(f32::NAN).is_err());
        assert_eq!(DropRatio::default().get(), 0.2);
    }

    #[test]
    fn test_zone_boundaries_are_inclusive_middle() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.25));
        assert_eq!(resolver.zone_at(0.0), Zone::Leading);
        assert_eq!(resolver.zone_at(0.24), Zone::Leading);
        assert_eq!(resolver.zone_at(0.25), Zone::Middle);
        assert_eq!(resolver.zone_at(0.75), Zone::Middle);
        assert_eq!(resolver.zone_at(0.76), Zone::Trailing);
    }

    #[test]
    fn test_zero_ratio_is_always_middle() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.0));
        for step in 0..=10 {
            assert_eq!(resolver.zone_at(step as f32 / 10.0), Zone::Middle);
        }
    }

    #[test]
    fn test_half_ratio_has_no_middle_band() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.5));
        assert_eq!(resolver.zone_at(0.49), Zone::Leading);
        assert_eq!(resolver.zone_at(0.51), Zone::Trailing);
        assert_eq!(resolver.zone_at(0.0), Zone::Leading);
        assert_eq!(resolver.zone_at(0.999), Zone::Trailing);
    }

    #[test]
    fn test_half_ratio_exact_center_is_middle() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.5));
        assert_eq!(resolver.zone_at(0.5), Zone::Middle);

        let target = [(ComponentId::from_raw(1), Rect::new(0.0, 0.0, 100.0, 10.0))];
        let result = resolver.resolve(ComponentId::from_raw(0), &target, mouse_at(5));
        assert_eq!(result.location(), DropLocation::Middle);
    }

    #[test]
    fn test_scenario_three_children() {
        let container = ComponentId::new("layout");
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.2));
        let children = column();

        let result = resolver.resolve(container, &children, mouse_at(11));
        assert_eq!(result.over_index(), Some(1));
        assert_eq!(result.over(), Over::Child(ComponentId::from_raw(2)));
        assert_eq!(result.location(), DropLocation::Top);

        let result = resolver.resolve(container, &children, mouse_at(15));
        assert_eq!(result.over_index(), Some(1));
        assert_eq!(result.location(), DropLocation::Middle);

        let result = resolver.resolve(container, &children, mouse_at(19));
        assert_eq!(result.location(), DropLocation::Bottom);

        let result = resolver.resolve(container, &children, mouse_at(35));
        assert_eq!(result.over_index(), None);
        assert_eq!(result.over_index_raw(), -1);
        assert_eq!(result.over(), Over::Container(container));
        assert_eq!(result.over_component(), container);
    }

    #[test]
    fn test_shared_edge_belongs_to_next_child() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.2));
        let result = resolver.resolve(ComponentId::from_raw(0), &column(), mouse_at(10));
        assert_eq!(result.over_index(), Some(1));
        assert_eq!(result.location(), DropLocation::Top);
    }

    #[test]
    fn test_horizontal_axis() {
        let container = ComponentId::new("row");
        let resolver = DropResolver::new(Axis::Horizontal, ratio(0.3));
        let children = vec![
            (ComponentId::from_raw(1), Rect::new(0.0, 0.0, 100.0, 20.0)),
            (ComponentId::from_raw(2), Rect::new(100.0, 0.0, 100.0, 20.0)),
        ];

        let result = resolver.resolve_at(Vec2::new(190.0, 500.0), container, &children, mouse_at(0));
        assert_eq!(result.over_index(), Some(1));
        assert_eq!(result.location(), DropLocation::Right);

        let result = resolver.resolve_at(Vec2::new(150.0, 5.0), container, &children, mouse_at(0));
        assert_eq!(result.location(), DropLocation::Center);

        let result = resolver.resolve_at(Vec2::new(-5.0, 5.0), container, &children, mouse_at(0));
        assert_eq!(result.over(), Over::Container(container));
        assert_eq!(result.location(), DropLocation::Right);
    }

    #[test]
    fn test_zero_height_children_are_skipped() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.2));
        let children = vec![
            (ComponentId::from_raw(1), Rect::new(0.0, 0.0, 100.0, 0.0)),
            (ComponentId::from_raw(2), Rect::new(0.0, 0.0, 100.0, 10.0)),
        ];
        let result = resolver.resolve(ComponentId::from_raw(9), &children, mouse_at(0));
        assert_eq!(result.over_index(), Some(1));
    }

    #[test]
    fn test_resolve_is_pure() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.2));
        let children = column();
        let first = resolver.resolve(ComponentId::from_raw(0), &children, mouse_at(27));
        let second = resolver.resolve(ComponentId::from_raw(0), &children, mouse_at(27));
        assert_eq!(first, second);
        assert_eq!(first.mouse(), &mouse_at(27));
    }

    #[test]
    fn test_zone_bounds() {
        let resolver = DropResolver::new(Axis::Vertical, ratio(0.25));
        let target = Rect::new(0.0, 0.0, 40.0, 100.0);
        assert_eq!(resolver.zone_bounds(Zone::Leading, target), Rect::new(0.0, 0.0, 40.0, 25.0));
        assert_eq!(resolver.zone_bounds(Zone::Middle, target), Rect::new(0.0, 25.0, 40.0, 50.0));
        assert_eq!(resolver.zone_bounds(Zone::Trailing, target), Rect::new(0.0, 75.0, 40.0, 25.0));
    }
}
