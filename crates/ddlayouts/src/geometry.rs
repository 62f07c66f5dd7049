//! Bounding boxes and layout axes.

use ddlayouts_core::math::Vec2;

/// Axis along which a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Children stacked top to bottom.
    #[default]
    Vertical,
    /// Children placed left to right.
    Horizontal,
}

impl Axis {
    /// Component of `point` along this axis.
    #[inline]
    pub fn coordinate(&self, point: Vec2) -> f32 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// Leading edge of `rect` along this axis.
    #[inline]
    pub fn start(&self, rect: &Rect) -> f32 {
        match self {
            Axis::Vertical => rect.y,
            Axis::Horizontal => rect.x,
        }
    }

    /// Size of `rect` along this axis.
    #[inline]
    pub fn extent(&self, rect: &Rect) -> f32 {
        match self {
            Axis::Vertical => rect.height,
            Axis::Horizontal => rect.width,
        }
    }
}

/// Axis aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Empty box at the origin.
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the half open span `[start, start + extent)` along `axis`
    /// contains the matching component of `point`.
    ///
    /// Boxes with no extent never contain anything.
    pub fn spans(&self, axis: Axis, point: Vec2) -> bool {
        let extent = axis.extent(self);
        if extent <= 0.0 {
            return false;
        }
        let start = axis.start(self);
        let coord = axis.coordinate(point);
        coord >= start && coord < start + extent
    }

    /// Position of `point` inside the box along `axis`, where 0 is the
    /// leading edge and 1 the trailing edge.
    ///
    /// Returns None for boxes with no extent.
    pub fn normalized_offset(&self, axis: Axis, point: Vec2) -> Option<f32> {
        let extent = axis.extent(self);
        if extent <= 0.0 {
            return None;
        }
        Some((axis.coordinate(point) - axis.start(self)) / extent)
    }

    /// Sub-box covering the fractions `[from, to]` of this box along `axis`.
    pub fn slice(&self, axis: Axis, from: f32, to: f32) -> Rect {
        match axis {
            Axis::Vertical => Rect {
                x: self.x,
                y: self.y + self.height * from,
                width: self.width,
                height: self.height * (to - from),
            },
            Axis::Horizontal => Rect {
                x: self.x + self.width * from,
                y: self.y,
                width: self.width * (to - from),
                height: self.height,
            },
        }
    }
}
