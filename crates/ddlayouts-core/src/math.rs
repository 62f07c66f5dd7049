/// Math types backed by [`glam`].
///
/// Pointer positions and box origins are plain [`Vec2`] values in pixel
/// space, with `y` growing downwards as in the browser.
///
/// ```
/// use ddlayouts_core::math::Vec2;
///
/// let pointer = Vec2::new(11.0, 4.0);
/// assert_eq!(pointer.x, 11.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, vec2};
