//! 2D point value type used for all counting geometry.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Immutable 2D position in pixel coordinates.
///
/// All geometry in this crate is `f32` end to end; bounding boxes, trace
/// samples, and zone endpoints all resolve to this type before any crossing
/// math runs, so sign comparisons never mix precisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[inline]
    pub fn offset_from(&self, origin: Point2D) -> Vector2<f32> {
        Vector2::new(self.x - origin.x, self.y - origin.y)
    }

    /// Both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
