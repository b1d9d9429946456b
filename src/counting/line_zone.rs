//! Line zone geometry and the crossing side test.

use nalgebra::Vector2;

use crate::counting::point::Point2D;
use crate::counting::session::CountingError;

/// One counting boundary: a line through two distinct endpoints.
///
/// The crossing test runs against the *infinite* line through `start` and
/// `end`, not the bounded segment: a path crossing the line beyond the drawn
/// segment's extent still registers. A segment-bounded test would be a
/// breaking behavior change for existing zone layouts.
#[derive(Debug, Clone, Copy)]
pub struct LineZone {
    start: Point2D,
    end: Point2D,
    /// `end - start`, computed once at construction, never mutated.
    direction_vector: Vector2<f32>,
}

impl LineZone {
    /// Build a zone from two distinct, finite endpoints.
    ///
    /// Coincident or non-finite endpoints make the direction vector
    /// degenerate and every later side test meaningless, so they are rejected
    /// here rather than at evaluation time.
    pub fn new(
        start: impl Into<Point2D>,
        end: impl Into<Point2D>,
    ) -> Result<Self, CountingError> {
        let start = start.into();
        let end = end.into();
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(CountingError::InvalidConfiguration { start, end });
        }
        Ok(Self {
            start,
            end,
            direction_vector: end.offset_from(start),
        })
    }

    #[inline]
    pub fn start(&self) -> Point2D {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2D {
        self.end
    }

    /// Scalar 2D cross product of `start -> p` with the zone direction.
    ///
    /// Sign tells which half-plane `p` lies in; zero means exactly on the
    /// line. For a zone pointing up the screen, points to its left are
    /// negative.
    #[inline]
    pub fn side(&self, p: Point2D) -> f32 {
        p.offset_from(self.start).perp(&self.direction_vector)
    }

    /// Whether the motion segment `prev -> curr` crosses the zone's line.
    ///
    /// True when the two samples lie on opposite sides, or when either lies
    /// exactly on the line. The `<=` is an inclusive boundary policy, not an
    /// approximation of strict sign opposition.
    #[inline]
    pub fn is_crossing(&self, prev: Point2D, curr: Point2D) -> bool {
        self.side(prev) * self.side(curr) <= 0.0
    }

    /// Directional sign used by the countable-crossing filter.
    ///
    /// Positive means `p` is on the side an object must come *from* for its
    /// crossing to count: the left of the zone as seen along `start -> end`.
    #[inline]
    pub fn direction(&self, p: Point2D) -> f32 {
        -self.side(p)
    }
}
