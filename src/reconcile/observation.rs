//! Abstract view of one tracker output item.

use crate::counting::{ObjectId, Point2D};
use crate::reconcile::rect::Rect;

/// What the external tracker reports about one track in one processing
/// cycle.
///
/// The tracker's internal lifecycle (assignment, Kalman state, activation)
/// stays on its side of the boundary; the counting core only sees these
/// three cases.
#[derive(Debug, Clone)]
pub enum TrackObservation {
    /// Matched to a detection this cycle.
    Active {
        identity: ObjectId,
        bbox: Rect,
        class_id: u32,
        confidence: f32,
    },
    /// Temporarily unmatched; the tracker still holds predictive state and
    /// supplies the predicted center, which keeps counting correct through
    /// brief occlusions.
    Lost {
        identity: ObjectId,
        predicted_center: Point2D,
    },
    /// Permanently removed; the identity will never reappear and its trace
    /// can be dropped.
    Removed { identity: ObjectId },
}

impl TrackObservation {
    /// The identity this observation is about, regardless of state.
    pub fn identity(&self) -> ObjectId {
        match *self {
            TrackObservation::Active { identity, .. }
            | TrackObservation::Lost { identity, .. }
            | TrackObservation::Removed { identity } => identity,
        }
    }
}
