//! Per-cycle driver: tracker observations in, counted crossings and labels
//! out.

use std::collections::HashMap;

use crate::counting::{CountingError, CountingSession, ObjectId, TraceStore};
use crate::reconcile::observation::TrackObservation;

/// Drives one counting session from batches of tracker observations.
///
/// Holds the class-name registry used to compose detection labels; all
/// counting state lives in the session it is handed each cycle.
#[derive(Debug, Default)]
pub struct TrackReconciler {
    class_names: HashMap<u32, String>,
}

impl TrackReconciler {
    pub fn new(class_names: HashMap<u32, String>) -> Self {
        Self { class_names }
    }

    /// Label for one active detection: identity, class name, confidence.
    pub fn label(&self, identity: ObjectId, class_id: u32, confidence: f32) -> String {
        let class_name = self
            .class_names
            .get(&class_id)
            .map(String::as_str)
            .unwrap_or("Unknown");
        format!("#{identity} {class_name} {confidence:.2}")
    }

    /// Reconcile one full cycle of tracker output.
    ///
    /// Observations are processed in three passes regardless of their order
    /// in the batch: active detections (observed samples), then lost tracks
    /// (predicted samples), then removals. Removal invalidates trace
    /// lookups, so it always runs last; a track that crosses a zone in its
    /// final cycle is still counted before its trace is purged.
    ///
    /// Returns the labels for this cycle's active detections, in batch
    /// order.
    pub fn reconcile<S: TraceStore>(
        &self,
        session: &mut CountingSession<S>,
        observations: &[TrackObservation],
    ) -> Result<Vec<String>, CountingError> {
        let mut labels = Vec::new();
        let mut counted = Vec::new();

        for obs in observations {
            if let TrackObservation::Active {
                identity,
                bbox,
                class_id,
                confidence,
            } = *obs
            {
                session.update_trace(identity, bbox.center(), false);
                if session.evaluate(identity)? {
                    counted.push(obs.identity());
                }
                labels.push(self.label(identity, class_id, confidence));
            }
        }

        for obs in observations {
            if let TrackObservation::Lost {
                identity,
                predicted_center,
            } = *obs
            {
                session.update_trace(identity, predicted_center, true);
                if session.evaluate(identity)? {
                    counted.push(obs.identity());
                }
            }
        }

        for obs in observations {
            if let TrackObservation::Removed { identity } = *obs {
                session.purge(identity);
            }
        }

        tracing::debug!(
            observations = observations.len(),
            counted = ?counted,
            count = session.count(),
            "reconciled cycle"
        );
        Ok(labels)
    }
}
