//! Trait for external tracker integrations.

use crate::reconcile::observation::TrackObservation;

/// Trait for adapters around a concrete multi-object tracker.
///
/// Implement this to connect any tracker to the counting pipeline: each call
/// yields everything the tracker has to say about one processing cycle:
/// active detections, lost tracks with predicted centers, and permanently
/// removed tracks.
///
/// # Example
///
/// ```ignore
/// use linecount_rs::{TrackObservation, TrackSource};
///
/// struct MyTracker {
///     // Your tracker here
/// }
///
/// impl TrackSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn next_cycle(&mut self) -> Result<Vec<TrackObservation>, Self::Error> {
///         // Run the tracker on the next frame and translate its output
///         Ok(vec![])
///     }
/// }
/// ```
pub trait TrackSource {
    /// Error type for tracker failures.
    type Error;

    /// Produce one cycle's worth of track observations.
    fn next_cycle(&mut self) -> Result<Vec<TrackObservation>, Self::Error>;
}
