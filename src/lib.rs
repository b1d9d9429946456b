//! Line-zone crossing counter for multi-object tracker output.
//!
//! Feed per-cycle tracker output (active detections, lost tracks with
//! predicted positions, permanently removed tracks) into a
//! [`CountingSession`] via the [`TrackReconciler`], and the session counts
//! each object at most once as its path crosses any configured [`LineZone`].

pub mod counting;
pub mod reconcile;

pub use counting::{
    CountLedger, CountingError, CountingSession, CrossingEvaluator, LineZone, MemoryTraceStore,
    ObjectId, Point2D, SessionConfig, Trace, TraceSample, TraceStore, ZoneConfig,
};
pub use reconcile::{
    CountingPipeline, PipelineError, Rect, TrackObservation, TrackReconciler, TrackSource,
};
