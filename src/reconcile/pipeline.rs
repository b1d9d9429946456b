//! CountingPipeline for combining a track source with a counting session.

use thiserror::Error;

use crate::counting::{CountingError, CountingSession, SessionConfig};
use crate::reconcile::adapter::TrackReconciler;

use super::TrackSource;

/// Pipeline failure: either the tracker side or the counting side.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    #[error("track source failed")]
    Source(#[source] E),
    #[error(transparent)]
    Counting(#[from] CountingError),
}

/// End-to-end counter: pulls cycles from a [`TrackSource`], reconciles them
/// into a [`CountingSession`], and hands back the per-cycle labels.
pub struct CountingPipeline<T: TrackSource> {
    source: T,
    reconciler: TrackReconciler,
    session: CountingSession,
}

impl<T: TrackSource> CountingPipeline<T> {
    /// Create a pipeline from a track source and session configuration.
    ///
    /// Fails fast on a degenerate zone layout.
    pub fn new(source: T, config: &SessionConfig) -> Result<Self, CountingError> {
        Ok(Self {
            source,
            reconciler: TrackReconciler::new(config.class_names.clone()),
            session: CountingSession::from_config(config)?,
        })
    }

    /// Process one cycle and return the labels for its active detections.
    pub fn process_cycle(&mut self) -> Result<Vec<String>, PipelineError<T::Error>> {
        let observations = self.source.next_cycle().map_err(PipelineError::Source)?;
        Ok(self.reconciler.reconcile(&mut self.session, &observations)?)
    }

    /// Total counted crossings so far.
    pub fn count(&self) -> u64 {
        self.session.count()
    }

    /// Get a reference to the underlying session.
    pub fn session(&self) -> &CountingSession {
        &self.session
    }

    /// Get a reference to the underlying track source.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Get a mutable reference to the underlying track source.
    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}
