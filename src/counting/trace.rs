//! Per-object position histories and the trace store collaborator.

use std::collections::HashMap;

use crate::counting::point::Point2D;

/// Stable identity the external tracker assigns to one physical object.
///
/// Persists across observed, lost, and predicted states; retired only when
/// the tracker reports final removal.
pub type ObjectId = u64;

/// One recorded position for an object at one processing cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub point: Point2D,
    /// Estimated by the tracker during occlusion rather than observed.
    ///
    /// Informational only: predicted samples go through the same crossing
    /// math as observed ones.
    pub predicted: bool,
}

/// Ordered position history for one object; insertion order is temporal
/// order. Bounding growth is the caller's concern, not this type's.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    samples: Vec<TraceSample>,
}

impl Trace {
    pub fn push(&mut self, point: Point2D, predicted: bool) {
        self.samples.push(TraceSample { point, predicted });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Sample at `index` counting back from the most recent (`1` = latest).
    pub fn from_last(&self, index: usize) -> Option<&TraceSample> {
        if index == 0 {
            return None;
        }
        self.samples
            .len()
            .checked_sub(index)
            .and_then(|i| self.samples.get(i))
    }
}

/// Storage collaborator for per-object traces.
///
/// The counting session only needs these three operations; swap in a custom
/// store to add eviction, ring buffers, or annotation side channels.
pub trait TraceStore {
    /// Append one sample to `id`'s trace, creating the trace on first use.
    fn update_trace(&mut self, id: ObjectId, point: Point2D, predicted: bool);

    fn get_trace(&self, id: ObjectId) -> Option<&Trace>;

    /// Drop `id`'s trace entirely. A later `update_trace` for the same id
    /// starts a fresh, empty history.
    fn remove_trace(&mut self, id: ObjectId);
}

/// Default in-memory trace store.
#[derive(Debug, Default)]
pub struct MemoryTraceStore {
    traces: HashMap<ObjectId, Trace>,
}

impl MemoryTraceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

impl TraceStore for MemoryTraceStore {
    fn update_trace(&mut self, id: ObjectId, point: Point2D, predicted: bool) {
        self.traces.entry(id).or_default().push(point, predicted);
    }

    fn get_trace(&self, id: ObjectId) -> Option<&Trace> {
        self.traces.get(&id)
    }

    fn remove_trace(&mut self, id: ObjectId) {
        if self.traces.remove(&id).is_some() {
            tracing::debug!(id, "purged trace");
        }
    }
}
