//! Counting session: zones, ledger, count, and trace storage as one owned
//! state object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::counting::evaluator::CrossingEvaluator;
use crate::counting::ledger::CountLedger;
use crate::counting::line_zone::LineZone;
use crate::counting::point::Point2D;
use crate::counting::trace::{MemoryTraceStore, ObjectId, TraceStore};

/// Errors surfaced by session construction and evaluation.
#[derive(Debug, Error)]
pub enum CountingError {
    /// Zone endpoints coincide or are non-finite; the direction vector would
    /// be degenerate and every crossing test meaningless.
    #[error("invalid line zone: start {start:?} to end {end:?}")]
    InvalidConfiguration { start: Point2D, end: Point2D },

    /// Evaluation was requested for an identity with no stored trace. The
    /// reconciliation adapter guarantees trace existence before evaluating,
    /// so hitting this means an integration bug in the caller.
    #[error("no trace recorded for identity {0} at evaluation time")]
    ReconciliationFault(ObjectId),
}

/// Zone endpoints as loaded from configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub start: Point2D,
    pub end: Point2D,
}

/// Session configuration: zone layout plus the class-name registry used for
/// detection labels. Supplied once at session start, immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub zones: Vec<ZoneConfig>,
    #[serde(default)]
    pub class_names: HashMap<u32, String>,
}

/// One counting session: owns the evaluator, the dedup ledger, the global
/// count, and the trace store. All crossing state lives here; dropping the
/// session discards it.
pub struct CountingSession<S: TraceStore = MemoryTraceStore> {
    evaluator: CrossingEvaluator,
    ledger: CountLedger,
    count: u64,
    store: S,
}

impl CountingSession<MemoryTraceStore> {
    /// Session over the default in-memory trace store.
    pub fn new(zones: Vec<LineZone>) -> Self {
        Self::with_store(zones, MemoryTraceStore::new())
    }

    /// Build a session from configuration, validating every zone up front so
    /// a degenerate layout fails before any frame is processed.
    pub fn from_config(config: &SessionConfig) -> Result<Self, CountingError> {
        let zones = config
            .zones
            .iter()
            .map(|z| LineZone::new(z.start, z.end))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(zones))
    }
}

impl<S: TraceStore> CountingSession<S> {
    /// Session over a caller-supplied trace store.
    pub fn with_store(zones: Vec<LineZone>, store: S) -> Self {
        Self {
            evaluator: CrossingEvaluator::new(zones),
            ledger: CountLedger::new(),
            count: 0,
            store,
        }
    }

    /// Total counted crossings so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn ledger(&self) -> &CountLedger {
        &self.ledger
    }

    pub fn evaluator(&self) -> &CrossingEvaluator {
        &self.evaluator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append one position sample to `id`'s trace.
    pub fn update_trace(&mut self, id: ObjectId, point: Point2D, predicted: bool) {
        self.store.update_trace(id, point, predicted);
    }

    /// Evaluate `id`'s trace against all zones.
    ///
    /// Already-counted identities short-circuit before any geometry runs.
    /// Traces still inside the settling window are an `Ok(false)` no-op.
    /// Returns `Ok(true)` exactly when this call counted a new crossing:
    /// the global count is incremented and `id` enters the ledger, so no
    /// later call can count it again.
    pub fn evaluate(&mut self, id: ObjectId) -> Result<bool, CountingError> {
        if self.ledger.contains(id) {
            return Ok(false);
        }
        let trace = self
            .store
            .get_trace(id)
            .ok_or(CountingError::ReconciliationFault(id))?;
        if self.evaluator.crossed(trace) {
            self.count += 1;
            self.ledger.insert(id);
            tracing::debug!(id, count = self.count, "counted line crossing");
            return Ok(true);
        }
        Ok(false)
    }

    /// Drop `id`'s trace after the tracker reports permanent removal.
    pub fn purge(&mut self, id: ObjectId) {
        self.store.remove_trace(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CountingSession {
        CountingSession::new(vec![LineZone::new((0.0, 0.0), (0.0, 10.0)).unwrap()])
    }

    fn feed(session: &mut CountingSession, id: ObjectId, points: &[(f32, f32)]) {
        for &(x, y) in points {
            session.update_trace(id, Point2D::new(x, y), false);
        }
    }

    #[test]
    fn test_history_gate() {
        let mut s = session();
        feed(&mut s, 1, &[(-5.0, 5.0), (5.0, 5.0)]);
        assert!(!s.evaluate(1).unwrap());
        assert_eq!(s.count(), 0);

        s.update_trace(1, Point2D::new(6.0, 5.0), false);
        // Third sample arms evaluation, but prev is now (-5, 5) -> counted.
        assert!(s.evaluate(1).unwrap());
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn test_at_most_once_per_identity() {
        let mut s = session();
        feed(&mut s, 1, &[(-5.0, 5.0), (-1.0, 5.0), (5.0, 5.0)]);
        assert!(s.evaluate(1).unwrap());

        // Walk back and cross again; ledger blocks a second count.
        feed(&mut s, 1, &[(-5.0, 5.0), (-1.0, 5.0), (5.0, 5.0)]);
        assert!(!s.evaluate(1).unwrap());
        assert_eq!(s.count(), 1);
        assert!(s.ledger().contains(1));
    }

    #[test]
    fn test_multi_zone_counts_once() {
        let mut s = CountingSession::new(vec![
            LineZone::new((0.0, 0.0), (0.0, 10.0)).unwrap(),
            LineZone::new((1.0, 0.0), (1.0, 10.0)).unwrap(),
        ]);
        // One motion crosses both vertical lines.
        feed(&mut s, 9, &[(-5.0, 5.0), (-2.0, 5.0), (5.0, 5.0)]);
        assert!(s.evaluate(9).unwrap());
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn test_missing_trace_is_reconciliation_fault() {
        let mut s = session();
        assert!(matches!(
            s.evaluate(99),
            Err(CountingError::ReconciliationFault(99))
        ));
    }

    #[test]
    fn test_counted_identity_skips_trace_lookup() {
        let mut s = session();
        feed(&mut s, 4, &[(-5.0, 5.0), (-1.0, 5.0), (5.0, 5.0)]);
        assert!(s.evaluate(4).unwrap());

        // Purged identity stays ledgered; evaluation short-circuits instead
        // of faulting on the missing trace.
        s.purge(4);
        assert!(!s.evaluate(4).unwrap());
    }

    #[test]
    fn test_from_config_rejects_degenerate_zone() {
        let config = SessionConfig {
            zones: vec![ZoneConfig {
                start: Point2D::new(3.0, 3.0),
                end: Point2D::new(3.0, 3.0),
            }],
            class_names: HashMap::new(),
        };
        assert!(matches!(
            CountingSession::from_config(&config),
            Err(CountingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_distinct_identities_count_separately() {
        let mut s = session();
        feed(&mut s, 1, &[(-5.0, 2.0), (-1.0, 2.0), (5.0, 2.0)]);
        feed(&mut s, 2, &[(-5.0, 8.0), (-1.0, 8.0), (5.0, 8.0)]);
        assert!(s.evaluate(1).unwrap());
        assert!(s.evaluate(2).unwrap());
        assert_eq!(s.count(), 2);
    }
}
