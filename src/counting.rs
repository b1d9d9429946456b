mod evaluator;
mod ledger;
mod line_zone;
mod point;
mod session;
mod trace;

pub use evaluator::{CrossingEvaluator, TRACE_LOOKBACK};
pub use ledger::CountLedger;
pub use line_zone::LineZone;
pub use point::Point2D;
pub use session::{CountingError, CountingSession, SessionConfig, ZoneConfig};
pub use trace::{MemoryTraceStore, ObjectId, Trace, TraceSample, TraceStore};
