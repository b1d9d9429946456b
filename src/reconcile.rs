//! Reconciliation layer between an external multi-object tracker and the
//! counting session.
//!
//! The tracker's lifecycle states are consumed abstractly as
//! [`TrackObservation`] variants; implement [`TrackSource`] for a concrete
//! tracker and drive everything through [`CountingPipeline`].

mod adapter;
mod observation;
mod pipeline;
mod rect;
mod source;

pub use adapter::TrackReconciler;
pub use observation::TrackObservation;
pub use pipeline::{CountingPipeline, PipelineError};
pub use rect::Rect;
pub use source::TrackSource;
