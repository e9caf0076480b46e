use rebal_directive::DirectiveError;
use rebal_domain::MathError;
use thiserror::Error;

/// Errors surfaced by the repositioning planner.
///
/// Remote failures are never retried internally: a caller that wants to
/// retry must construct a fresh planner so the spot snapshot is re-read.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The burn range still contains the spot tick; there is nothing to
    /// rebalance until the position exits its range.
    #[error("position [{lower}, {upper}) still in range at spot tick {spot_tick}")]
    PositionNotOutOfRange {
        lower: i32,
        upper: i32,
        spot_tick: i32,
    },
    /// Fetching the spot snapshot, projecting swap impact, estimating gas,
    /// or running a static call failed.
    #[error("remote read failed: {0}")]
    RemoteRead(#[source] anyhow::Error),
    /// The final transaction submission failed. Never resubmitted:
    /// a resubmission without a fresh spot read would execute against a
    /// stale limit price.
    #[error("submission failed: {0}")]
    Submission(#[source] anyhow::Error),
    /// Domain math failure.
    #[error(transparent)]
    Math(#[from] MathError),
    /// Directive construction or encoding failure.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}
