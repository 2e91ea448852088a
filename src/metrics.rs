//! Per-process performance metrics.
//!
//! Computes standard scheduling indicators from a discipline's
//! completion record and the original process list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | `completion` (T) | Tick at which the process finished |
//! | `waiting` (M) | T − burst, time spent not running |
//! | `response_ratio` (R) | burst / T, in (0, 1] |
//! | `penalty_ratio` (P) | T / burst, in [1, ∞) |
//!
//! Metrics are always computed from the caller's original process list —
//! never from the working copies a discipline consumes during
//! simulation — and reported in input order, not execution order.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{CompletionRecord, Process, ProcessId, Ticks};

/// Performance metrics for one process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub id: ProcessId,
    /// Completion time T (ticks).
    pub completion: Ticks,
    /// Waiting measure M = T − burst (ticks).
    pub waiting: Ticks,
    /// Response ratio R = burst / T.
    pub response_ratio: f64,
    /// Penalty ratio P = T / burst.
    pub penalty_ratio: f64,
}

/// Computes metrics for each process, in the order the processes were given.
///
/// Fails with a computation-inconsistency error if the record has no
/// completion for some id, or claims a completion earlier than the
/// process's own burst — either indicates a discipline bug, never a
/// user input problem.
///
/// A zero-burst process has no meaningful ratios; both are defined as 1.0.
pub fn calculate(
    processes: &[Process],
    record: &CompletionRecord,
) -> Result<Vec<ProcessMetrics>> {
    processes
        .iter()
        .map(|p| {
            let completion = record.get(p.id).ok_or(Error::MissingCompletion(p.id))?;
            let waiting = completion
                .checked_sub(p.burst)
                .ok_or(Error::CompletionBeforeBurst {
                    id: p.id,
                    completion,
                    burst: p.burst,
                })?;
            let (response_ratio, penalty_ratio) = if p.burst == 0 {
                (1.0, 1.0)
            } else {
                (
                    p.burst as f64 / completion as f64,
                    completion as f64 / p.burst as f64,
                )
            };
            Ok(ProcessMetrics {
                id: p.id,
                completion,
                waiting,
                response_ratio,
                penalty_ratio,
            })
        })
        .collect()
}
