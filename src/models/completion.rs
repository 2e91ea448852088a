//! Completion record: the solution side of a discipline run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProcessId, Ticks};

/// Completion times keyed by process id.
///
/// Produced fresh by every discipline run; nothing survives across runs.
/// Iteration is in id order — callers that report in input order look
/// times up by id instead (see [`crate::metrics::calculate`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    times: BTreeMap<ProcessId, Ticks>,
}

impl CompletionRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the completion tick for a process.
    ///
    /// Returns the previous value if the id was already recorded;
    /// disciplines uphold the one-completion-per-process invariant, so
    /// a `Some` here indicates a discipline bug.
    pub fn record(&mut self, id: ProcessId, time: Ticks) -> Option<Ticks> {
        self.times.insert(id, time)
    }

    /// Completion tick for a process, if one was recorded.
    pub fn get(&self, id: ProcessId) -> Option<Ticks> {
        self.times.get(&id).copied()
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no completions were recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(id, completion)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, Ticks)> + '_ {
        self.times.iter().map(|(&id, &t)| (id, t))
    }

    /// Latest completion tick, or 0 when empty.
    pub fn makespan(&self) -> Ticks {
        self.times.values().copied().max().unwrap_or(0)
    }
}
