//! First-come-first-served.

use super::Discipline;
use crate::models::{CompletionRecord, Process, Ticks};

/// Runs processes strictly in submission order.
///
/// The clock starts at 0 and advances by each burst in turn; the clock
/// value after a process's burst is its completion time. Arrivals are
/// ignored — every process is treated as ready at t=0. No preemption,
/// no reordering. O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> CompletionRecord {
        let mut record = CompletionRecord::new();
        let mut clock: Ticks = 0;
        for p in processes {
            clock += p.burst;
            record.record(p.id, clock);
        }
        record
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
