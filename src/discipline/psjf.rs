//! Preemptive shortest-job-first (shortest-remaining-time-first).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::Discipline;
use crate::models::{CompletionRecord, Process, ProcessId, Ticks};

/// Preemptive shortest-remaining-time discipline.
///
/// A discrete-time simulation advancing one tick at a time. Each tick
/// first admits every not-yet-admitted process whose arrival is due,
/// then runs the ready process with the least remaining burst for
/// exactly one tick — so a newly arrived shorter job preempts the
/// current one at the next tick boundary. When no admitted process has
/// work left, the clock idles forward to the next arrival.
///
/// The ready set is a binary min-heap keyed by `(remaining, id)`; the
/// id secondary makes the ordering total, so results are reproducible
/// for identical input. This is the only discipline here that honors
/// arrival times.
#[derive(Debug, Clone, Copy, Default)]
pub struct Psjf;

impl Discipline for Psjf {
    fn name(&self) -> &'static str {
        "PSJF"
    }

    fn run(&self, processes: &[Process]) -> CompletionRecord {
        let mut arrivals: Vec<&Process> = processes.iter().collect();
        arrivals.sort_by_key(|p| (p.arrival, p.id));

        let mut ready: BinaryHeap<Reverse<(Ticks, ProcessId)>> = BinaryHeap::new();
        let mut record = CompletionRecord::new();
        let mut clock: Ticks = 0;
        let mut next = 0;

        while next < arrivals.len() || !ready.is_empty() {
            while next < arrivals.len() && arrivals[next].arrival <= clock {
                ready.push(Reverse((arrivals[next].burst, arrivals[next].id)));
                next += 1;
            }
            match ready.pop() {
                Some(Reverse((remaining, id))) => {
                    clock += 1;
                    if remaining > 1 {
                        ready.push(Reverse((remaining - 1, id)));
                    } else {
                        record.record(id, clock);
                    }
                }
                // Nothing admitted has work left; idle until the next arrival.
                None => clock += 1,
            }
        }
        record
    }

    fn description(&self) -> &'static str {
        "Preemptive Shortest-Job-First (SRTF)"
    }
}
