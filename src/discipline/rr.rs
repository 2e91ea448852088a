//! Round-robin.

use std::collections::VecDeque;

use super::Discipline;
use crate::error::{Error, Result};
use crate::models::{CompletionRecord, Process, ProcessId, Ticks};

/// Quantum-sliced round-robin.
///
/// Processes cycle through a FIFO queue seeded in submission order.
/// Each turn grants at most `quantum` ticks; a process whose remaining
/// burst exceeds the quantum is decremented and re-enqueued at the tail,
/// otherwise it finishes on that turn and leaves the queue. A slice that
/// exactly equals the remaining burst finishes the process — no empty
/// re-enqueue. Arrivals are ignored.
///
/// Worst case O(total_burst / quantum) dequeues. The remaining-burst
/// counters live in the queue entries, never in the caller's processes.
#[derive(Debug, Clone, Copy)]
pub struct Rr {
    quantum: Ticks,
}

impl Rr {
    /// Creates a round-robin discipline with the given time quantum.
    ///
    /// A zero quantum would never make progress; it is rejected here,
    /// before any simulation starts.
    pub fn new(quantum: Ticks) -> Result<Self> {
        if quantum == 0 {
            return Err(Error::ZeroQuantum);
        }
        Ok(Self { quantum })
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Discipline for Rr {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> CompletionRecord {
        let mut queue: VecDeque<(ProcessId, Ticks)> =
            processes.iter().map(|p| (p.id, p.burst)).collect();

        let mut record = CompletionRecord::new();
        let mut clock: Ticks = 0;
        while let Some((id, remaining)) = queue.pop_front() {
            if remaining > self.quantum {
                clock += self.quantum;
                queue.push_back((id, remaining - self.quantum));
            } else {
                clock += remaining;
                record.record(id, clock);
            }
        }
        record
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_validation() {
        assert_eq!(Rr::new(0).unwrap_err(), Error::ZeroQuantum);
        assert_eq!(Rr::new(2).unwrap().quantum(), 2);
    }

    #[test]
    fn test_interleaved_slices() {
        // Trace with quantum 2: P1 runs 2 (rem 3), P2 runs 2 (rem 1),
        // P1 runs 2 (rem 1), P2 runs 1 (done at 7), P1 runs 1 (done at 8).
        let processes = vec![Process::new(1, 5), Process::new(2, 3)];
        let record = Rr::new(2).unwrap().run(&processes);
        assert_eq!(record.get(2), Some(7));
        assert_eq!(record.get(1), Some(8));
    }

    #[test]
    fn test_exact_slice_finishes_without_requeue() {
        // Remaining == quantum finishes on that turn.
        let processes = vec![Process::new(1, 4), Process::new(2, 2)];
        let record = Rr::new(2).unwrap().run(&processes);
        assert_eq!(record.get(2), Some(4));
        assert_eq!(record.get(1), Some(6));
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let processes = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
        let record = Rr::new(100).unwrap().run(&processes);
        assert_eq!(record.get(1), Some(5));
        assert_eq!(record.get(2), Some(8));
        assert_eq!(record.get(3), Some(16));
    }

    #[test]
    fn test_granted_slices_sum_to_total_burst() {
        let processes = vec![Process::new(1, 7), Process::new(2, 5), Process::new(3, 3)];
        let record = Rr::new(2).unwrap().run(&processes);
        let total: Ticks = processes.iter().map(|p| p.burst).sum();
        assert_eq!(record.makespan(), total);
        assert_eq!(record.len(), processes.len());
    }

    #[test]
    fn test_zero_burst_completes_at_current_clock() {
        let processes = vec![Process::new(1, 3), Process::new(2, 0)];
        let record = Rr::new(2).unwrap().run(&processes);
        // P1 runs 2, then P2's zero remaining completes it at 2.
        assert_eq!(record.get(2), Some(2));
        assert_eq!(record.get(1), Some(3));
    }

    #[test]
    fn test_empty_input() {
        assert!(Rr::new(1).unwrap().run(&[]).is_empty());
    }
}
