//! Shortest-job-first, non-preemptive.

use super::Discipline;
use crate::models::{CompletionRecord, Process, Ticks};

/// Runs the shortest burst first, to completion.
///
/// A stable sort by burst (ties keep submission order) fixes the run
/// order, then the clock advances burst by burst as in FCFS. Completion
/// times are attributed by id, so the sort never loses the association
/// with the caller's processes. Arrivals are ignored — every process is
/// treated as ready at t=0.
///
/// # Reference
/// Smith (1956): SPT ordering minimizes mean flow time on one machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> CompletionRecord {
        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| p.burst);

        let mut record = CompletionRecord::new();
        let mut clock: Ticks = 0;
        for p in order {
            clock += p.burst;
            record.record(p.id, clock);
        }
        record
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discipline::Fcfs;

    #[test]
    fn test_shortest_burst_runs_first() {
        let processes = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
        let record = Sjf.run(&processes);
        assert_eq!(record.get(2), Some(3));
        assert_eq!(record.get(1), Some(8));
        assert_eq!(record.get(3), Some(16));
    }

    #[test]
    fn test_equal_bursts_keep_submission_order() {
        let processes = vec![Process::new(9, 4), Process::new(2, 4), Process::new(5, 4)];
        let record = Sjf.run(&processes);
        assert_eq!(record.get(9), Some(4));
        assert_eq!(record.get(2), Some(8));
        assert_eq!(record.get(5), Some(12));
    }

    #[test]
    fn test_equivalent_to_fcfs_on_sorted_input() {
        let mut processes = vec![Process::new(1, 7), Process::new(2, 2), Process::new(3, 4)];
        let sjf_record = Sjf.run(&processes);
        processes.sort_by_key(|p| p.burst);
        let fcfs_record = Fcfs.run(&processes);
        assert_eq!(sjf_record, fcfs_record);
    }

    #[test]
    fn test_empty_input() {
        assert!(Sjf.run(&[]).is_empty());
    }
}
