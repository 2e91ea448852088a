//! Process model.
//!
//! A process is the unit of work handed to a scheduling discipline:
//! an identifier, a CPU burst, and an arrival time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within a simulation run.
pub type ProcessId = u32;

/// Simulation time in abstract ticks.
pub type Ticks = u64;

/// A process submitted to the simulator.
///
/// `burst` is the total CPU time the process requires; `arrival` is the
/// tick at which it becomes eligible to run. Only the preemptive
/// shortest-remaining-time discipline honors `arrival` — the other
/// disciplines treat every process as ready at t=0.
///
/// Disciplines never mutate the caller's processes: remaining-burst
/// bookkeeping during a run happens on per-run working copies, so the
/// same slice can be handed to the metrics calculator afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier, used to attribute results back to the caller.
    pub id: ProcessId,
    /// Total CPU time required (ticks).
    pub burst: Ticks,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Ticks,
}

impl Process {
    /// Creates a process that is ready at t=0.
    pub fn new(id: ProcessId, burst: Ticks) -> Self {
        Self {
            id,
            burst,
            arrival: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: Ticks) -> Self {
        self.arrival = arrival;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 12).with_arrival(5);
        assert_eq!(p.id, 3);
        assert_eq!(p.burst, 12);
        assert_eq!(p.arrival, 5);
    }

    #[test]
    fn test_process_ready_at_zero_by_default() {
        assert_eq!(Process::new(1, 4).arrival, 0);
    }

    #[test]
    fn test_process_serde_round_trip() {
        let p = Process::new(7, 9).with_arrival(2);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
