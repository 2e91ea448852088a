//! Scheduling disciplines.
//!
//! Four disciplines share one contract: consume a process set, produce a
//! [`CompletionRecord`] keyed by process id. The shell dispatches on
//! [`Algorithm`] without knowing which discipline runs.
//!
//! # Disciplines
//!
//! - **FCFS**: submission order, no preemption
//! - **SJF**: shortest burst first, no preemption
//! - **RR**: quantum-sliced FIFO cycling
//! - **PSJF** (SRTF): preemptive shortest-remaining-time, tick-accurate
//!
//! Only PSJF honors arrival times; the others treat every process as
//! ready at t=0, matching the simplified textbook treatment this
//! simulator models.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod psjf;
mod rr;
mod sjf;

pub use fcfs::Fcfs;
pub use psjf::Psjf;
pub use rr::Rr;
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{CompletionRecord, Process, Ticks};

/// A scheduling discipline.
///
/// Each `run` is fully self-contained: the discipline clones whatever
/// working state it needs (remaining bursts, queues), so the caller's
/// process slice is never mutated and can be handed unchanged to the
/// metrics calculator afterwards.
pub trait Discipline: Debug {
    /// Discipline name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the simulation and returns completion times keyed by id.
    ///
    /// Every input process appears exactly once in the result.
    fn run(&self, processes: &[Process]) -> CompletionRecord;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Discipline selector used at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Fcfs,
    Rr,
    Sjf,
    Psjf,
}

impl Algorithm {
    /// All selectable disciplines.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Rr,
        Algorithm::Sjf,
        Algorithm::Psjf,
    ];

    /// Builds the discipline behind this selector.
    ///
    /// `quantum` is required (and must be positive) for round-robin and
    /// ignored by every other discipline. Both failure modes are usage
    /// errors raised before any simulation starts.
    pub fn build(self, quantum: Option<Ticks>) -> Result<Box<dyn Discipline>> {
        match self {
            Algorithm::Fcfs => Ok(Box::new(Fcfs)),
            Algorithm::Sjf => Ok(Box::new(Sjf)),
            Algorithm::Psjf => Ok(Box::new(Psjf)),
            Algorithm::Rr => {
                let quantum = quantum.ok_or(Error::MissingQuantum)?;
                Ok(Box::new(Rr::new(quantum)?))
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-insensitive; `srtf` is accepted as an alias for `psjf`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "rr" => Ok(Algorithm::Rr),
            "sjf" => Ok(Algorithm::Sjf),
            "psjf" | "srtf" => Ok(Algorithm::Psjf),
            _ => Err(Error::UnknownDiscipline(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Rr => write!(f, "RR"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::Psjf => write!(f, "PSJF"),
        }
    }
}
