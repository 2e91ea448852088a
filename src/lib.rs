//! CPU scheduling simulator.
//!
//! Computes per-process completion times under four textbook scheduling
//! disciplines — FCFS, SJF, round-robin, and preemptive SJF (SRTF) —
//! and derives standard performance metrics from them.
//!
//! # Modules
//!
//! - **`models`**: domain types — [`Process`], [`CompletionRecord`]
//! - **`discipline`**: the four disciplines behind the [`Discipline`] trait,
//!   selected via [`Algorithm`]
//! - **`metrics`**: per-process T, M, R, P in input order
//! - **`input`**: line-based `id burst arrival` parsing
//! - **`error`**: input-format, usage, and computation-inconsistency errors
//!
//! # Example
//!
//! ```
//! use cpu_sched::discipline::{Discipline, Fcfs};
//! use cpu_sched::models::Process;
//! use cpu_sched::metrics;
//!
//! let processes = vec![Process::new(1, 5), Process::new(2, 3)];
//! let record = Fcfs.run(&processes);
//! let rows = metrics::calculate(&processes, &record).unwrap();
//! assert_eq!(rows[0].completion, 5);
//! assert_eq!(rows[1].completion, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod discipline;
pub mod error;
pub mod input;
pub mod metrics;
pub mod models;

pub use discipline::{Algorithm, Discipline};
pub use error::{Error, Result};
pub use metrics::ProcessMetrics;
pub use models::{CompletionRecord, Process};
