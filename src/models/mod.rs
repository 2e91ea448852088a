//! Simulator domain models.
//!
//! Core data types for a simulation run: the [`Process`] records a
//! discipline consumes and the [`CompletionRecord`] it produces.
//!
//! Times are abstract [`Ticks`] relative to the simulation epoch (t=0);
//! the consumer defines what one tick means.

mod completion;
mod process;

pub use completion::CompletionRecord;
pub use process::{Process, ProcessId, Ticks};
