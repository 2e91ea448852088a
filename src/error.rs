//! Simulator error taxonomy.
//!
//! Three families, surfaced at different stages:
//! - input-format errors, raised while parsing process text (nothing runs),
//! - usage errors, raised while selecting a discipline (nothing runs),
//! - computation inconsistencies, raised by the metrics calculator when a
//!   discipline's output violates its own contract.
//!
//! All errors are terminal for the current run only; the simulation is
//! deterministic, so retrying with unchanged input is meaningless.

use thiserror::Error;

use crate::models::{ProcessId, Ticks};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("line {line}: expected 3 fields (id burst arrival), found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: '{token}' is not a valid non-negative integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: process id must be positive")]
    NonPositiveId { line: usize },
    #[error("line {line}: duplicate process id {id}")]
    DuplicateId { line: usize, id: ProcessId },
    #[error("unknown scheduling discipline '{0}'")]
    UnknownDiscipline(String),
    #[error("round-robin requires a time quantum")]
    MissingQuantum,
    #[error("time quantum must be at least 1")]
    ZeroQuantum,
    #[error("no completion time recorded for process {0}")]
    MissingCompletion(ProcessId),
    #[error("process {id} recorded completion {completion} before consuming its burst of {burst}")]
    CompletionBeforeBurst {
        id: ProcessId,
        completion: Ticks,
        burst: Ticks,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::FieldCount { line: 2, found: 1 }.to_string(),
            "line 2: expected 3 fields (id burst arrival), found 1"
        );
        assert_eq!(
            Error::UnknownDiscipline("hrrn".into()).to_string(),
            "unknown scheduling discipline 'hrrn'"
        );
        assert_eq!(
            Error::MissingCompletion(4).to_string(),
            "no completion time recorded for process 4"
        );
    }
}
