//! Line-based process input.
//!
//! One process per line, three whitespace-separated integer fields:
//! `id burst arrival`. Blank lines are ignored. Any malformed line —
//! wrong field count, non-integer token, zero or duplicate id — rejects
//! the whole batch; no partial process list is ever returned.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{Process, ProcessId, Ticks};

/// Parses process descriptors from free-form text.
///
/// Line numbers in errors are 1-based and count blank lines, so they
/// match what the user typed.
///
/// # Example
/// ```
/// use cpu_sched::input::parse_processes;
///
/// let processes = parse_processes("1 5 0\n2 3 0\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[0].burst, 5);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    let mut seen: HashSet<ProcessId> = HashSet::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(Error::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let id: ProcessId = parse_field(line_no, fields[0])?;
        let burst: Ticks = parse_field(line_no, fields[1])?;
        let arrival: Ticks = parse_field(line_no, fields[2])?;

        if id == 0 {
            return Err(Error::NonPositiveId { line: line_no });
        }
        if !seen.insert(id) {
            return Err(Error::DuplicateId { line: line_no, id });
        }

        processes.push(Process { id, burst, arrival });
    }

    log::debug!("parsed {} process descriptors", processes.len());
    Ok(processes)
}

fn parse_field<T: FromStr>(line: usize, token: &str) -> Result<T> {
    token.parse().map_err(|_| Error::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_batch() {
        let processes = parse_processes("1 5 0\n2 3 1\n3 8 4\n").unwrap();
        assert_eq!(processes.len(), 3);
        assert_eq!(processes[1], Process::new(2, 3).with_arrival(1));
    }

    #[test]
    fn test_blank_lines_and_extra_whitespace_ignored() {
        let processes = parse_processes("\n  1   5  0  \n\n2 3 0\n\n").unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].id, 1);
    }

    #[test]
    fn test_empty_input_yields_no_processes() {
        assert!(parse_processes("").unwrap().is_empty());
    }

    #[test]
    fn test_short_line_rejects_whole_batch() {
        let err = parse_processes("1 5 0\n2 3\n").unwrap_err();
        assert_eq!(err, Error::FieldCount { line: 2, found: 2 });
    }

    #[test]
    fn test_long_line_rejected() {
        let err = parse_processes("1 5 0 9\n").unwrap_err();
        assert_eq!(err, Error::FieldCount { line: 1, found: 4 });
    }

    #[test]
    fn test_non_integer_token_rejected() {
        let err = parse_processes("1 five 0\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInteger {
                line: 1,
                token: "five".into()
            }
        );
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = parse_processes("1 -5 0\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInteger {
                line: 1,
                token: "-5".into()
            }
        );
    }

    #[test]
    fn test_zero_id_rejected() {
        let err = parse_processes("0 5 0\n").unwrap_err();
        assert_eq!(err, Error::NonPositiveId { line: 1 });
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = parse_processes("1 5 0\n1 3 0\n").unwrap_err();
        assert_eq!(err, Error::DuplicateId { line: 2, id: 1 });
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = parse_processes("1 5 0\n\nx 3 0\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInteger {
                line: 3,
                token: "x".into()
            }
        );
    }
}
