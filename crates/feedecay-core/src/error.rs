//! Error types for parameter validation at the CLI and HTTP boundaries.
//!
//! The cost model itself is total and has no error path; only callers that
//! accept user-supplied tunables reject values here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}
