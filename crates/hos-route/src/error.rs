//! Route validation errors.

use thiserror::Error;

/// Errors produced by `hos-route`.  All of them describe malformed input.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("route {field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("route {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("{what} has a non-finite coordinate")]
    InvalidCoordinate { what: String },

    #[error("route duration of {0} h cannot be represented in minutes")]
    DurationOutOfRange(f64),
}

pub type RouteResult<T> = Result<T, RouteError>;
