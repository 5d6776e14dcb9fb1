//! Error types for EMA expression resolution
//!
//! Two kinds of failure exist: the address itself is malformed (a caller
//! problem detected while parsing or aligning groups), or it is well formed
//! but points outside the document. Both carry a stable `Display` message
//! so callers can match on it.

use std::fmt;
use thiserror::Error;

/// Which part of an EMA expression a range belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Measure,
    Staff,
    Beat,
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeKind::Measure => write!(f, "measure"),
            RangeKind::Staff => write!(f, "staff"),
            RangeKind::Beat => write!(f, "beat"),
        }
    }
}

/// Top-level EMA error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmaError {
    /// Grammar violation, contradictory shorthand, or misaligned groups
    #[error("Bad API request")]
    BadRequest { reason: String },

    /// A resolved range falls outside what the document declares
    #[error("EMA Range out of bounds")]
    OutOfBounds {
        kind: RangeKind,
        start: f64,
        end: f64,
        limit: f64,
    },
}

impl EmaError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        EmaError::BadRequest {
            reason: reason.into(),
        }
    }

    /// Human-readable diagnostic with the offending values
    pub fn detail(&self) -> String {
        match self {
            EmaError::BadRequest { reason } => format!("{}: {}", self, reason),
            EmaError::OutOfBounds {
                kind,
                start,
                end,
                limit,
            } => format!(
                "{}: {} range {}-{} exceeds limit {}",
                self, kind, start, end, limit
            ),
        }
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self, EmaError::BadRequest { .. })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, EmaError::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(EmaError::bad_request("x").to_string(), "Bad API request");
        let err = EmaError::OutOfBounds {
            kind: RangeKind::Measure,
            start: 10.0,
            end: 10.0,
            limit: 4.0,
        };
        assert_eq!(err.to_string(), "EMA Range out of bounds");
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_detail_names_component() {
        let err = EmaError::OutOfBounds {
            kind: RangeKind::Staff,
            start: 1.0,
            end: 5.0,
            limit: 4.0,
        };
        assert_eq!(
            err.detail(),
            "EMA Range out of bounds: staff range 1-5 exceeds limit 4"
        );
    }
}
