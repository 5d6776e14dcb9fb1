//! EMA ranges
//!
//! A range is a pair of tokens parsed from `"A-B"` or a bare `"A"`.
//! The same type serves measures, staves and beats; the numeric
//! [`Position`] policy decides integer vs fractional resolution.

use std::fmt;
use std::str::FromStr;

use crate::errors::{EmaError, RangeKind};
use crate::models::BeatRange;
use super::tokens::{Position, RangeToken};

/// An unresolved range with start and end tokens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmaRange<N> {
    pub start: RangeToken<N>,
    pub end: RangeToken<N>,
}

/// 1-based measure addressing
pub type MeasureRange = EmaRange<u32>;

/// 1-based staff addressing
pub type StaffRange = EmaRange<u32>;

/// Fractional beat addressing, unresolved
pub type BeatSpec = EmaRange<f64>;

impl<N: Position> EmaRange<N> {
    pub fn new(start: RangeToken<N>, end: RangeToken<N>) -> Self {
        Self { start, end }
    }

    /// Parse `"A-B"` or `"A"` (which means `A-A`)
    pub fn parse(text: &str) -> Result<Self, EmaError> {
        let parts: Vec<&str> = text.split('-').collect();
        match parts.as_slice() {
            [single] => {
                let token = RangeToken::parse(single)?;
                Ok(Self::new(token, token))
            }
            [first, last] => {
                let start = RangeToken::parse(first)?;
                let end = RangeToken::parse(last)?;
                check_shorthands(&start, &end)?;
                Ok(Self::new(start, end))
            }
            _ => Err(EmaError::bad_request(format!(
                "range '{}' has more than one '-'",
                text
            ))),
        }
    }

    /// Substitute shorthands against `total` and check bounds.
    ///
    /// Integer contexts accept `1..=total`; beat contexts accept
    /// `0..=total + 1`.
    pub fn resolve_bounds(&self, total: u32, kind: RangeKind) -> Result<(N, N), EmaError> {
        let start = self.start.resolve_start(total);
        let end = self.end.resolve_end(total);
        let limit = N::addressable_end(total);

        if start < N::LOWER_LIMIT || end > limit || start > end {
            return Err(EmaError::OutOfBounds {
                kind,
                start: start.as_f64(),
                end: end.as_f64(),
                limit: limit.as_f64(),
            });
        }

        Ok((start, end))
    }
}

// `end` alone means the last unit, so it cannot open a longer range
fn check_shorthands<N>(start: &RangeToken<N>, end: &RangeToken<N>) -> Result<(), EmaError> {
    match (start, end) {
        (RangeToken::End, e) if !matches!(e, RangeToken::End) => {
            Err(EmaError::bad_request("'end' cannot start a range"))
        }
        (s, RangeToken::Start) if !matches!(s, RangeToken::Start) => {
            Err(EmaError::bad_request("'start' cannot end a range"))
        }
        (RangeToken::All, RangeToken::All) => Err(EmaError::bad_request("'all-all' is redundant")),
        _ => Ok(()),
    }
}

impl EmaRange<u32> {
    /// Every index covered by the range, in order
    pub fn to_indices(&self, total: u32, kind: RangeKind) -> Result<Vec<u32>, EmaError> {
        let (start, end) = self.resolve_bounds(total, kind)?;
        Ok((start..=end).collect())
    }
}

impl EmaRange<f64> {
    /// Resolve shorthands against the beat count of a measure
    pub fn resolve(&self, beat_count: u32) -> Result<BeatRange, EmaError> {
        let (start, end) = self.resolve_bounds(beat_count, RangeKind::Beat)?;
        Ok(BeatRange::new(start, end))
    }

    /// Beat markers covered by the range.
    ///
    /// Interior entries are whole beats; the first and last entries keep
    /// the exact (possibly fractional) boundaries. When both boundaries
    /// fall in the same beat the result is a single entry holding the end.
    pub fn to_positions(&self, beat_count: u32) -> Result<Vec<f64>, EmaError> {
        let resolved = self.resolve(beat_count)?;
        let first = resolved.start.floor() as u32;
        let last = resolved.end.floor() as u32;

        let mut positions: Vec<f64> = (first..=last).map(f64::from).collect();
        if let Some(head) = positions.first_mut() {
            *head = resolved.start;
        }
        if let Some(tail) = positions.last_mut() {
            *tail = resolved.end;
        }
        Ok(positions)
    }
}

impl<N: Position> FromStr for EmaRange<N> {
    type Err = EmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<N: fmt::Display> fmt::Display for EmaRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.start, self.end)
    }
}
