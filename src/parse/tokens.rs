//! Range token recognition
//!
//! A range boundary is either a number or one of the shorthands
//! `all`, `start`, `end`. Measures and staves are addressed with
//! 1-based integers; beats may be fractional and may address one
//! position past the nominal beat count.

use std::fmt;

use crate::errors::EmaError;

/// Numeric policy for a range context (integer vs fractional beats)
pub trait Position: Copy + PartialOrd + fmt::Display + fmt::Debug {
    /// Smallest value a resolved start may take
    const LOWER_LIMIT: Self;

    /// Value substituted for `start` (and the lower half of `all`)
    const FIRST: Self;

    /// Parse a numeric token, `None` when the text is not a number
    fn parse_number(text: &str) -> Option<Self>;

    /// Highest addressable position for a document total
    fn addressable_end(total: u32) -> Self;

    fn as_f64(self) -> f64;
}

impl Position for u32 {
    const LOWER_LIMIT: Self = 1;
    const FIRST: Self = 1;

    fn parse_number(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok()
    }

    fn addressable_end(total: u32) -> Self {
        total
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Position for f64 {
    const LOWER_LIMIT: Self = 0.0;
    const FIRST: Self = 1.0;

    fn parse_number(text: &str) -> Option<Self> {
        // Rust would otherwise accept "inf", "NaN" and exponents
        if !text.bytes().any(|b| b.is_ascii_digit())
            || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        {
            return None;
        }
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    // 4.5 is a valid beat in a 4-beat measure
    fn addressable_end(total: u32) -> Self {
        f64::from(total) + 1.0
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// One boundary of an EMA range, before resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeToken<N> {
    Number(N),
    All,
    Start,
    End,
}

impl<N: Position> RangeToken<N> {
    /// Parse a token. Shorthands are matched exactly and case-sensitively.
    pub fn parse(text: &str) -> Result<Self, EmaError> {
        match text {
            "all" => Ok(RangeToken::All),
            "start" => Ok(RangeToken::Start),
            "end" => Ok(RangeToken::End),
            _ => N::parse_number(text).map(RangeToken::Number).ok_or_else(|| {
                EmaError::bad_request(format!("'{}' is not a valid range token", text))
            }),
        }
    }

    pub fn is_shorthand(&self) -> bool {
        !matches!(self, RangeToken::Number(_))
    }

    /// Concrete value when this token is the start of a range
    pub fn resolve_start(&self, total: u32) -> N {
        match self {
            RangeToken::Number(value) => *value,
            RangeToken::All | RangeToken::Start => N::FIRST,
            RangeToken::End => N::addressable_end(total),
        }
    }

    /// Concrete value when this token is the end of a range
    pub fn resolve_end(&self, total: u32) -> N {
        match self {
            RangeToken::Number(value) => *value,
            RangeToken::All | RangeToken::End => N::addressable_end(total),
            RangeToken::Start => N::FIRST,
        }
    }
}

impl<N: fmt::Display> fmt::Display for RangeToken<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeToken::Number(value) => write!(f, "{}", value),
            RangeToken::All => write!(f, "all"),
            RangeToken::Start => write!(f, "start"),
            RangeToken::End => write!(f, "end"),
        }
    }
}
