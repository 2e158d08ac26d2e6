//! Decimal-place format specifications (`"m,n"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a malformed `"m,n"` decimal format specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatSpecError {
    #[error("format must be in the form of m,n, got {0:?}")]
    Arity(String),

    #[error("format bound {0:?} is not a number")]
    NotANumber(String),

    #[error("format bound {0:?} is negative")]
    Negative(String),
}

/// Allowed number of decimal places, both bounds inclusive.
///
/// `DecimalFormat { min: 0, max: 0 }` means "no decimal places at all". A format
/// with `min > max` is well formed but allows nothing, so every value fails it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalFormat {
    /// Minimum number of decimal places
    pub min: usize,
    /// Maximum number of decimal places
    pub max: usize,
}

impl DecimalFormat {
    /// Create a format.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Integers only.
    pub const fn integer() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Parse an `"m,n"` specification.
    ///
    /// Surrounding whitespace is ignored; each bound must be a base-10 integer that is
    /// not negative.
    pub fn parse(spec: &str) -> Result<Self, FormatSpecError> {
        let parts: Vec<&str> = spec.trim().split(',').collect();
        let [min, max] = parts.as_slice() else {
            return Err(FormatSpecError::Arity(spec.to_string()));
        };

        let format = Self::new(parse_bound(min)?, parse_bound(max)?);
        trace_trace!(min = format.min, max = format.max, "parsed decimal format");
        Ok(format)
    }

    /// Whether this format forbids any decimal place.
    pub fn is_integer(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Whether `decimals` lies within the format's bounds.
    pub fn allows(&self, decimals: usize) -> bool {
        decimals >= self.min && decimals <= self.max
    }
}

fn parse_bound(part: &str) -> Result<usize, FormatSpecError> {
    match part.parse::<i64>() {
        Ok(n) if n < 0 => Err(FormatSpecError::Negative(part.to_string())),
        Ok(n) => usize::try_from(n).map_err(|_| FormatSpecError::NotANumber(part.to_string())),
        Err(_) => Err(FormatSpecError::NotANumber(part.to_string())),
    }
}

impl FromStr for DecimalFormat {
    type Err = FormatSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DecimalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// Count the digits after the decimal point of a rendered number.
///
/// Renderings without a `.` (integers, `NaN`, `inf`) have zero decimal places.
pub fn decimal_places(rendered: &str) -> usize {
    rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}
