//! Sample size resolution
//!
//! The sample size is the only analysis parameter. Anything that is not an
//! integer in `[MIN, MAX]` resolves to [`SampleSize::DEFAULT`].

use serde::Serialize;
use std::fmt;

/// Number of newest projects analyzed in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleSize(u32);

impl SampleSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 500;
    pub const DEFAULT: SampleSize = SampleSize(50);

    /// Accept `value` if it is in range, otherwise `None`
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(SampleSize(value as u32))
        } else {
            None
        }
    }

    /// Resolve raw user input, falling back to the default.
    ///
    /// Leading whitespace is skipped and a leading integer prefix is used,
    /// so `"20"`, `" 20"` and `"20abc"` all resolve to 20.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(leading_integer)
            .and_then(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an optionally signed run of digits at the start of `raw`
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long inputs; they are out of range either way.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}
