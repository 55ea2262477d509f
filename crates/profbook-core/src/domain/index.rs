use crate::error::ParseError;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// A one-based position as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }

    /// Digits only, no sign, not zero, and within `usize`.
    pub fn is_valid(raw: &str) -> bool {
        Self::from_digits(raw).is_some()
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::from_digits(raw.trim()).ok_or(ParseError::InvalidIndex)
    }

    fn from_digits(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<usize>().ok().and_then(Self::from_one_based)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
