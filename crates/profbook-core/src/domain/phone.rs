use crate::error::ParseError;
use serde::Serialize;
use std::fmt;

pub const MAX_PHONE_DIGITS: usize = 17;

/// A phone number: an optional leading `+` followed by 1 to 17 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn is_valid(raw: &str) -> bool {
        is_phone_digits(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ParseError::InvalidPhone);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matches `^\+?[0-9]{1,17}$` without allocating a regex.
pub fn is_phone_digits(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty()
        && digits.len() <= MAX_PHONE_DIGITS
        && digits.bytes().all(|b| b.is_ascii_digit())
}
