use crate::error::ParseError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Role {
    #[serde(rename = "prof")]
    Professor,
    #[serde(rename = "ta")]
    Ta,
}

impl Role {
    pub fn is_valid(raw: &str) -> bool {
        Self::from_token(raw).is_some()
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::from_token(raw.trim()).ok_or(ParseError::InvalidRole)
    }

    /// Canonical token, accepted back by [`Role::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Professor => "prof",
            Role::Ta => "ta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Professor => "Professor",
            Role::Ta => "TA",
        }
    }

    fn from_token(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "prof" | "professor" => Some(Role::Professor),
            "ta" | "teaching-assistant" => Some(Role::Ta),
            _ => None,
        }
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
