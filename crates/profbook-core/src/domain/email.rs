use crate::error::ParseError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@[A-Za-z0-9]+(-[A-Za-z0-9]+)*(\.[A-Za-z0-9]+(-[A-Za-z0-9]+)*)*$",
    )
    .unwrap()
});

const MIN_LAST_LABEL_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn is_valid(raw: &str) -> bool {
        if !EMAIL_RE.is_match(raw) {
            return false;
        }
        raw.rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit('.').next())
            .is_some_and(|last| last.len() >= MIN_LAST_LABEL_LEN)
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ParseError::InvalidEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
