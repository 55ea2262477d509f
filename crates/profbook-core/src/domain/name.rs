use crate::error::ParseError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .,'/()-]*$").unwrap());

/// A person's name, with runs of spaces collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn is_valid(raw: &str) -> bool {
        NAME_RE.is_match(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let normalized = collapse_spaces(raw.trim());
        if !Self::is_valid(&normalized) {
            return Err(ParseError::InvalidName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-delimited words of the name, used for keyword matching.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn collapse_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_space = false;
    for ch in value.chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out
}
