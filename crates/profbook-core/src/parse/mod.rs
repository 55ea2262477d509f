//! Entry points used by command handlers to turn raw argument text into
//! typed values.
//!
//! Every function either returns a fully valid value or the first
//! [`ParseError`] it hits; there are no partial results.

mod keywords;

use crate::domain::{Contact, Email, Index, Module, Name, Phone, Role, Telegram};
use crate::dto::ContactRecord;
use crate::error::ParseError;
use crate::registry::ModuleRegistry;
use std::collections::{BTreeSet, HashSet};

pub use keywords::{
    validate_email_keywords, validate_favourite_keywords, validate_module_keywords,
    validate_name_keywords, validate_phone_keywords, validate_role_keywords,
    validate_telegram_keywords,
};
pub(crate) use keywords::parse_favourite_keyword;

pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    Index::parse(raw)
}

/// Parses whitespace-separated one-based indexes, keeping input order.
///
/// Duplicates are detected on the raw token text, so `1` and `01` are
/// distinct tokens.
pub fn parse_index_list(raw: &str) -> Result<Vec<Index>, ParseError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut indexes = Vec::new();

    for token in raw.split_ascii_whitespace() {
        if !seen.insert(token) {
            return Err(ParseError::DuplicateIndex(token.to_string()));
        }
        indexes.push(parse_index(token)?);
    }

    if indexes.is_empty() {
        return Err(ParseError::InvalidIndex);
    }
    Ok(indexes)
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Name::parse(raw)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Phone::parse(raw)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Email::parse(raw)
}

pub fn parse_role(raw: &str) -> Result<Role, ParseError> {
    Role::parse(raw)
}

/// An absent handle stays absent; a present one must be valid.
pub fn parse_telegram(raw: Option<&str>) -> Result<Option<Telegram>, ParseError> {
    raw.map(Telegram::parse).transpose()
}

pub fn parse_module(registry: &ModuleRegistry, raw: &str) -> Result<Module, ParseError> {
    let code = raw.trim();
    registry
        .get(code)
        .cloned()
        .ok_or_else(|| ParseError::UnknownModule(code.to_string()))
}

pub fn parse_modules<I, S>(
    registry: &ModuleRegistry,
    codes: I,
) -> Result<BTreeSet<Module>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut modules = BTreeSet::new();
    let mut supplied = false;
    for code in codes {
        supplied = true;
        modules.insert(parse_module(registry, code.as_ref())?);
    }
    if !supplied {
        return Err(ParseError::NoModules);
    }
    Ok(modules)
}

/// Validates every field of a raw record and assembles a [`Contact`].
///
/// A record with no module codes yields a contact with no modules.
pub fn parse_contact(
    registry: &ModuleRegistry,
    record: &ContactRecord,
) -> Result<Contact, ParseError> {
    let name = parse_name(&record.name)?;
    let phone = parse_phone(&record.phone)?;
    let email = parse_email(&record.email)?;
    let role = parse_role(&record.role)?;
    let modules = if record.modules.is_empty() {
        BTreeSet::new()
    } else {
        parse_modules(registry, &record.modules)?
    };
    let telegram = parse_telegram(record.telegram.as_deref())?;

    Ok(Contact::new(name, phone, email, role, modules, telegram).with_favourite(record.favourite))
}
