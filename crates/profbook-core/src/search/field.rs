use crate::error::ParseError;
use crate::parse::{
    validate_email_keywords, validate_favourite_keywords, validate_module_keywords,
    validate_name_keywords, validate_phone_keywords, validate_role_keywords,
    validate_telegram_keywords,
};
use std::collections::BTreeMap;
use std::fmt;

/// The contact attribute a list of search keywords applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Module,
    Telegram,
    Role,
    Favourite,
}

impl SearchField {
    pub const ALL: [SearchField; 7] = [
        SearchField::Name,
        SearchField::Phone,
        SearchField::Email,
        SearchField::Module,
        SearchField::Telegram,
        SearchField::Role,
        SearchField::Favourite,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Phone => "phone",
            SearchField::Email => "email",
            SearchField::Module => "module",
            SearchField::Telegram => "telegram",
            SearchField::Role => "role",
            SearchField::Favourite => "favourite",
        }
    }

    pub fn validate_keywords(self, keywords: &[String]) -> Result<(), ParseError> {
        match self {
            SearchField::Name => validate_name_keywords(keywords),
            SearchField::Phone => validate_phone_keywords(keywords),
            SearchField::Email => validate_email_keywords(keywords),
            SearchField::Module => validate_module_keywords(keywords),
            SearchField::Telegram => validate_telegram_keywords(keywords),
            SearchField::Role => validate_role_keywords(keywords),
            SearchField::Favourite => validate_favourite_keywords(keywords),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keywords grouped by the field they target.
///
/// Keyword order and duplicates are kept so the search can be echoed back to
/// the user as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFieldMap {
    fields: BTreeMap<SearchField, Vec<String>>,
}

impl SearchFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any keywords already held for `field`.
    pub fn insert<I, S>(&mut self, field: SearchField, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .insert(field, keywords.into_iter().map(Into::into).collect());
    }

    pub fn push(&mut self, field: SearchField, keyword: impl Into<String>) {
        self.fields.entry(field).or_default().push(keyword.into());
    }

    pub fn get(&self, field: SearchField) -> Option<&[String]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = (SearchField, &[String])> {
        self.fields
            .iter()
            .map(|(field, keywords)| (*field, keywords.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Checks every field's keywords, reporting the first failure in field order.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (field, keywords) in self.fields() {
            field.validate_keywords(keywords)?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchFieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (field, keywords)) in self.fields().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, keywords.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchField, SearchFieldMap};
    use crate::error::ParseError;
    use std::collections::BTreeSet;

    #[test]
    fn push_appends_and_insert_replaces() {
        let mut map = SearchFieldMap::new();
        map.push(SearchField::Name, "Alice");
        map.push(SearchField::Name, "Alice");
        assert_eq!(map.get(SearchField::Name).unwrap().len(), 2);

        map.insert(SearchField::Name, ["Bob"]);
        assert_eq!(map.get(SearchField::Name).unwrap(), ["Bob".to_string()]);
        assert!(map.get(SearchField::Email).is_none());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut map = SearchFieldMap::new();
        map.insert(SearchField::Role, ["ta"]);
        map.insert(SearchField::Name, ["Alice", "Bob"]);
        assert_eq!(map.to_string(), "name: Alice Bob; role: ta");
    }

    #[test]
    fn validate_reports_first_field_failure() {
        let mut map = SearchFieldMap::new();
        map.insert(SearchField::Favourite, ["y", "n"]);
        map.insert(SearchField::Phone, ["12a"]);
        assert_eq!(map.validate().unwrap_err(), ParseError::InvalidPhoneKeyword);
    }

    #[test]
    fn every_field_has_a_distinct_label() {
        let labels: BTreeSet<_> = SearchField::ALL.iter().map(|field| field.label()).collect();
        assert_eq!(labels.len(), SearchField::ALL.len());
    }
}
