use crate::domain::{Contact, Index, Role};
use crate::error::ParseError;
use crate::parse::parse_favourite_keyword;
use crate::search::{SearchField, SearchFieldMap};

/// A contact filter: every field in the map must match (AND), and a field
/// matches when any one of its keywords does (OR).
///
/// A field present with no keywords matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPredicate {
    fields: SearchFieldMap,
}

impl ContactPredicate {
    pub fn new(fields: SearchFieldMap) -> Self {
        Self { fields }
    }

    /// Validates the keywords of every field before building the predicate.
    pub fn build(fields: SearchFieldMap) -> Result<Self, ParseError> {
        fields.validate()?;
        Ok(Self::new(fields))
    }

    pub fn fields(&self) -> &SearchFieldMap {
        &self.fields
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        self.fields.fields().all(|(field, keywords)| {
            keywords
                .iter()
                .any(|keyword| keyword_matches(field, keyword, contact))
        })
    }

    /// Yields matching contacts with their one-based position in `contacts`.
    pub fn filter<'a>(
        &'a self,
        contacts: &'a [Contact],
    ) -> impl Iterator<Item = (Index, &'a Contact)> + 'a {
        contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| self.matches(contact))
            .map(|(position, contact)| (Index::from_zero_based(position), contact))
    }
}

fn keyword_matches(field: SearchField, keyword: &str, contact: &Contact) -> bool {
    match field {
        SearchField::Name => contains_word_ignore_case(contact.name.tokens(), keyword),
        SearchField::Phone => contact.phone.as_str() == keyword,
        SearchField::Email => contact
            .email
            .as_str()
            .to_lowercase()
            .contains(&keyword.to_lowercase()),
        SearchField::Module => contact.is_enrolled_in(keyword),
        SearchField::Telegram => contact.telegram.as_ref().is_some_and(|handle| {
            contains_word_ignore_case(handle.as_str().split_whitespace(), keyword)
        }),
        SearchField::Role => Role::parse(keyword).is_ok_and(|role| role == contact.role),
        SearchField::Favourite => {
            parse_favourite_keyword(keyword).is_some_and(|wanted| wanted == contact.favourite)
        }
    }
}

fn contains_word_ignore_case<'a>(mut words: impl Iterator<Item = &'a str>, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    words.any(|word| word.to_lowercase() == keyword)
}
