use crate::commands::contacts::print_contacts;
use crate::commands::Context;
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use profbook_core::{ContactPredicate, SearchField, SearchFieldMap};
use tracing::debug;

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(long, value_name = "KEYWORD", num_args = 1..)]
    pub name: Vec<String>,
    #[arg(long, value_name = "KEYWORD", num_args = 1..)]
    pub phone: Vec<String>,
    #[arg(long, value_name = "KEYWORD", num_args = 1..)]
    pub email: Vec<String>,
    #[arg(long, value_name = "CODE", num_args = 1..)]
    pub module: Vec<String>,
    #[arg(long, value_name = "HANDLE", num_args = 1..)]
    pub telegram: Vec<String>,
    #[arg(long, value_name = "prof|ta", num_args = 1..)]
    pub role: Vec<String>,
    #[arg(long, value_name = "y|n", num_args = 1..)]
    pub favourite: Vec<String>,
}

impl FindArgs {
    fn into_field_map(self) -> SearchFieldMap {
        let mut map = SearchFieldMap::new();
        for (field, values) in [
            (SearchField::Name, self.name),
            (SearchField::Phone, self.phone),
            (SearchField::Email, self.email),
            (SearchField::Module, self.module),
            (SearchField::Telegram, self.telegram),
            (SearchField::Role, self.role),
            (SearchField::Favourite, self.favourite),
        ] {
            for value in values {
                push_keywords(&mut map, field, &value);
            }
        }
        map
    }
}

// A blank value is kept as one empty keyword so validation can reject it.
fn push_keywords(map: &mut SearchFieldMap, field: SearchField, value: &str) {
    let mut pushed = false;
    for keyword in value.split_whitespace() {
        map.push(field, keyword);
        pushed = true;
    }
    if !pushed {
        map.push(field, "");
    }
}

pub fn find_contacts(ctx: &Context<'_>, args: FindArgs) -> Result<()> {
    let fields = args.into_field_map();
    if fields.is_empty() {
        return Err(invalid_input("provide at least one search field"));
    }

    let predicate = ContactPredicate::build(fields)?;
    debug!(search = %predicate.fields(), "search predicate built");

    let matches: Vec<_> = predicate.filter(ctx.contacts).collect();
    if !ctx.json {
        println!("{} contacts matching {}", matches.len(), predicate.fields());
    }
    print_contacts(ctx, matches)
}

#[cfg(test)]
mod tests {
    use super::{push_keywords, FindArgs};
    use profbook_core::{SearchField, SearchFieldMap};

    #[test]
    fn values_are_split_into_keywords() {
        let mut map = SearchFieldMap::new();
        push_keywords(&mut map, SearchField::Name, "Alice  Bob");
        assert_eq!(
            map.get(SearchField::Name).unwrap(),
            ["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn blank_value_becomes_empty_keyword() {
        let mut map = SearchFieldMap::new();
        push_keywords(&mut map, SearchField::Email, "  ");
        assert_eq!(map.get(SearchField::Email).unwrap(), [String::new()]);
    }

    #[test]
    fn absent_flags_are_not_searched() {
        let args = FindArgs {
            name: Vec::new(),
            phone: Vec::new(),
            email: Vec::new(),
            module: vec!["CS2103T".to_string()],
            telegram: Vec::new(),
            role: vec!["ta".to_string()],
            favourite: Vec::new(),
        };
        let map = args.into_field_map();
        assert_eq!(map.len(), 2);
        assert!(map.get(SearchField::Name).is_none());
    }
}
