use crate::commands::{print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use clap::Args;
use profbook_core::parse::parse_index_list;
use profbook_core::{Contact, ContactListItemDto, Index};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// One-based indexes, e.g. `show 1 3 4`
    #[arg(required = true, num_args = 1..)]
    pub indices: Vec<String>,
}

pub fn list_contacts(ctx: &Context<'_>) -> Result<()> {
    let all = ctx
        .contacts
        .iter()
        .enumerate()
        .map(|(position, contact)| (Index::from_zero_based(position), contact))
        .collect();
    print_contacts(ctx, all)
}

pub fn show_contacts(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let indexes = parse_index_list(&args.indices.join(" "))?;

    let mut selected = Vec::with_capacity(indexes.len());
    for index in indexes {
        let contact = ctx
            .contacts
            .get(index.zero_based())
            .ok_or_else(|| {
                not_found(format!("The contact index provided is invalid: {}", index))
            })?;
        selected.push((index, contact));
    }
    print_contacts(ctx, selected)
}

pub fn print_contacts(ctx: &Context<'_>, contacts: Vec<(Index, &Contact)>) -> Result<()> {
    let items: Vec<ContactListItemDto> = contacts
        .into_iter()
        .map(|(index, contact)| ContactListItemDto::from_contact(index, contact))
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for item in items {
        let modules = if item.modules.is_empty() {
            "-".to_string()
        } else {
            item.modules.join(",")
        };
        let telegram = item.telegram.as_deref().unwrap_or("-");
        let star = if item.favourite { " *" } else { "" };
        println!(
            "{}. {}  {}  {}  [{}]  {}  {}{}",
            item.index,
            item.name,
            item.phone,
            item.email,
            item.role.label(),
            modules,
            telegram,
            star
        );
    }

    Ok(())
}
