use crate::commands::print_json;
use anyhow::Result;
use clap::{Args, ValueEnum};
use profbook_core::parse::{
    parse_email, parse_index, parse_index_list, parse_module, parse_name, parse_phone, parse_role,
    parse_telegram,
};
use profbook_core::ModuleRegistry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckField {
    Name,
    Phone,
    Email,
    Role,
    Telegram,
    Module,
    Index,
    Indices,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(value_enum)]
    pub field: CheckField,
    pub value: String,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    field: CheckField,
    value: String,
}

pub fn check_value(registry: &ModuleRegistry, json: bool, args: CheckArgs) -> Result<()> {
    let value = canonical_value(registry, args.field, &args.value)?;
    if json {
        print_json(&CheckOutput {
            field: args.field,
            value,
        })
    } else {
        println!("{}", value);
        Ok(())
    }
}

fn canonical_value(registry: &ModuleRegistry, field: CheckField, raw: &str) -> Result<String> {
    let value = match field {
        CheckField::Name => parse_name(raw)?.to_string(),
        CheckField::Phone => parse_phone(raw)?.to_string(),
        CheckField::Email => parse_email(raw)?.to_string(),
        CheckField::Role => parse_role(raw)?.as_str().to_string(),
        CheckField::Telegram => parse_telegram(Some(raw))?
            .map(|handle| handle.to_string())
            .unwrap_or_default(),
        CheckField::Module => {
            let module = parse_module(registry, raw)?;
            format!("{} {}", module.code(), module.title())
        }
        CheckField::Index => parse_index(raw)?.to_string(),
        CheckField::Indices => parse_index_list(raw)?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    };
    Ok(value)
}
