use anyhow::Result;
use profbook_core::{Contact, ModuleRegistry};
use serde::Serialize;
use std::io::{self, Write};

pub mod catalog;
pub mod check;
pub mod contacts;
pub mod find;
pub mod modules;

pub struct Context<'a> {
    pub contacts: &'a [Contact],
    pub registry: &'a ModuleRegistry,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
