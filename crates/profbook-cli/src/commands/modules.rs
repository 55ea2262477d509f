use crate::commands::{print_json, Context};
use anyhow::Result;
use profbook_core::{group_by_module, ModuleDto};

pub fn list_modules(ctx: &Context<'_>) -> Result<()> {
    let folders = group_by_module(ctx.contacts);
    let items: Vec<ModuleDto> = ctx
        .registry
        .iter()
        .map(|module| {
            let count = folders.get(module.code()).map_or(0, Vec::len);
            ModuleDto::from_module(module, count)
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no modules");
        return Ok(());
    }

    for item in items {
        println!("{}  {}  ({} contacts)", item.code, item.title, item.contacts);
    }
    Ok(())
}
