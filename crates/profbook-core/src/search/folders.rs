use crate::domain::{Contact, Index};
use std::collections::BTreeMap;

/// Groups contacts by module code, keeping each contact's one-based position.
pub fn group_by_module(contacts: &[Contact]) -> BTreeMap<String, Vec<Index>> {
    let mut folders: BTreeMap<String, Vec<Index>> = BTreeMap::new();
    for (position, contact) in contacts.iter().enumerate() {
        for code in contact.module_codes() {
            folders
                .entry(code.to_string())
                .or_default()
                .push(Index::from_zero_based(position));
        }
    }
    folders
}
