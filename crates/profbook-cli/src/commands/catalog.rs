use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use profbook_core::parse::parse_contact;
use profbook_core::{Contact, ContactRecord, ModuleRegistry};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the contacts file and validates every record.
///
/// A missing file is an empty contact list.
pub fn load_contacts(path: &Path, registry: &ModuleRegistry) -> Result<Vec<Contact>> {
    if !path.exists() {
        debug!(path = %path.display(), "contacts file missing, starting empty");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("read contacts file {}", path.display()))?;
    let records: Vec<ContactRecord> = serde_json::from_str(&contents).map_err(|err| {
        invalid_input(format!("parse contacts file {}: {}", path.display(), err))
    })?;

    let mut contacts = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let contact = parse_contact(registry, record)
            .map_err(|err| invalid_input(format!("contact #{}: {}", position + 1, err)))?;
        contacts.push(contact);
    }
    debug!(count = contacts.len(), "contacts loaded");
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::load_contacts;
    use profbook_core::ModuleRegistry;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_catalog() {
        let temp = TempDir::new().expect("tempdir");
        let contacts = load_contacts(&temp.path().join("none.json"), &ModuleRegistry::builtin())
            .expect("load");
        assert!(contacts.is_empty());
    }

    #[test]
    fn unknown_module_names_the_record() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("contacts.json");
        fs::write(
            &path,
            r#"[{"name":"Alex Yeoh","phone":"87438807","email":"alexyeoh@example.com","role":"ta","modules":["ZZ9999"]}]"#,
        )
        .expect("write contacts");
        let err = load_contacts(&path, &ModuleRegistry::builtin()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: contact #1: Unknown module code: ZZ9999. Use a module code from the module registry."
        );
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("contacts.json");
        fs::write(&path, "{ not json").expect("write contacts");
        let err = load_contacts(&path, &ModuleRegistry::builtin()).unwrap_err();
        assert!(
            err.to_string().starts_with("invalid input: parse contacts file"),
            "{err}"
        );
    }
}
