use crate::domain::{Contact, Index, Module, Role};
use serde::{Deserialize, Serialize};

/// A raw contact as read from a contacts file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub favourite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListItemDto {
    pub index: Index,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: Role,
    pub modules: Vec<String>,
    pub telegram: Option<String>,
    pub favourite: bool,
}

impl ContactListItemDto {
    pub fn from_contact(index: Index, contact: &Contact) -> Self {
        Self {
            index,
            name: contact.name.to_string(),
            phone: contact.phone.to_string(),
            email: contact.email.to_string(),
            role: contact.role,
            modules: contact.module_codes().map(str::to_string).collect(),
            telegram: contact.telegram.as_ref().map(ToString::to_string),
            favourite: contact.favourite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDto {
    pub code: String,
    pub title: String,
    pub contacts: usize,
}

impl ModuleDto {
    pub fn from_module(module: &Module, contacts: usize) -> Self {
        Self {
            code: module.code().to_string(),
            title: module.title().to_string(),
            contacts,
        }
    }
}
