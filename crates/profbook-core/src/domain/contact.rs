use crate::domain::{Email, Module, Name, Phone, Role, Telegram};
use std::collections::BTreeSet;

/// A contact whose every field has passed validation.
///
/// Each field type can only be built through its `parse` function, so a
/// `Contact` cannot hold an invalid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub role: Role,
    pub modules: BTreeSet<Module>,
    pub telegram: Option<Telegram>,
    pub favourite: bool,
}

impl Contact {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        role: Role,
        modules: BTreeSet<Module>,
        telegram: Option<Telegram>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            role,
            modules,
            telegram,
            favourite: false,
        }
    }

    pub fn with_favourite(mut self, favourite: bool) -> Self {
        self.favourite = favourite;
        self
    }

    pub fn is_enrolled_in(&self, code: &str) -> bool {
        self.modules.iter().any(|module| module.code() == code)
    }

    pub fn module_codes(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(Module::code)
    }
}
