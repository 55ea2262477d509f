use crate::domain::Module;
use crate::error::RegistryError;
use std::collections::BTreeMap;

const BUILTIN_MODULES: &[(&str, &str)] = &[
    ("CS1101S", "Programming Methodology"),
    ("CS1231S", "Discrete Structures"),
    ("CS2030S", "Programming Methodology II"),
    ("CS2040S", "Data Structures and Algorithms"),
    ("CS2100", "Computer Organisation"),
    ("CS2101", "Effective Communication for Computing Professionals"),
    ("CS2103T", "Software Engineering"),
    ("CS2105", "Introduction to Computer Networks"),
    ("CS2106", "Introduction to Operating Systems"),
    ("CS2109S", "Introduction to AI and Machine Learning"),
    ("CS3230", "Design and Analysis of Algorithms"),
    ("CS3243", "Introduction to Artificial Intelligence"),
    ("GEA1000", "Quantitative Reasoning with Data"),
];

/// Read-only catalog of modules keyed by their exact code.
///
/// Built once at startup and shared by reference; there is no way to mutate a
/// registry after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Module>,
}

impl ModuleRegistry {
    pub fn builtin() -> Self {
        let modules = BUILTIN_MODULES
            .iter()
            .map(|(code, title)| (code.to_string(), Module::new(*code, *title)))
            .collect();
        Self { modules }
    }

    pub fn from_entries<I, C, T>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        Self::default().with_entries(entries)
    }

    /// Returns a new registry holding these modules plus the `(code, title)`
    /// pairs in `extra`.
    pub fn with_entries<I, C, T>(&self, extra: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let mut modules = self.modules.clone();
        for (code, title) in extra {
            let code = code.into();
            if code.is_empty() || !code.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err(RegistryError::InvalidCode(code));
            }
            if modules.contains_key(&code) {
                return Err(RegistryError::DuplicateCode(code));
            }
            modules.insert(code.clone(), Module::new(code, title));
        }
        Ok(Self { modules })
    }

    pub fn get(&self, code: &str) -> Option<&Module> {
        self.modules.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.modules.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
