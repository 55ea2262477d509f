pub mod domain;
pub mod dto;
pub mod error;
pub mod parse;
pub mod registry;
pub mod search;

pub use domain::*;
pub use dto::*;
pub use error::{ParseError, RegistryError};
pub use registry::ModuleRegistry;
pub use search::{group_by_module, ContactPredicate, SearchField, SearchFieldMap};
