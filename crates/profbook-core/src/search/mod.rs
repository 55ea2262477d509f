mod field;
mod folders;
mod predicate;

pub use field::{SearchField, SearchFieldMap};
pub use folders::group_by_module;
pub use predicate::ContactPredicate;
