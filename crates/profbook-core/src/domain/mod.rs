pub mod contact;
pub mod email;
pub mod index;
pub mod module;
pub mod name;
pub mod phone;
pub mod role;
pub mod telegram;

pub use contact::Contact;
pub use email::Email;
pub use index::Index;
pub use module::Module;
pub use name::Name;
pub use phone::{is_phone_digits, Phone};
pub use role::Role;
pub use telegram::Telegram;
