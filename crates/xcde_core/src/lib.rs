pub mod bytes;
pub mod character;
pub mod core_api;
pub mod layout;
pub mod tier;
