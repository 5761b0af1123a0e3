pub mod library;
pub mod page;
pub mod store;
