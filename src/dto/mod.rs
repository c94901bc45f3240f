//! DTO modules that bridge services with templates.

pub mod listing;

pub use listing::{ListPageData, ListQuery};
