//! Record listing core for a small CRUD application.
//!
//! Users, blog posts and products are loaded from a record store, filtered by
//! a free-text search term, cut into pages and described for a template. The
//! [`listing`] module holds the pipeline; [`services`] wires it to the
//! repository traits and the validated forms.

#[cfg(feature = "db")]
pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod listing;
pub mod models;
pub mod repository;
#[cfg(feature = "db")]
pub mod schema;
pub mod services;

pub const DEFAULT_USERS_PER_PAGE: usize = 10;
pub const DEFAULT_POSTS_PER_PAGE: usize = 5;
pub const DEFAULT_PRODUCTS_PER_PAGE: usize = 10;
