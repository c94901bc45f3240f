//! Domain records listed and edited by the application.

pub mod post;
pub mod product;
pub mod types;
pub mod user;
pub mod user_profile;
