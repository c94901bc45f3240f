//! Database models backing the Diesel repository, plus application config.

pub mod config;
#[cfg(feature = "db")]
pub mod post;
#[cfg(feature = "db")]
pub mod product;
#[cfg(feature = "db")]
pub mod user;
#[cfg(feature = "db")]
pub mod user_profile;
