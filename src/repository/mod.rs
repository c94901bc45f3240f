//! Record store interfaces.
//!
//! Services depend on these reader/writer traits only. Readers hand back the
//! whole collection of a record kind in creation order so the listing
//! pipeline can filter and paginate it; writers report a missing record as
//! [`RepositoryError::NotFound`].

#[cfg(feature = "db")]
use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{PostId, ProductId, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::domain::user_profile::UserProfile;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "db")]
pub mod post;
#[cfg(feature = "db")]
pub mod product;
#[cfg(feature = "db")]
pub mod user;
#[cfg(feature = "db")]
pub mod user_profile;

pub use errors::{RepositoryError, RepositoryResult, ensure_found};

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
    /// Deletes the user together with its profile.
    fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
}

pub trait UserProfileReader {
    fn get_user_profile(&self, user_id: UserId) -> RepositoryResult<Option<UserProfile>>;
}

pub trait UserProfileWriter {
    /// Creates the profile or replaces the existing one.
    fn save_user_profile(&self, profile: &UserProfile) -> RepositoryResult<UserProfile>;
}

pub trait PostReader {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
}

pub trait PostWriter {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
    fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post>;
    fn delete_post(&self, id: PostId) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: ProductId, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

/// Diesel/SQLite implementation of every repository trait.
#[cfg(feature = "db")]
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

#[cfg(feature = "db")]
impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
