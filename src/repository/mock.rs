//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{PostId, ProductId, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::domain::user_profile::UserProfile;
use crate::repository::{
    PostReader, PostWriter, ProductReader, ProductWriter, RepositoryResult, UserProfileReader,
    UserProfileWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
    }

    impl UserProfileReader for Repository {
        fn get_user_profile(&self, user_id: UserId) -> RepositoryResult<Option<UserProfile>>;
    }

    impl UserProfileWriter for Repository {
        fn save_user_profile(&self, profile: &UserProfile) -> RepositoryResult<UserProfile>;
    }

    impl PostReader for Repository {
        fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
        fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
    }

    impl PostWriter for Repository {
        fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
        fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post>;
        fn delete_post(&self, id: PostId) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }
}
