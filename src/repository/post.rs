use diesel::prelude::*;

use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::types::PostId;
use crate::models::post::{NewPost as DbNewPost, Post as DbPost, UpdatePost as DbUpdatePost};
use crate::repository::{
    DieselRepository, PostReader, PostWriter, RepositoryError, RepositoryResult, ensure_found,
};

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let post = posts::table
            .find(id.get())
            .select(DbPost::as_select())
            .first(&mut conn)
            .optional()?;

        post.map(Post::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let posts = posts::table
            .order(posts::id.asc())
            .select(DbPost::as_select())
            .load(&mut conn)?;

        posts
            .into_iter()
            .map(|post| Post::try_from(post).map_err(RepositoryError::from))
            .collect()
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let post = diesel::insert_into(posts::table)
            .values(&DbNewPost::from(new_post))
            .returning(DbPost::as_returning())
            .get_result(&mut conn)?;

        Ok(Post::try_from(post)?)
    }

    fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let post = diesel::update(posts::table.find(id.get()))
            .set(&DbUpdatePost::from(updates))
            .returning(DbPost::as_returning())
            .get_result(&mut conn)?;

        Ok(Post::try_from(post)?)
    }

    fn delete_post(&self, id: PostId) -> RepositoryResult<()> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        ensure_found(diesel::delete(posts::table.find(id.get())).execute(&mut conn)?)
    }
}
