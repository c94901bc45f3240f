use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::post::{
    NewPost as DomainNewPost, Post as DomainPost, UpdatePost as DomainUpdatePost,
};
use crate::domain::types::{PostContent, PostId, PostTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
pub struct UpdatePost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Post> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(post.id)?,
            title: PostTitle::new(post.title)?,
            content: PostContent::new(post.content)?,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPost> for NewPost<'a> {
    fn from(post: &'a DomainNewPost) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            title: post.title.as_str(),
            content: post.content.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> From<&'a DomainUpdatePost> for UpdatePost<'a> {
    fn from(post: &'a DomainUpdatePost) -> Self {
        Self {
            title: post.title.as_str(),
            content: post.content.as_str(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
