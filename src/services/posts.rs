use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::types::PostId;
use crate::dto::{ListPageData, ListQuery};
use crate::forms::FormInput;
use crate::forms::post::PostForm;
use crate::listing::Listing;
use crate::repository::{PostReader, PostWriter};
use crate::services::{ServiceError, ServiceResult, list_page};

/// Loads one page of blog posts matching the search term in `query`.
pub fn list_posts<R>(
    repo: &R,
    listing: &Listing<Post>,
    query: &ListQuery,
) -> ServiceResult<ListPageData<Post>>
where
    R: PostReader + ?Sized,
{
    let posts = repo.list_posts().map_err(|err| {
        log::error!("Failed to list posts: {err}");
        err
    })?;

    Ok(list_page(listing, &posts, query))
}

pub fn get_post<R>(repo: &R, post_id: PostId) -> ServiceResult<Post>
where
    R: PostReader + ?Sized,
{
    repo.get_post_by_id(post_id)
        .map_err(|err| {
            log::error!("Failed to load post {post_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn create_post<R>(repo: &R, input: &FormInput) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    let form = PostForm::parse(input).map_err(|err| {
        log::error!("Failed to validate post form: {err}");
        err
    })?;

    let post = repo.create_post(&NewPost::from(form)).map_err(|err| {
        log::error!("Failed to create post: {err}");
        err
    })?;

    Ok(post)
}

pub fn update_post<R>(repo: &R, post_id: PostId, input: &FormInput) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    let form = PostForm::parse(input).map_err(|err| {
        log::error!("Failed to validate post form: {err}");
        err
    })?;

    let post = repo
        .update_post(post_id, &UpdatePost::from(form))
        .map_err(|err| {
            log::error!("Failed to update post {post_id}: {err}");
            err
        })?;

    Ok(post)
}

pub fn delete_post<R>(repo: &R, post_id: PostId) -> ServiceResult<()>
where
    R: PostWriter + ?Sized,
{
    repo.delete_post(post_id).map_err(|err| {
        log::error!("Failed to delete post {post_id}: {err}");
        err
    })?;

    Ok(())
}
