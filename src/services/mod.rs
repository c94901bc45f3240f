//! Use cases shared by every presentation layer.
//!
//! Service functions are generic over the repository traits they need, so
//! they run unchanged against [`DieselRepository`](crate::repository) or the
//! mocks in tests.

use thiserror::Error;

use crate::dto::{ListPageData, ListQuery};
use crate::forms::{FieldErrors, FormError};
use crate::listing::{Listing, Searchable};
use crate::repository::RepositoryError;

pub mod posts;
pub mod products;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("form validation failed: {0}")]
    Form(FieldErrors),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::InvalidRecord(msg) => ServiceError::TypeConstraint(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => ServiceError::Form(errors),
            FormError::TypeConstraint(err) => ServiceError::from(err),
            FormError::Schema(err) => ServiceError::Internal(err.to_string()),
        }
    }
}

/// Filters and paginates `records` for the list view described by `query`.
fn list_page<R>(listing: &Listing<R>, records: &[R], query: &ListQuery) -> ListPageData<R>
where
    R: Searchable + Clone,
{
    let search = query.search();
    let page = listing.run(records, &search, query.page_request()).cloned();
    ListPageData::new(page, &search)
}
