//! Form definitions for creating and editing records.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

pub mod post;
pub mod product;
pub mod schema;
pub mod user;
pub mod user_profile;

pub use schema::{FieldErrors, FormInput, FormSchema};

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] FieldErrors),

    #[error("invalid form declaration: {0}")]
    Schema(#[from] schema::SchemaError),

    #[error("invalid value: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
}
