//! Form backing user creation and editing.

use crate::domain::types::{UserEmail, UserName};
use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::FormError;
use crate::forms::schema::{FieldKind, FieldMessages, FieldSpec, FormInput, FormSchema};

static USER_FIELDS: [FieldSpec; 3] = [
    FieldSpec::text("name", 50).messages(FieldMessages {
        required: "Enter a name.",
        max_length: "Name must be at most 50 characters.",
        invalid: "Enter a valid name.",
    }),
    FieldSpec::new("email", FieldKind::Email)
        .max_length(254)
        .messages(FieldMessages {
            required: "Enter an email address.",
            max_length: "Email must be at most 254 characters.",
            invalid: "Enter a valid email address.",
        }),
    FieldSpec::text("image", 100).optional(),
];

/// Validated user submission.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: UserName,
    pub email: UserEmail,
    /// Path of an already stored image under `images/`.
    pub image: Option<String>,
}

impl UserForm {
    pub fn schema() -> Result<FormSchema, FormError> {
        Ok(FormSchema::new(&USER_FIELDS)?)
    }

    pub fn parse(input: &FormInput) -> Result<Self, FormError> {
        let cleaned = Self::schema()?.validate(input)?;

        Ok(Self {
            name: UserName::new(cleaned.text("name").unwrap_or_default())?,
            email: UserEmail::new(cleaned.text("email").unwrap_or_default())?,
            image: cleaned.text("image").map(str::to_string),
        })
    }
}

impl From<UserForm> for NewUser {
    fn from(form: UserForm) -> Self {
        NewUser::new(form.name, form.email, form.image)
    }
}

impl From<UserForm> for UpdateUser {
    fn from(form: UserForm) -> Self {
        UpdateUser::new(form.name, form.email, form.image)
    }
}
