use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{UserEmail, UserId, UserName};
use crate::listing::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: UserEmail,
    /// Path of the uploaded avatar relative to the media root.
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Searchable for User {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "image"];

    fn search_field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "email" => Some(self.email.as_str()),
            "image" => self.image.as_deref(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub name: UserName,
    pub email: UserEmail,
    pub image: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn new(name: UserName, email: UserEmail, image: Option<String>) -> Self {
        Self {
            name,
            email,
            image: image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUser {
    pub name: UserName,
    pub email: UserEmail,
    pub image: Option<String>,
}

impl UpdateUser {
    #[must_use]
    pub fn new(name: UserName, email: UserEmail, image: Option<String>) -> Self {
        Self {
            name,
            email,
            image: image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
