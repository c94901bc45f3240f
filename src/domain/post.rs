use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PostContent, PostId, PostTitle};
use crate::listing::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Searchable for Post {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "content"];

    fn search_field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "content" => Some(self.content.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePost {
    pub title: PostTitle,
    pub content: PostContent,
}
