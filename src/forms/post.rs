use crate::domain::post::{NewPost, UpdatePost};
use crate::domain::types::{PostContent, PostTitle};
use crate::forms::FormError;
use crate::forms::schema::{FieldKind, FieldMessages, FieldSpec, FormInput, FormSchema};

static POST_FIELDS: [FieldSpec; 2] = [
    FieldSpec::text("title", 200).messages(FieldMessages {
        required: "Enter a title.",
        max_length: "Title must be at most 200 characters.",
        invalid: "Enter a valid title.",
    }),
    FieldSpec::new("content", FieldKind::Html).messages(FieldMessages {
        required: "Write some content.",
        max_length: "Content is too long.",
        invalid: "Enter valid content.",
    }),
];

/// Validated blog post submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PostForm {
    pub title: PostTitle,
    pub content: PostContent,
}

impl PostForm {
    pub fn schema() -> Result<FormSchema, FormError> {
        Ok(FormSchema::new(&POST_FIELDS)?)
    }

    pub fn parse(input: &FormInput) -> Result<Self, FormError> {
        let cleaned = Self::schema()?.validate(input)?;

        Ok(Self {
            title: PostTitle::new(cleaned.text("title").unwrap_or_default())?,
            content: PostContent::new(cleaned.text("content").unwrap_or_default())?,
        })
    }
}

impl From<PostForm> for NewPost {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
        }
    }
}

impl From<PostForm> for UpdatePost {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
        }
    }
}
