use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a link to an article, owned by the user who posted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when posting a blog.
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Partial update of a blog. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

fn required(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::Validation(format!("`{field}` is required"))),
    }
}

fn non_empty(field: &'static str, value: &Option<String>) -> Result<(), DomainError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(DomainError::Validation(format!(
            "`{field}` must not be empty"
        ))),
        _ => Ok(()),
    }
}

fn non_negative(likes: Option<i64>) -> Result<(), DomainError> {
    match likes {
        Some(n) if n < 0 => Err(DomainError::Validation(
            "`likes` must not be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

impl Blog {
    /// Validate the submitted fields and create a blog owned by `user_id`.
    pub fn new(user_id: Uuid, input: NewBlog) -> Result<Self, DomainError> {
        let title = required("title", input.title)?;
        let author = required("author", input.author)?;
        let url = required("url", input.url)?;
        non_negative(input.likes)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            author,
            url,
            likes: input.likes.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Apply the provided fields and bump `updated_at`.
    pub fn apply(&mut self, changes: BlogChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(url) = changes.url {
            self.url = url;
        }
        if let Some(likes) = changes.likes {
            self.likes = likes;
        }
        self.updated_at = Utc::now();
    }
}

impl BlogChanges {
    /// True when the update touches nothing but `likes`.
    pub fn is_likes_only(&self) -> bool {
        self.likes.is_some() && self.title.is_none() && self.author.is_none() && self.url.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_none() && self.title.is_none() && self.author.is_none() && self.url.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation("no fields to update".to_string()));
        }
        non_empty("title", &self.title)?;
        non_empty("author", &self.author)?;
        non_empty("url", &self.url)?;
        non_negative(self.likes)
    }
}
