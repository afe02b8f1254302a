//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields that clients may omit are `Option`s so that a missing field
//! surfaces as a validation message instead of a JSON parse failure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// POST /api/blogs body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

/// PUT /api/blogs/{id} body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

/// POST /api/users body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login body. Missing fields are rejected as bad credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until `token` expires.
    pub expires_in: i64,
    pub username: String,
    pub name: String,
}

/// Owner embedded in a blog response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogOwner {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

/// A blog as returned to clients, with its owner populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<BlogOwner>,
}

/// An author and how many blogs they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub author: String,
    pub blogs: usize,
}

/// GET /api/blogs/stats body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogStatsResponse {
    pub total_likes: i64,
    pub favorite_blog: Option<BlogResponse>,
    pub most_blogs: Option<AuthorStats>,
}

/// Blog summary embedded in a user response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBlog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// A user's public information with the blogs they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<UserBlog>,
}
