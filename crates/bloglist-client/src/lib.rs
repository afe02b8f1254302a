//! Typed HTTP client for the Bloglist API.
//!
//! The bearer token is held by the client value itself. Logging in returns
//! the token; [`BlogClient::with_token`] derives an authenticated client.
//!
//! ```ignore
//! let client = BlogClient::new("http://localhost:3003");
//! let login = client.login("root", "sekret").await?;
//! let client = client.with_token(login.token);
//! let blogs = client.list_blogs().await?;
//! ```

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use bloglist_shared::ErrorResponse;
use bloglist_shared::dto::{
    BlogResponse, BlogStatsResponse, CreateBlogRequest, LoginRequest, LoginResponse, RegisterUserRequest,
    UpdateBlogRequest, UserResponse,
};

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {error}")]
    Api { status: StatusCode, error: String },
}

impl ClientError {
    /// Status code of a rejected request, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}/api{}", self.base_url, path));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let body = LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };
        let resp = self.request(Method::POST, "/login").json(&body).send().await?;
        decode(resp).await
    }

    pub async fn register(&self, user: &RegisterUserRequest) -> ClientResult<UserResponse> {
        let resp = self.request(Method::POST, "/users").json(user).send().await?;
        decode(resp).await
    }

    pub async fn list_blogs(&self) -> ClientResult<Vec<BlogResponse>> {
        let resp = self.request(Method::GET, "/blogs").send().await?;
        decode(resp).await
    }

    pub async fn blog_stats(&self) -> ClientResult<BlogStatsResponse> {
        let resp = self.request(Method::GET, "/blogs/stats").send().await?;
        decode(resp).await
    }

    pub async fn get_blog(&self, id: Uuid) -> ClientResult<BlogResponse> {
        let resp = self
            .request(Method::GET, &format!("/blogs/{id}"))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_blog(&self, blog: &CreateBlogRequest) -> ClientResult<BlogResponse> {
        let resp = self.request(Method::POST, "/blogs").json(blog).send().await?;
        decode(resp).await
    }

    pub async fn update_blog(
        &self,
        id: Uuid,
        changes: &UpdateBlogRequest,
    ) -> ClientResult<BlogResponse> {
        let resp = self
            .request(Method::PUT, &format!("/blogs/{id}"))
            .json(changes)
            .send()
            .await?;
        decode(resp).await
    }

    /// Increment a blog's likes by one. Any logged-in user may do this.
    pub async fn like_blog(&self, blog: &BlogResponse) -> ClientResult<BlogResponse> {
        self.update_blog(blog.id, &like_changes(blog)).await
    }

    pub async fn delete_blog(&self, id: Uuid) -> ClientResult<()> {
        let resp = self
            .request(Method::DELETE, &format!("/blogs/{id}"))
            .send()
            .await?;
        check(resp).await.map(|_| ())
    }
}

fn like_changes(blog: &BlogResponse) -> UpdateBlogRequest {
    UpdateBlogRequest {
        likes: Some(blog.likes.saturating_add(1)),
        ..Default::default()
    }
}

async fn check(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    Ok(check(resp).await?.json().await?)
}

fn api_error(status: StatusCode, body: &str) -> ClientError {
    let error = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string());

    ClientError::Api { status, error }
}
