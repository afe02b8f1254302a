//! Test-only endpoints.

use actix_web::{HttpResponse, web};

use bloglist_core::ports::BaseRepository;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/testing/reset - wipe all blogs and users
pub async fn reset(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.delete_all().await?;
    let users = state.users.delete_all().await?;

    tracing::warn!(blogs, users, "Test database reset");

    Ok(HttpResponse::NoContent().finish())
}
