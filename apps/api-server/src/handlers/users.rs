//! User registration and listing.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, NewUser, User};
use bloglist_core::error::{DomainError, RepoError};
use bloglist_core::ports::{BaseRepository, UserRepository};
use bloglist_shared::dto::RegisterUserRequest;

use super::user_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewUser {
        username: req.username,
        name: req.name,
        password: req.password,
    }
    .validate()?;

    if state.users.find_by_username(&input.username).await?.is_some() {
        return Err(DomainError::Duplicate("username").into());
    }

    // Hashing is CPU-bound; keep it off the worker thread.
    let passwords = state.passwords.clone();
    let password = input.password;
    let password_hash = web::block(move || passwords.hash(&password)).await??;

    let user = User::new(input.username, input.name, password_hash);
    let saved = match state.users.save(user).await {
        Ok(saved) => saved,
        Err(RepoError::Constraint(_)) => return Err(DomainError::Duplicate("username").into()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %saved.id, username = %saved.username, "User registered");

    Ok(HttpResponse::Created().json(user_response(saved, Vec::new())))
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut owned: HashMap<Uuid, Vec<Blog>> = HashMap::new();
    for blog in state.blogs.find_all().await? {
        owned.entry(blog.user_id).or_default().push(blog);
    }

    let body: Vec<_> = users
        .into_iter()
        .map(|user| {
            let blogs = owned.remove(&user.id).unwrap_or_default();
            user_response(user, blogs)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
