//! Login handler.

use actix_web::{HttpResponse, web};

use bloglist_core::ports::{AuthError, UserRepository};
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let LoginRequest {
        username: Some(username),
        password: Some(password),
    } = body.into_inner()
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let passwords = state.passwords.clone();
    let hash = user.password_hash.clone();
    let valid = web::block(move || passwords.verify(&password, &hash)).await??;

    if !valid {
        tracing::debug!(username = %user.username, "Login rejected");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        expires_in: state.tokens.expiration_seconds(),
        username: user.username,
        name: user.name,
    }))
}
