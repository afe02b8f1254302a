//! Authentication middleware and extractors.
//!
//! [`UserExtractor`] wraps the blog routes. Read-only requests pass straight
//! through. Mutating requests must carry a valid bearer token whose subject
//! is an existing user; that user is stored in the request extensions where
//! [`CurrentUser`] picks it up.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::{Method, header},
    web,
};
use futures::future::LocalBoxFuture;

use bloglist_core::domain::User;
use bloglist_core::ports::{AuthError, BaseRepository};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
///
/// Anything else, including a missing header, means "no token".
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    header?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// User resolved from the request's token, stored in request extensions.
#[derive(Debug, Clone)]
struct RequestUser(Option<User>);

/// Middleware factory resolving the bearer token to a user.
pub struct UserExtractor;

impl<S, B> Transform<S, ServiceRequest> for UserExtractor
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = UserExtractorService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(UserExtractorService {
            service: Rc::new(service),
        }))
    }
}

pub struct UserExtractorService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for UserExtractorService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match resolve_user(&req).await {
                Ok(user) => {
                    req.extensions_mut().insert(RequestUser(user));
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    tracing::debug!(method = %req.method(), path = %req.path(), "Rejected: {}", e);
                    let response = e.error_response();
                    let (http_req, _payload) = req.into_parts();
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}

async fn resolve_user(req: &ServiceRequest) -> Result<Option<User>, AppError> {
    if !is_mutating(req.method()) {
        return Ok(None);
    }

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal("AppState not found in app data".to_string()))?;

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = extract_bearer(header).ok_or(AuthError::MissingAuth)?;

    let claims = state.tokens.validate_token(token)?;
    let user = state
        .users
        .find_by_id(claims.user_id)
        .await?
        .ok_or(AuthError::UnknownUser)?;

    tracing::debug!(user_id = %user.id, username = %user.username, "Request authenticated");
    Ok(Some(user))
}

/// The authenticated user. Rejects the request with 401 when there is none.
///
/// ```ignore
/// async fn create(user: CurrentUser) -> impl Responder {
///     format!("Hello, {}!", user.0.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<RequestUser>()
            .and_then(|r| r.0.clone());

        ready(user.map(CurrentUser).ok_or_else(|| AuthError::MissingAuth.into()))
    }
}
