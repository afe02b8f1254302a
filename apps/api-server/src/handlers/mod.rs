//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod testing;
mod users;


use actix_web::{HttpResponse, web};
use bloglist_core::domain::{Blog, User};
use bloglist_shared::ErrorResponse;
use bloglist_shared::dto::{BlogOwner, BlogResponse, UserBlog, UserResponse};
use uuid::Uuid;

use crate::middleware::auth::UserExtractor;
use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/login", web::post().to(login::login))
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create)),
            )
            // Blog routes - mutations need a token
            .service(
                web::scope("/blogs")
                    .wrap(UserExtractor)
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/stats", web::get().to(blogs::stats))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            ),
    );
}

/// Routes only mounted when running the end-to-end test suite.
///
/// Must be registered before [`configure_routes`] so `/api/testing` is matched
/// ahead of the `/api` scope.
pub fn configure_testing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/testing").route("/reset", web::post().to(testing::reset)));
}

/// Fallback for unmatched routes.
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::unknown_endpoint())
}

/// JSON body extractor config mapping parse failures to a 400 error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Parse a path id, rejecting anything that is not a UUID.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(ErrorResponse::invalid_data().error))
}

fn blog_owner(user: &User) -> BlogOwner {
    BlogOwner {
        id: user.id,
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

fn blog_response(blog: Blog, user: Option<BlogOwner>) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user,
    }
}

fn user_response(user: User, blogs: Vec<Blog>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        blogs: blogs
            .into_iter()
            .map(|blog| UserBlog {
                id: blog.id,
                title: blog.title,
                author: blog.author,
                url: blog.url,
                likes: blog.likes,
            })
            .collect(),
    }
}
