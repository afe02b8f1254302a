//! Blog handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, BlogChanges, NewBlog};
use bloglist_core::error::DomainError;
use bloglist_core::ports::BaseRepository;
use bloglist_core::{list_helper, policy};
use bloglist_shared::dto::{
    AuthorStats, BlogOwner, BlogStatsResponse, CreateBlogRequest, UpdateBlogRequest,
};

use super::{blog_owner, blog_response, parse_id};
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn find_blog(state: &AppState, id: Uuid) -> AppResult<Blog> {
    state.blogs.find_by_id(id).await?.ok_or_else(|| {
        DomainError::NotFound {
            entity_type: "blog",
            id,
        }
        .into()
    })
}

async fn load_owner(state: &AppState, blog: &Blog) -> AppResult<Option<BlogOwner>> {
    Ok(state
        .users
        .find_by_id(blog.user_id)
        .await?
        .as_ref()
        .map(blog_owner))
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let owners: HashMap<Uuid, BlogOwner> = state
        .users
        .find_all()
        .await?
        .iter()
        .map(|user| (user.id, blog_owner(user)))
        .collect();

    let body: Vec<_> = blogs
        .into_iter()
        .map(|blog| {
            let owner = owners.get(&blog.user_id).cloned();
            blog_response(blog, owner)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/stats
pub async fn stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    let favorite_blog = match list_helper::favorite_blog(&blogs) {
        Some(blog) => {
            let owner = load_owner(&state, blog).await?;
            Some(blog_response(blog.clone(), owner))
        }
        None => None,
    };
    let most_blogs = list_helper::most_blogs(&blogs).map(|top| AuthorStats {
        author: top.author.to_string(),
        blogs: top.blogs,
    });

    Ok(HttpResponse::Ok().json(BlogStatsResponse {
        total_likes: list_helper::total_likes(&blogs),
        favorite_blog,
        most_blogs,
    }))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let blog = find_blog(&state, id).await?;
    let owner = load_owner(&state, &blog).await?;

    Ok(HttpResponse::Ok().json(blog_response(blog, owner)))
}

/// POST /api/blogs - Protected route
pub async fn create(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let blog = Blog::new(
        user.id,
        NewBlog {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        },
    )?;
    let saved = state.blogs.save(blog).await?;

    tracing::info!(blog_id = %saved.id, user_id = %user.id, "Blog created");

    Ok(HttpResponse::Created().json(blog_response(saved, Some(blog_owner(&user)))))
}

/// PUT /api/blogs/{id} - Protected route; only likes may be changed by non-owners
pub async fn update(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let changes = BlogChanges {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    };

    let mut blog = find_blog(&state, id).await?;
    changes.validate()?;
    policy::authorize_update(&blog, user.id, &changes)?;

    blog.apply(changes);
    let saved = state.blogs.save(blog).await?;
    let owner = load_owner(&state, &saved).await?;

    tracing::info!(blog_id = %saved.id, user_id = %user.id, "Blog updated");

    Ok(HttpResponse::Ok().json(blog_response(saved, owner)))
}

/// DELETE /api/blogs/{id} - Protected route; owner only
pub async fn delete(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let blog = find_blog(&state, id).await?;
    policy::authorize_delete(&blog, user.id)?;

    state.blogs.delete(id).await?;

    tracing::info!(blog_id = %id, user_id = %user.id, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}
