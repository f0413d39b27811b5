//! Blog handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, BlogDraft, User};
use bloglist_core::ports::{BaseRepository, UserRepository};
use bloglist_core::{BlogAction, DomainError, OwnershipError, authorize};
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest, OwnerSummary, UpdateLikesRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::identity::{LenientIdentity, StrictIdentity};
use crate::state::AppState;

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::malformatted_id())
}

fn owner_summary(user: &User) -> OwnerSummary {
    OwnerSummary {
        id: user.id,
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

fn blog_response(blog: Blog, owner: Option<&User>) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: owner.map(owner_summary),
    }
}

/// Populate the owner of a single blog.
async fn with_owner(state: &AppState, blog: Blog) -> AppResult<BlogResponse> {
    let owner = state.users.find_by_id(blog.user_id).await?;
    if owner.is_none() {
        tracing::debug!(blog_id = %blog.id, user_id = %blog.user_id, "Blog owner no longer exists");
    }
    Ok(blog_response(blog, owner.as_ref()))
}

async fn find_blog(state: &AppState, id: Uuid) -> AppResult<Blog> {
    state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::blog_not_found().into())
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>, _caller: LenientIdentity) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let users: HashMap<Uuid, User> = state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let body: Vec<BlogResponse> = blogs
        .into_iter()
        .map(|blog| {
            let owner = users.get(&blog.user_id);
            blog_response(blog, owner)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    caller: StrictIdentity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if let Some(claimed) = &req.user_id {
        tracing::debug!(claimed = %claimed, "Ignoring client-supplied userId");
    }

    let draft = BlogDraft::parse(req.title, req.author, req.url, req.likes)?;

    let StrictIdentity(caller) = caller;
    authorize(BlogAction::Create, caller.as_ref().map(|u| u.id)).into_result()?;
    let owner = caller.ok_or(OwnershipError::Unauthenticated)?;

    let saved = state.blogs.insert(Blog::new(draft, owner.id)).await?;
    let owner = state.users.append_blog(owner.id, saved.id).await?;

    tracing::info!(blog_id = %saved.id, user_id = %owner.id, "Blog created");

    Ok(HttpResponse::Created().json(blog_response(saved, Some(&owner))))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    caller: StrictIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let blog = find_blog(&state, id).await?;

    let StrictIdentity(caller) = caller;
    let actor = caller.map(|u| u.id);
    authorize(BlogAction::Delete { owner: blog.user_id }, actor).into_result()?;

    state.blogs.delete(blog.id).await?;

    tracing::info!(blog_id = %blog.id, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/blogs/{id}
pub async fn update_likes(
    state: web::Data<AppState>,
    caller: LenientIdentity,
    path: web::Path<String>,
    body: web::Json<UpdateLikesRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let mut blog = find_blog(&state, id).await?;

    let LenientIdentity(caller) = caller;
    authorize(BlogAction::UpdateLikes, caller.map(|u| u.id)).into_result()?;

    let blog = match body.into_inner().likes {
        Some(likes) => {
            blog.likes = likes;
            let updated = state.blogs.update(blog).await?;
            tracing::debug!(blog_id = %updated.id, likes, "Blog likes updated");
            updated
        }
        None => blog,
    };

    Ok(HttpResponse::Ok().json(with_owner(&state, blog).await?))
}
