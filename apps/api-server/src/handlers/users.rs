//! User handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, Registration, User};
use bloglist_core::ports::BaseRepository;
use bloglist_core::{DomainError, RepoError};
use bloglist_shared::dto::{BlogSummary, RegisterUserRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn user_response(user: User, blogs: &HashMap<Uuid, Blog>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        // Ids whose blog was deleted are skipped.
        blogs: user
            .blogs
            .iter()
            .filter_map(|id| blogs.get(id))
            .map(|blog| BlogSummary {
                id: blog.id,
                title: blog.title.clone(),
                author: blog.author.clone(),
                url: blog.url.clone(),
            })
            .collect(),
    }
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs: HashMap<Uuid, Blog> = state
        .blogs
        .find_all()
        .await?
        .into_iter()
        .map(|blog| (blog.id, blog))
        .collect();

    let body: Vec<UserResponse> = state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|user| user_response(user, &blogs))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let registration = Registration::parse(req.username, req.name, req.password)?;

    let password_hash = state.passwords.hash(&registration.password)?;
    let user = User::new(registration.username, registration.name, password_hash);

    let saved = state.users.insert(user).await.map_err(|e| match e {
        RepoError::Constraint(_) => {
            DomainError::Conflict("expected `username` to be unique".to_string())
        }
        other => DomainError::Repo(other),
    })?;

    tracing::info!(user_id = %saved.id, username = %saved.username, "User registered");

    Ok(HttpResponse::Created().json(user_response(saved, &HashMap::new())))
}
