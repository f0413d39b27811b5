//! Login handler.

use actix_web::{HttpResponse, web};

use bloglist_core::ports::{AuthError, UserRepository};
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/login
///
/// Unknown usernames and wrong passwords fail the same way.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let Some(user) = state.users.find_by_username(&req.username).await? else {
        tracing::debug!(username = %req.username, "Login for unknown user");
        return Err(AuthError::InvalidCredentials.into());
    };

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login with wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!(
        user_id = %user.id,
        expires_in = state.tokens.expiration_seconds(),
        "User logged in"
    );

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
