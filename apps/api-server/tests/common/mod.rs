//! Shared fixtures for the HTTP tests.

#![allow(dead_code)]

use bloglist_api::state::AppState;
use bloglist_core::domain::{Blog, BlogDraft, User};
use bloglist_core::ports::{BaseRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::{JwtConfig, JwtTokenService, PasswordConfig};

/// Build an initialized test service around `$state`, wired like `main.rs`.
macro_rules! spawn_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(bloglist_api::handlers::configure_routes)
                .default_service(actix_web::web::to(bloglist_api::handlers::unknown_endpoint)),
        )
        .await
    };
}

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "bloglist-test".to_string(),
    }
}

/// In-memory state with a cheap Argon2 cost so seeding stays fast.
pub fn test_state() -> AppState {
    AppState::in_memory(
        &test_jwt(),
        PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
        },
    )
    .unwrap()
}

/// A correctly signed token for `user` that expired two hours ago.
pub fn expired_token(user: &User) -> String {
    JwtTokenService::new(JwtConfig {
        expiration_hours: -2,
        ..test_jwt()
    })
    .issue(user.id)
    .unwrap()
}

/// Store a user with the given credentials and return it with a fresh token.
pub async fn seed_user(state: &AppState, username: &str, password: &str) -> (User, String) {
    let hash = state.passwords.hash(password).unwrap();
    let user = state
        .users
        .insert(User::new(username.to_string(), format!("{username} name"), hash))
        .await
        .unwrap();
    let token = state.tokens.issue(user.id).unwrap();
    (user, token)
}

/// Store a blog owned by `owner`, keeping the owner's blog list in sync.
pub async fn seed_blog(state: &AppState, owner: &User, title: &str, likes: i64) -> Blog {
    let draft = BlogDraft::parse(
        Some(title.to_string()),
        Some("Edsger W. Dijkstra".to_string()),
        Some(format!("https://blogs.example/{}", title.replace(' ', "-"))),
        Some(likes),
    )
    .unwrap();
    let blog = state.blogs.insert(Blog::new(draft, owner.id)).await.unwrap();

    state.users.append_blog(owner.id, blog.id).await.unwrap();

    blog
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
