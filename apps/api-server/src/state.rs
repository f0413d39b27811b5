//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService, PasswordConfig,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the state for the configured store.
    ///
    /// With the `postgres` feature and a `DATABASE_URL`, connects, applies pending
    /// migrations and uses the PostgreSQL repositories. Otherwise runs in memory.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            use bloglist_infra::database::connect;
            use bloglist_infra::{PostgresBlogRepository, PostgresUserRepository};
            use migration::{Migrator, MigratorTrait};

            let conn = connect(db_config).await?;
            Migrator::up(&conn, None).await?;
            tracing::info!("Application state initialized (postgres)");

            return Self::with_repositories(
                &config.jwt,
                config.password,
                Arc::new(PostgresUserRepository::new(conn.clone())),
                Arc::new(PostgresBlogRepository::new(conn)),
            );
        }

        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }
        Self::in_memory(&config.jwt, config.password)
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory(jwt: &JwtConfig, password: PasswordConfig) -> anyhow::Result<Self> {
        Self::with_repositories(
            jwt,
            password,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBlogRepository::new()),
        )
    }

    fn with_repositories(
        jwt: &JwtConfig,
        password: PasswordConfig,
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            users,
            blogs,
            tokens: Arc::new(JwtTokenService::new(jwt.clone())),
            passwords: Arc::new(Argon2PasswordService::new(password)?),
        })
    }
}
