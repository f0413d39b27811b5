//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use bloglist_core::domain::User;
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

use super::entity::blog::Entity as BlogEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(User::try_from).transpose()
    }

    /// Appends in SQL (`blogs || [id]`) so concurrent creates by one owner do not
    /// overwrite each other's ids.
    async fn append_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<User, RepoError> {
        let result = UserEntity::update_many()
            .col_expr(
                user::Column::Blogs,
                Expr::cust_with_values("blogs || jsonb_build_array(?::text)", [blog_id.to_string()]),
            )
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        BaseRepository::<User, Uuid>::find_by_id(self, user_id)
            .await?
            .ok_or(RepoError::NotFound)
    }
}

impl BlogRepository for PostgresBlogRepository {}
