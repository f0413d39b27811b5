//! User entity for SeaORM.

use bloglist_core::error::RepoError;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub name: String,
    pub password_hash: String,
    /// Owned blog ids as a JSON array, in creation order.
    #[sea_orm(column_type = "JsonBinary")]
    pub blogs: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
///
/// A `blogs` column that is not an array of ids is reported, never read as an
/// empty list: the next append would otherwise overwrite the stored ids.
impl TryFrom<Model> for bloglist_core::domain::User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let blogs = serde_json::from_value(model.blogs).map_err(|e| {
            tracing::error!(user_id = %model.id, error = %e, "Unreadable users.blogs column");
            RepoError::Query(format!("users.blogs for {}: {e}", model.id))
        })?;

        Ok(Self {
            id: model.id,
            username: model.username,
            name: model.name,
            password_hash: model.password_hash,
            blogs,
        })
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<bloglist_core::domain::User> for ActiveModel {
    fn from(user: bloglist_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            username: Set(user.username),
            name: Set(user.name),
            password_hash: Set(user.password_hash),
            blogs: Set(Json::Array(
                user.blogs
                    .iter()
                    .map(|id| Json::String(id.to_string()))
                    .collect(),
            )),
        }
    }
}
