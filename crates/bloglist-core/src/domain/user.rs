use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 3;

/// User entity - represents a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Ids of the blogs this user created, in creation order.
    pub blogs: Vec<Uuid>,
}

impl User {
    /// Create a new user with a generated ID and no blogs.
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }

    /// Record a newly created blog as owned by this user.
    pub fn add_blog(&mut self, blog_id: Uuid) {
        self.blogs.push(blog_id);
    }
}

/// Validated registration input. The password is still in clear text here and
/// must be hashed before a [`User`] is built.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl Registration {
    pub fn parse(
        username: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, DomainError> {
        let password = password
            .filter(|p| p.chars().count() >= MIN_PASSWORD_LEN)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters long"
                ))
            })?;

        // Stored exactly as sent; only an empty username is refused.
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::Validation("username missing".to_string()))?;

        Ok(Self {
            username,
            name: name.unwrap_or_default(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_of_two_chars_is_rejected() {
        let err = Registration::parse(Some("root".into()), None, Some("sa".into())).unwrap_err();
        assert_eq!(err.to_string(), "password must be at least 3 characters long");
    }

    #[test]
    fn test_password_of_three_chars_is_accepted() {
        let reg = Registration::parse(Some("root".into()), Some("Superuser".into()), Some("sal".into()))
            .unwrap();
        assert_eq!(reg.username, "root");
        assert_eq!(reg.name, "Superuser");
    }

    #[test]
    fn test_missing_password_is_rejected() {
        assert!(Registration::parse(Some("root".into()), None, None).is_err());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let err = Registration::parse(Some(String::new()), None, Some("secret".into())).unwrap_err();
        assert_eq!(err.to_string(), "username missing");
        assert!(Registration::parse(None, None, Some("secret".into())).is_err());
    }

    #[test]
    fn test_username_is_kept_verbatim() {
        let reg = Registration::parse(Some(" root".into()), None, Some("secret".into())).unwrap();
        assert_eq!(reg.username, " root");
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User::new("mluukkai".into(), "Matti".into(), "$argon2id$hash".into());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "mluukkai");
    }
}
