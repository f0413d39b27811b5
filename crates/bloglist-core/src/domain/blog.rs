use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a bookmarked article owned by the user who added it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    /// Owning user.
    pub user_id: Uuid,
}

impl Blog {
    /// Create a new blog owned by `user_id`.
    pub fn new(draft: BlogDraft, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
            user_id,
        }
    }
}

/// Validated input for a new blog. Ownership is not part of the draft; it is
/// always taken from the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl BlogDraft {
    /// `title` and `url` must be present and non-empty. `likes` defaults to 0 and
    /// its sign is not checked.
    pub fn parse(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
    ) -> Result<Self, DomainError> {
        let missing = || DomainError::Validation("title or url missing".to_string());
        let title = title.filter(|t| !t.is_empty()).ok_or_else(missing)?;
        let url = url.filter(|u| !u.is_empty()).ok_or_else(missing)?;

        Ok(Self {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_is_rejected() {
        let err = BlogDraft::parse(None, Some("A".into()), Some("https://x".into()), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "title or url missing");
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = BlogDraft::parse(Some("T".into()), None, Some(String::new()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_likes_default_to_zero() {
        let draft = BlogDraft::parse(Some("T".into()), None, Some("https://x".into()), None).unwrap();
        assert_eq!(draft.likes, 0);
    }

    #[test]
    fn test_negative_likes_are_kept() {
        let draft =
            BlogDraft::parse(Some("T".into()), None, Some("https://x".into()), Some(-4)).unwrap();
        assert_eq!(draft.likes, -4);
    }

    #[test]
    fn test_new_blog_is_owned_by_given_user() {
        let owner = Uuid::new_v4();
        let draft = BlogDraft::parse(Some("T".into()), None, Some("https://x".into()), Some(3)).unwrap();
        let blog = Blog::new(draft, owner);
        assert_eq!(blog.user_id, owner);
        assert_eq!(blog.likes, 3);
    }
}
