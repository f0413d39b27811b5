//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Entities are kept in insertion order so listings are stable.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

/// In-memory user store. Enforces username uniqueness like the database does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn username_taken(users: &[User], candidate: &User) -> bool {
        users
            .iter()
            .any(|u| u.username == candidate.username && u.id != candidate.id)
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if Self::username_taken(&store, &user) {
            return Err(RepoError::Constraint("username".to_string()));
        }
        store.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if Self::username_taken(&store, &user) {
            return Err(RepoError::Constraint("username".to_string()));
        }
        let slot = store
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|u| u.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.username == username).cloned())
    }

    async fn append_blog(&self, user_id: Uuid, blog_id: Uuid) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        let user = store
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        user.add_blog(blog_id);
        Ok(user.clone())
    }
}

/// In-memory blog store.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Constraint("id".to_string()));
        }
        store.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or(RepoError::NotFound)?;
        *slot = blog.clone();
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|b| b.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl BlogRepository for InMemoryBlogRepository {}

#[cfg(test)]
mod tests {
    use bloglist_core::domain::BlogDraft;

    use super::*;

    fn draft(title: &str) -> BlogDraft {
        BlogDraft::parse(Some(title.into()), None, Some("https://x".into()), None).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_username_is_a_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("root".into(), "A".into(), "h".into()))
            .await
            .unwrap();

        let result = repo
            .insert(User::new("root".into(), "B".into(), "h".into()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_user_update_keeps_its_own_username() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo
            .insert(User::new("root".into(), "A".into(), "h".into()))
            .await
            .unwrap();

        user.add_blog(Uuid::new_v4());
        let updated = repo.update(user.clone()).await.unwrap();

        assert_eq!(updated.blogs.len(), 1);
        assert_eq!(repo.find_by_username("root").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_blogs_are_listed_in_insertion_order() {
        let repo = InMemoryBlogRepository::new();
        let owner = Uuid::new_v4();
        for title in ["first", "second", "third"] {
            repo.insert(Blog::new(draft(title), owner)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_blog() {
        let repo = InMemoryBlogRepository::new();
        let ghost = Blog::new(draft("ghost"), Uuid::new_v4());

        assert!(matches!(
            repo.update(ghost.clone()).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(repo.delete(ghost.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_append_blog_keeps_concurrent_appends() {
        let repo = std::sync::Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(User::new("root".into(), "A".into(), "h".into()))
            .await
            .unwrap();

        let user_id = user.id;
        let ids: Vec<Uuid> = (0..8).map(|_| Uuid::new_v4()).collect();
        let tasks: Vec<_> = ids
            .iter()
            .map(|&blog_id| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append_blog(user_id, blog_id).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = repo.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(stored.blogs.len(), ids.len());
        assert!(ids.iter().all(|id| stored.blogs.contains(id)));
    }

    #[tokio::test]
    async fn test_append_blog_to_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo.append_blog(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
