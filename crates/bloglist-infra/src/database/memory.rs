//! In-memory repositories - used when no database is configured and in tests.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

/// An entity that can live in an [`InMemoryRepository`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Name of the unique field `other` would violate if stored next to `self`.
    fn conflicts_with(&self, _other: &Self) -> Option<&'static str> {
        None
    }
}

impl Record for Blog {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> Option<&'static str> {
        (self.id != other.id && self.username == other.username).then_some("username")
    }
}

/// Vector-backed repository that keeps rows in insertion order.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// In-memory blog repository.
pub type InMemoryBlogRepository = InMemoryRepository<Blog>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;

        if let Some(field) = rows.iter().find_map(|row| row.conflicts_with(&entity)) {
            return Err(RepoError::Constraint(format!("duplicate {field}")));
        }

        match rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => rows.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);

        if rows.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|user| user.username == username).cloned())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|blog| blog.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloglist_core::domain::NewBlog;

    fn new_blog(owner: Uuid, title: &str) -> Blog {
        Blog::new(
            owner,
            NewBlog {
                title: Some(title.to_string()),
                author: Some("Michael Chan".to_string()),
                url: Some("https://reactpatterns.com/".to_string()),
                likes: Some(7),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryBlogRepository::new();
        let blog = repo.save(new_blog(Uuid::new_v4(), "React patterns")).await.unwrap();

        let found = repo.find_by_id(blog.id).await.unwrap();
        assert_eq!(found, Some(blog));
    }

    #[tokio::test]
    async fn test_save_existing_replaces_in_place() {
        let repo = InMemoryBlogRepository::new();
        let owner = Uuid::new_v4();
        let mut first = repo.save(new_blog(owner, "first")).await.unwrap();
        repo.save(new_blog(owner, "second")).await.unwrap();

        first.likes = 100;
        repo.save(first.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "first");
        assert_eq!(all[0].likes, 100);
    }

    #[tokio::test]
    async fn test_find_by_user_id() {
        let repo = InMemoryBlogRepository::new();
        let owner = Uuid::new_v4();
        repo.save(new_blog(owner, "mine")).await.unwrap();
        repo.save(new_blog(Uuid::new_v4(), "theirs")).await.unwrap();

        let mine = repo.find_by_user_id(owner).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryBlogRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("root".into(), "Superuser".into(), "hash".into()))
            .await
            .unwrap();

        let result = repo
            .save(User::new("root".into(), "Impostor".into(), "hash".into()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("root".into(), "Superuser".into(), "hash".into()))
            .await
            .unwrap();
        repo.save(User::new("mluukkai".into(), "Matti".into(), "hash".into()))
            .await
            .unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.find_by_username("root").await.unwrap().is_none());
    }
}
