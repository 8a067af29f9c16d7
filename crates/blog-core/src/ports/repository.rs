use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewPost, Post, PostQuery};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a post; the store assigns a fresh id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Posts inside the query window, newest `created_at` first.
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Replace a post's content and stamp `edited_at` in one commit.
    async fn update_content(
        &self,
        id: i32,
        content: String,
        edited_at: DateTime<Utc>,
    ) -> Result<Post, RepoError>;
}
