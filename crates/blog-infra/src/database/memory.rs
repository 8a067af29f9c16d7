//! In-memory post store - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostQuery};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct MemoryState {
    posts: BTreeMap<i32, Post>,
    last_id: i32,
}

/// Post store backed by a `BTreeMap` behind an async RwLock.
///
/// Ids come from a counter that only grows, so a deleted id is never handed
/// out again. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        state
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id space exhausted".to_string()))?;
        state.last_id = id;

        let post = Post {
            id,
            author: new_post.author,
            content: new_post.content,
            created_at: new_post.created_at,
            edited_at: None,
        };
        state.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;

        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|post| query.admits(post))
            .cloned()
            .collect();

        // Newest first; ids break ties so the order is stable.
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts.truncate(usize::try_from(query.limit).unwrap_or(usize::MAX));

        Ok(posts)
    }

    async fn update_content(
        &self,
        id: i32,
        content: String,
        edited_at: DateTime<Utc>,
    ) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        let post = state.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.content = content;
        post.edited_at = Some(edited_at);

        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn new_post(content: &str, created_at: DateTime<Utc>) -> NewPost {
        NewPost {
            author: "Steffo".to_string(),
            content: content.to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryPostRepository::new();
        let now = Utc::now();

        let first = repo.create(new_post("a", now)).await.unwrap();
        let second = repo.create(new_post("b", now)).await.unwrap();
        repo.delete(second.id).await.unwrap();
        let third = repo.create(new_post("c", now)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
        assert_eq!(third.edited_at, None);
    }

    #[tokio::test]
    async fn test_list_orders_bounds_and_limits() {
        let repo = InMemoryPostRepository::new();
        let now = Utc::now();

        repo.create(new_post("old", now - TimeDelta::hours(2)))
            .await
            .unwrap();
        repo.create(new_post("future", now + TimeDelta::hours(1)))
            .await
            .unwrap();
        repo.create(new_post("recent", now - TimeDelta::minutes(5)))
            .await
            .unwrap();

        let everything = repo
            .list(PostQuery {
                not_after: None,
                limit: 50,
            })
            .await
            .unwrap();
        let contents: Vec<&str> = everything.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["future", "recent", "old"]);

        let published = repo
            .list(PostQuery {
                not_after: Some(now),
                limit: 50,
            })
            .await
            .unwrap();
        let contents: Vec<&str> = published.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["recent", "old"]);

        let newest = repo
            .list(PostQuery {
                not_after: None,
                limit: 1,
            })
            .await
            .unwrap();
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].content, "future");
    }

    #[tokio::test]
    async fn test_update_keeps_creation_time() {
        let repo = InMemoryPostRepository::new();
        let created_at = Utc::now() - TimeDelta::days(1);
        let post = repo.create(new_post("draft", created_at)).await.unwrap();

        let edited_at = Utc::now();
        let updated = repo
            .update_content(post.id, "final".to_string(), edited_at)
            .await
            .unwrap();

        assert_eq!(updated.content, "final");
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.edited_at, Some(edited_at));
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();

        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert!(matches!(
            repo.update_content(1, "x".to_string(), Utc::now()).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }
}
