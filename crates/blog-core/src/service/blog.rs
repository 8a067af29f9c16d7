//! The guarded CRUD pipeline behind `/api/blog`.
//!
//! Every operation runs the same short-circuiting checks: the shared secret
//! must be configured, then the caller's password must match it (reads
//! degrade to the public view instead of failing), then the individual
//! fields are validated, and only then is the store touched.

use std::sync::Arc;

use chrono::Utc;

use super::params::{parse_limit, parse_post_id, parse_time};
use crate::domain::{NewPost, Post, PostPassword, PostQuery};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Per-process settings for the blog endpoint.
#[derive(Debug, Clone)]
pub struct BlogSettings {
    /// Shared secret. Every request fails while this is unset.
    pub post_password: Option<PostPassword>,
    /// Author stamped on every new post.
    pub author: String,
}

/// Blog request handler over an injected post store.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    settings: BlogSettings,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>, settings: BlogSettings) -> Self {
        Self { posts, settings }
    }

    pub fn settings(&self) -> &BlogSettings {
        &self.settings
    }

    fn secret(&self) -> Result<&PostPassword, DomainError> {
        self.settings
            .post_password
            .as_ref()
            .ok_or_else(|| DomainError::Configuration("post password is not set".to_string()))
    }

    /// Hard check used by every write. A missing password compares as "".
    fn authorize(&self, password: Option<&str>) -> Result<(), DomainError> {
        if self.secret()?.matches(password.unwrap_or_default()) {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    fn not_found(id: i32) -> impl FnOnce(RepoError) -> DomainError {
        move |err| match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: ENTITY,
                id,
            },
            other => DomainError::Repository(other),
        }
    }

    /// POST: publish a new post under the configured author.
    pub async fn create(
        &self,
        password: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post, DomainError> {
        self.authorize(password)?;
        let content =
            content.ok_or_else(|| DomainError::Validation("content is required".to_string()))?;

        let post = NewPost::new(self.settings.author.clone(), content);
        Ok(self.posts.create(post).await?)
    }

    /// GET: newest-first listing with soft authentication.
    ///
    /// A `time` bound replaces every other cutoff, for any caller, so a
    /// future `time` previews scheduled posts. Without `time`, callers
    /// lacking the right password only see posts whose `created_at` has
    /// passed.
    pub async fn list(
        &self,
        password: Option<&str>,
        time: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Vec<Post>, DomainError> {
        let authenticated = self.secret()?.matches(password.unwrap_or_default());
        let time = time.map(parse_time).transpose()?;
        let limit = parse_limit(limit)?;

        let not_after = match time {
            Some(time) => Some(time),
            None if authenticated => None,
            None => Some(Utc::now()),
        };

        Ok(self.posts.list(PostQuery { not_after, limit }).await?)
    }

    /// PUT: replace the content of an existing post.
    pub async fn edit(
        &self,
        password: Option<&str>,
        post_id: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post, DomainError> {
        self.authorize(password)?;
        let id = parse_post_id(post_id)?;

        if self.posts.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            });
        }

        let content =
            content.ok_or_else(|| DomainError::Validation("content is required".to_string()))?;

        self.posts
            .update_content(id, content.to_string(), Utc::now())
            .await
            .map_err(Self::not_found(id))
    }

    /// DELETE: remove a post for good.
    pub async fn delete(
        &self,
        password: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<(), DomainError> {
        self.authorize(password)?;
        let id = parse_post_id(post_id)?;

        if self.posts.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            });
        }

        self.posts.delete(id).await.map_err(Self::not_found(id))
    }
}
