use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog entry.
///
/// `id` and `created_at` are fixed once the store has accepted the post;
/// only `content` and `edited_at` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

/// A post that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Listing window: newest first, at most `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
    /// Inclusive upper bound on `created_at`. `None` means no bound.
    pub not_after: Option<DateTime<Utc>>,
    pub limit: u64,
}

impl PostQuery {
    /// Whether a post falls inside the window's time bound.
    pub fn admits(&self, post: &Post) -> bool {
        self.not_after
            .map(|bound| post.created_at <= bound)
            .unwrap_or(true)
    }
}
