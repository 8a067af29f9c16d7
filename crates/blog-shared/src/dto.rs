//! Data Transfer Objects - request/response types for the API.
//!
//! Every request field is optional on the wire; presence is checked by the
//! handler so that the password is always verified first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form body of `POST /api/blog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostForm {
    pub password: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /api/blog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub password: Option<String>,
    /// Upper bound on post creation time.
    pub time: Option<String>,
    pub limit: Option<String>,
}

/// Form body of `PUT /api/blog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPostForm {
    pub password: Option<String>,
    pub post_id: Option<String>,
    pub content: Option<String>,
}

/// Form body of `DELETE /api/blog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostForm {
    pub password: Option<String>,
    pub post_id: Option<String>,
}

/// Public representation of a post. The edit time is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
