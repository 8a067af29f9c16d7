//! Domain entities - the core business objects.

mod password;
mod post;

pub use password::PostPassword;
pub use post::{NewPost, Post, PostQuery};
