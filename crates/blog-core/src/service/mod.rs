//! Request pipeline for the blog endpoint.

mod blog;
mod params;

pub use blog::{BlogService, BlogSettings};
pub use params::{DEFAULT_LIMIT, MAX_LIMIT, parse_limit, parse_post_id, parse_time};
