//! # Blog Shared
//!
//! Wire types for the blog API: request forms, the post JSON shape and the
//! problem-details error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
