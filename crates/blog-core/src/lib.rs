//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate holds the post model, the store port and the request pipeline
//! that guards every store operation. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{BlogService, BlogSettings};
