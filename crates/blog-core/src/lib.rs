//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate contains the post model, validation, pagination and the
//! operations over a [`ports::PostStore`], with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::DomainError;
pub use service::{PostPage, PostService};
