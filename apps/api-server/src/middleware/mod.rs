//! Middleware modules.

pub mod error;
pub mod validate_id;

pub use validate_id::ValidateId;
