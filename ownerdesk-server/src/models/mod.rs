//! Domain models with validation at construction
//!
//! Untrusted input becomes an `OwnerDraft` only after validation; invalid
//! input returns `ValidationError`, never a panic.

pub mod owner;
pub mod validation;

pub use owner::{Owner, OwnerDraft};
pub use validation::ValidationError;
