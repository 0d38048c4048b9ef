//! Repository implementations for database access

pub mod owners;

pub use owners::{DbError, OwnerRepo};
