//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed explicitly - no process-global state
//! - Single-statement operations with RETURNING - no read-after-write
//! - Zero rows matched is NotFound, not a storage error

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, OwnerRepo};
