//! ownerdesk-server: HTTP service for the owner registry
//!
//! Exposes CRUD operations on owner records (name, phone, email,
//! registration date, address) backed by a PostgreSQL pool.
//!
//! Layering: HTTP routes -> repository -> connection pool. The pool is
//! created by the caller and passed down explicitly; nothing in this
//! crate holds global state.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{run_server, ApiError, ServerConfig};
