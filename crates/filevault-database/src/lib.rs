//! # filevault-database
//!
//! The [`VersionStore`] trait and its two backends: a PostgreSQL
//! repository and an in-memory store, selected at runtime from
//! configuration. Also owns connection pool management and the schema
//! bootstrap.

pub mod connection;
pub mod memory;
pub mod provider;
pub mod repositories;
pub mod schema;
pub mod store;

pub use connection::DatabasePool;
pub use provider::connect_store;
pub use store::VersionStore;
