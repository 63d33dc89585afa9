//! Concrete PostgreSQL repository implementations.

pub mod file_version;

pub use file_version::FileVersionRepository;
