//! # filevault-service
//!
//! Business logic service layer for FileVault. Services receive their
//! dependencies at construction time via `Arc` references and expose the
//! public operations of the system.

pub mod file;

pub use file::FileService;
