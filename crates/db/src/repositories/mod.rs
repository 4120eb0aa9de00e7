//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept the store as the first argument.

pub mod role_repo;

pub use role_repo::RoleRepo;
