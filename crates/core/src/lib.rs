//! Domain types and rules shared by the store and API layers.
//!
//! This crate has no I/O: it defines the role shape, the identity error
//! vocabulary, pagination arithmetic, and the validation helpers both the
//! stores and the HTTP handlers apply.

pub mod error;
pub mod identity;
pub mod pagination;
pub mod roles;
