//! [`RoleStore`](crate::store::RoleStore) implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRoleStore;
pub use postgres::PgRoleStore;
