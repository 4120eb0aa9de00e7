//! Row model for the `roles` table.

use kspace_core::roles::Role;
use sqlx::FromRow;

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: String,
    pub name: String,
    pub normalized_name: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            name: row.name,
            normalized_name: row.normalized_name,
        }
    }
}
