//! Role shape, normalization rule, and the role validator.
//!
//! The length limits mirror the `roles` table columns.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::identity::IdentityError;

/// Maximum length of a role id (characters).
pub const MAX_ROLE_ID_LEN: usize = 50;

/// Maximum length of a role name (characters).
pub const MAX_ROLE_NAME_LEN: usize = 50;

/// Roles created on first start when the store is empty.
pub const DEFAULT_ROLES: &[&str] = &["Admin", "Member"];

/// A role as persisted by an identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Uppercased `name`; only the store reads it.
    pub normalized_name: String,
}

impl Role {
    /// Build a role, deriving `normalized_name` from `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            normalized_name: normalize_role_name(&name),
            name,
        }
    }

    /// Replace the name and recompute the normalized form. The id never changes.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.normalized_name = normalize_role_name(&self.name);
    }
}

/// The `{id, name}` wire projection, used for request bodies and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleView {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub name: String,
}

impl From<Role> for RoleView {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
        }
    }
}

/// Uppercase transform used for case-insensitive name uniqueness.
pub fn normalize_role_name(name: &str) -> String {
    name.to_uppercase()
}

/// Field checks every store runs before writing a role.
///
/// Uniqueness is not checked here; that needs the store's data.
pub fn validate_role(role: &Role) -> Vec<IdentityError> {
    let mut errors = Vec::new();

    if role.id.is_empty() || role.id.chars().count() > MAX_ROLE_ID_LEN {
        errors.push(IdentityError::invalid_role_id(&role.id));
    }
    // Uppercasing can lengthen a name ("ß" becomes "SS"), and the normalized
    // form is stored under the same limit.
    if role.name.trim().is_empty()
        || role.name.chars().count() > MAX_ROLE_NAME_LEN
        || role.normalized_name.chars().count() > MAX_ROLE_NAME_LEN
    {
        errors.push(IdentityError::invalid_role_name(&role.name));
    }

    errors
}
