//! Structured identity-store failures.
//!
//! Stores report rejected writes as a list of [`IdentityError`] values. The
//! API layer returns that list to clients untouched, so the codes and
//! descriptions produced here are part of the wire contract.

use serde::{Deserialize, Serialize};

pub const CODE_DUPLICATE_ROLE_NAME: &str = "DuplicateRoleName";
pub const CODE_DUPLICATE_ROLE_ID: &str = "DuplicateRoleId";
pub const CODE_INVALID_ROLE_NAME: &str = "InvalidRoleName";
pub const CODE_INVALID_ROLE_ID: &str = "InvalidRoleId";
pub const CODE_CONCURRENCY_FAILURE: &str = "ConcurrencyFailure";

/// One `{code, description}` entry of a failed identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    pub code: String,
    pub description: String,
}

impl IdentityError {
    pub fn new(code: &str, description: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            description: description.into(),
        }
    }

    pub fn duplicate_role_name(name: &str) -> Self {
        Self::new(
            CODE_DUPLICATE_ROLE_NAME,
            format!("Role name '{name}' is already taken."),
        )
    }

    pub fn duplicate_role_id(id: &str) -> Self {
        Self::new(
            CODE_DUPLICATE_ROLE_ID,
            format!("Role id '{id}' is already taken."),
        )
    }

    pub fn invalid_role_name(name: &str) -> Self {
        Self::new(
            CODE_INVALID_ROLE_NAME,
            format!("Role name '{name}' is invalid."),
        )
    }

    pub fn invalid_role_id(id: &str) -> Self {
        Self::new(CODE_INVALID_ROLE_ID, format!("Role id '{id}' is invalid."))
    }

    pub fn concurrency_failure() -> Self {
        Self::new(
            CODE_CONCURRENCY_FAILURE,
            "Optimistic concurrency failure, object has been modified.",
        )
    }
}
