//! The identity-store seam.
//!
//! [`RoleStore`] is the contract every backing store implements. Stores own
//! uniqueness and field constraints and report rejected writes as a list of
//! [`IdentityError`]s; infrastructure failures travel separately.

use async_trait::async_trait;
use kspace_core::identity::IdentityError;
use kspace_core::roles::Role;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refused the write. The list is returned to clients as-is.
    #[error("Identity operation rejected: {}", describe(.0))]
    Rejected(Vec<IdentityError>),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn rejected(error: IdentityError) -> Self {
        StoreError::Rejected(vec![error])
    }
}

fn describe(errors: &[IdentityError]) -> String {
    errors
        .iter()
        .map(|e| e.code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Filter predicate over roles.
///
/// `contains` matches a role whose id or name contains the text, using the
/// store's string comparison (both shipped stores compare case-sensitively).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleQuery {
    pub contains: Option<String>,
}

impl RoleQuery {
    /// Match every role.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match roles whose id or name contains `text`.
    pub fn containing(text: impl Into<String>) -> Self {
        Self {
            contains: Some(text.into()),
        }
    }

    pub fn matches(&self, role: &Role) -> bool {
        match &self.contains {
            Some(text) => role.id.contains(text.as_str()) || role.name.contains(text.as_str()),
            None => true,
        }
    }
}

/// Persistent collaborator holding role records.
///
/// `skip`/`take` follow sequence semantics: a negative `skip` skips nothing
/// and a `take` below 1 yields an empty page.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Every role in the store's natural order.
    async fn list(&self) -> Result<Vec<Role>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, StoreError>;

    /// Number of roles matching `query`.
    async fn count(&self, query: &RoleQuery) -> Result<i64, StoreError>;

    /// One window of the roles matching `query`.
    async fn fetch(&self, query: &RoleQuery, skip: i64, take: i64)
        -> Result<Vec<Role>, StoreError>;

    async fn create(&self, role: &Role) -> Result<(), StoreError>;

    async fn update(&self, role: &Role) -> Result<(), StoreError>;

    async fn delete(&self, role: &Role) -> Result<(), StoreError>;

    /// Cheap reachability probe for the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;
}
