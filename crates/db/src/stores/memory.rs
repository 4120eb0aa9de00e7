//! Process-local role store.
//!
//! Keeps roles in insertion order behind a `tokio` read-write lock. Used when
//! no database is configured and by the test suites.

use async_trait::async_trait;
use kspace_core::identity::IdentityError;
use kspace_core::roles::{validate_role, Role};
use tokio::sync::RwLock;

use crate::store::{RoleQuery, RoleStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Validator checks plus uniqueness against `existing`, skipping the row
/// being written when `updating` is set.
fn check_write(existing: &[Role], role: &Role, updating: bool) -> Result<(), StoreError> {
    let mut errors = validate_role(role);

    if !updating && existing.iter().any(|r| r.id == role.id) {
        errors.push(IdentityError::duplicate_role_id(&role.id));
    }
    if existing
        .iter()
        .any(|r| r.normalized_name == role.normalized_name && r.id != role.id)
    {
        errors.push(IdentityError::duplicate_role_name(&role.name));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Rejected(errors))
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn list(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.roles.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, StoreError> {
        Ok(self.roles.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn count(&self, query: &RoleQuery) -> Result<i64, StoreError> {
        let roles = self.roles.read().await;
        Ok(roles.iter().filter(|r| query.matches(r)).count() as i64)
    }

    async fn fetch(
        &self,
        query: &RoleQuery,
        skip: i64,
        take: i64,
    ) -> Result<Vec<Role>, StoreError> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let take = usize::try_from(take).unwrap_or(0);

        let roles = self.roles.read().await;
        Ok(roles
            .iter()
            .filter(|r| query.matches(r))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn create(&self, role: &Role) -> Result<(), StoreError> {
        let mut roles = self.roles.write().await;
        check_write(&roles, role, false)?;
        roles.push(role.clone());
        Ok(())
    }

    async fn update(&self, role: &Role) -> Result<(), StoreError> {
        let mut roles = self.roles.write().await;
        check_write(&roles, role, true)?;

        match roles.iter_mut().find(|r| r.id == role.id) {
            Some(slot) => {
                *slot = role.clone();
                Ok(())
            }
            None => Err(StoreError::rejected(IdentityError::concurrency_failure())),
        }
    }

    async fn delete(&self, role: &Role) -> Result<(), StoreError> {
        let mut roles = self.roles.write().await;
        match roles.iter().position(|r| r.id == role.id) {
            Some(index) => {
                roles.remove(index);
                Ok(())
            }
            None => Err(StoreError::rejected(IdentityError::concurrency_failure())),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
