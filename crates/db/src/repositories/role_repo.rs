//! Adapter between the role handlers and a [`RoleStore`].
//!
//! Builds filter predicates and page windows, applies the name
//! normalization rule, and resolves existence before mutating. Store
//! rejections are passed through untouched.

use kspace_core::pagination::{page_offset, Pagination};
use kspace_core::roles::Role;

use crate::store::{RoleQuery, RoleStore, StoreError};

/// Provides CRUD and paged query operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List every role in the store's natural order.
    pub async fn list_all(store: &dyn RoleStore) -> Result<Vec<Role>, StoreError> {
        store.list().await
    }

    /// One page of roles whose id or name contains `filter`.
    ///
    /// A missing or empty filter matches every role. `total_records` counts
    /// all matches before paging. Paging values are not checked here.
    pub async fn list_filtered(
        store: &dyn RoleStore,
        filter: Option<&str>,
        page_index: i64,
        page_size: i64,
    ) -> Result<Pagination<Role>, StoreError> {
        let query = match filter {
            Some(text) if !text.is_empty() => RoleQuery::containing(text),
            _ => RoleQuery::all(),
        };

        let total_records = store.count(&query).await?;
        let items = store
            .fetch(&query, page_offset(page_index, page_size), page_size)
            .await?;

        Ok(Pagination {
            items,
            total_records,
        })
    }

    pub async fn get_by_id(store: &dyn RoleStore, id: &str) -> Result<Option<Role>, StoreError> {
        store.find_by_id(id).await
    }

    /// Create a role with a caller-supplied id.
    pub async fn create(store: &dyn RoleStore, id: &str, name: &str) -> Result<Role, StoreError> {
        let role = Role::new(id, name);
        store.create(&role).await?;
        Ok(role)
    }

    /// Rename a role.
    ///
    /// Returns `None` if no role with the given id exists.
    pub async fn update(
        store: &dyn RoleStore,
        id: &str,
        name: &str,
    ) -> Result<Option<Role>, StoreError> {
        let Some(mut role) = store.find_by_id(id).await? else {
            return Ok(None);
        };

        role.rename(name);
        store.update(&role).await?;
        Ok(Some(role))
    }

    /// Delete a role, returning it as it was before removal.
    ///
    /// Returns `None` if no role with the given id exists.
    pub async fn delete(store: &dyn RoleStore, id: &str) -> Result<Option<Role>, StoreError> {
        let Some(role) = store.find_by_id(id).await? else {
            return Ok(None);
        };

        store.delete(&role).await?;
        Ok(Some(role))
    }
}
