//! Startup seeding of the default roles.

use kspace_core::roles::DEFAULT_ROLES;

use crate::repositories::RoleRepo;
use crate::store::{RoleStore, StoreError};

/// Create [`DEFAULT_ROLES`] when the store holds no roles at all.
///
/// Returns the number of roles created; a populated store is left alone.
pub async fn seed_default_roles(store: &dyn RoleStore) -> Result<usize, StoreError> {
    if !RoleRepo::list_all(store).await?.is_empty() {
        tracing::debug!("Role store already populated, skipping seed");
        return Ok(0);
    }

    for name in DEFAULT_ROLES {
        RoleRepo::create(store, name, name).await?;
        tracing::info!(role_id = %name, "Seeded default role");
    }

    Ok(DEFAULT_ROLES.len())
}
