use std::sync::Arc;

use kspace_db::store::RoleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Identity store holding the roles.
    pub store: Arc<dyn RoleStore>,
}
