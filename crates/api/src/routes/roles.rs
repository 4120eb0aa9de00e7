//! Route definitions for the `/roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Role routes mounted at `/roles`.
///
/// ```text
/// GET    /          -> list_roles
/// POST   /          -> create_role
/// GET    /filter    -> search_roles
/// GET    /{id}      -> get_role
/// PUT    /{id}      -> update_role
/// DELETE /{id}      -> delete_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roles::list_roles).post(roles::create_role))
        .route("/filter", get(roles::search_roles))
        .route(
            "/{id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        )
}
