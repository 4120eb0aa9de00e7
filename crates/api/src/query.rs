//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /roles/filter`.
///
/// Missing paging values are filled in by
/// [`resolve_page`](kspace_core::pagination::resolve_page).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFilterParams {
    pub filter: Option<String>,
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
}
