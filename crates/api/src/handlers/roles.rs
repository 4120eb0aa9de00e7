//! Handlers for the `/roles` resource.
//!
//! Request bodies and responses use the `{id, name}` role view. Store
//! rejections surface as 400 with the store's error list, absent roles as 404.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use kspace_core::error::CoreError;
use kspace_core::pagination::{resolve_page, Pagination};
use kspace_core::roles::RoleView;
use kspace_db::repositories::RoleRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::RoleFilterParams;
use crate::state::AppState;

/// Entity label used in not-found errors.
const ENTITY: &str = "Role";

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Path of the get-by-id endpoint for `id`, used as the `Location` header.
pub fn role_location(id: &str) -> String {
    format!("/api/v1/roles/{}", urlencoding::encode(id))
}

/// GET /api/v1/roles
///
/// List every role.
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<RoleView>>> {
    let roles = RoleRepo::list_all(state.store.as_ref()).await?;
    Ok(Json(roles.into_iter().map(RoleView::from).collect()))
}

/// GET /api/v1/roles/filter?filter=&pageIndex=&pageSize=
///
/// One page of roles whose id or name contains `filter`, with the total
/// match count. An empty page is still a 200.
pub async fn search_roles(
    State(state): State<AppState>,
    Query(params): Query<RoleFilterParams>,
) -> AppResult<Json<Pagination<RoleView>>> {
    let (page_index, page_size) = resolve_page(params.page_index, params.page_size)?;

    let page = RoleRepo::list_filtered(
        state.store.as_ref(),
        params.filter.as_deref(),
        page_index,
        page_size,
    )
    .await?;

    Ok(Json(page.map(RoleView::from)))
}

/// GET /api/v1/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoleView>> {
    let role = RoleRepo::get_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(role.into()))
}

/// POST /api/v1/roles
///
/// Create a role with a caller-supplied id. Returns 201 with a `Location`
/// header pointing at the new role.
pub async fn create_role(
    State(state): State<AppState>,
    payload: Result<Json<RoleView>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let role = RoleRepo::create(state.store.as_ref(), &input.id, &input.name).await?;

    tracing::info!(role_id = %role.id, name = %role.name, "Role created");

    let location = role_location(&role.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RoleView::from(role)),
    ))
}

/// PUT /api/v1/roles/{id}
///
/// Rename a role. The body id must equal the path id; the id itself never
/// changes. Returns 204 on success.
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RoleView>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = payload?;
    if id != input.id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Path id '{id}' does not match body id '{}'",
            input.id
        ))));
    }
    input.validate().map_err(CoreError::from)?;

    RoleRepo::update(state.store.as_ref(), &id, &input.name)
        .await?
        .ok_or_else(|| not_found(id.clone()))?;

    tracing::info!(role_id = %id, name = %input.name, "Role updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/roles/{id}
///
/// Delete a role and return it as it was before removal.
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoleView>> {
    let role = RoleRepo::delete(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(role_id = %role.id, "Role deleted");

    Ok(Json(role.into()))
}
