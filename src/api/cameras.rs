//! Camera endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{view::ViewResponse, CameraPage, CameraStatus, LocationFilter, PageSize, StatusFilter, ViewState},
};

/// Stateless page query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CameraQuery {
    /// Case-insensitive search in camera names
    pub search: Option<String>,
    /// `All`, `Active` or `Inactive`
    pub status: Option<String>,
    /// Location facet, or `All`
    pub location: Option<String>,
    /// Page number (default: 1)
    pub page: Option<usize>,
    /// Items per page, 10 or 20 (default: 10)
    pub per_page: Option<u32>,
}

impl CameraQuery {
    pub fn to_view_state(&self) -> AppResult<ViewState> {
        let per_page = self.per_page.map(PageSize::try_from).transpose()?.unwrap_or_default();
        let status = self
            .status
            .as_deref()
            .map(str::parse::<StatusFilter>)
            .transpose()?
            .unwrap_or_default();
        let location = self.location.clone().map(LocationFilter::from).unwrap_or_default();

        Ok(ViewState::new(per_page)
            .with_search(self.search.clone().unwrap_or_default())
            .with_status(status)
            .with_location(location)
            .with_page(self.page.unwrap_or(1)))
    }
}

/// Optional body of a toggle request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleRequest {
    /// Status the client last displayed; the stored status is used when absent
    pub current_status: Option<CameraStatus>,
}

impl ToggleRequest {
    /// An empty body means no client status; anything else must be a valid
    /// `ToggleRequest`.
    pub fn parse(body: &[u8]) -> AppResult<Option<CameraStatus>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice::<ToggleRequest>(body)
            .map(|request| request.current_status)
            .map_err(|e| AppError::Validation(format!("Invalid toggle body: {}", e)))
    }
}

/// Derive a page of cameras from query parameters
#[utoipa::path(
    get,
    path = "/cameras",
    tag = "cameras",
    params(CameraQuery),
    responses(
        (status = 200, description = "Page of cameras", body = CameraPage),
        (status = 400, description = "Invalid filter or page size", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_cameras(
    State(state): State<crate::AppState>,
    Query(query): Query<CameraQuery>,
) -> AppResult<Json<CameraPage>> {
    let view_state = query.to_view_state()?;
    Ok(Json(state.services.cameras.page(&view_state).await))
}

/// Re-fetch the camera list from the remote API
#[utoipa::path(
    post,
    path = "/cameras/reload",
    tag = "cameras",
    responses(
        (status = 200, description = "Reloaded view", body = ViewResponse),
        (status = 502, description = "Camera API failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn reload_cameras(State(state): State<crate::AppState>) -> AppResult<Json<ViewResponse>> {
    Ok(Json(state.services.view.reload().await?))
}

/// Flip a camera between Active and Inactive
#[utoipa::path(
    post,
    path = "/cameras/{id}/toggle",
    tag = "cameras",
    params(("id" = String, Path, description = "Camera ID")),
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Camera not found", body = crate::error::ErrorResponse),
        (status = 502, description = "Camera API failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn toggle_camera(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<ViewResponse>> {
    let current = ToggleRequest::parse(&body)?;
    let camera_id = state
        .services
        .cameras
        .store()
        .resolve_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Camera {} not found", id)))?;
    Ok(Json(state.services.view.toggle(&camera_id, current).await?))
}
