//! View endpoints: render the inventory view and apply user intents

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::view::{
        NavigateRequest, SetLocationRequest, SetPageSizeRequest, SetSearchRequest, SetStatusRequest,
        ViewResponse,
    },
};

/// Render the current view
#[utoipa::path(
    get,
    path = "/view",
    tag = "view",
    responses(
        (status = 200, description = "Current view", body = ViewResponse)
    )
)]
pub async fn get_view(State(state): State<crate::AppState>) -> Json<ViewResponse> {
    Json(state.services.view.render().await)
}

/// Set the search term (page goes back to 1)
#[utoipa::path(
    put,
    path = "/view/search",
    tag = "view",
    request_body = SetSearchRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse)
    )
)]
pub async fn set_search(
    State(state): State<crate::AppState>,
    Json(data): Json<SetSearchRequest>,
) -> Json<ViewResponse> {
    Json(state.services.view.set_search(data.search).await)
}

/// Set the status filter (page goes back to 1)
#[utoipa::path(
    put,
    path = "/view/status",
    tag = "view",
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse)
    )
)]
pub async fn set_status(
    State(state): State<crate::AppState>,
    Json(data): Json<SetStatusRequest>,
) -> Json<ViewResponse> {
    Json(state.services.view.set_status(data.status).await)
}

/// Set the location filter (page goes back to 1)
#[utoipa::path(
    put,
    path = "/view/location",
    tag = "view",
    request_body = SetLocationRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse),
        (status = 400, description = "Unknown location", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_location(
    State(state): State<crate::AppState>,
    Json(data): Json<SetLocationRequest>,
) -> AppResult<Json<ViewResponse>> {
    Ok(Json(state.services.view.set_location(data.location).await?))
}

/// Set the page size, 10 or 20 (page goes back to 1)
#[utoipa::path(
    put,
    path = "/view/page-size",
    tag = "view",
    request_body = SetPageSizeRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse),
        (status = 422, description = "Unsupported page size")
    )
)]
pub async fn set_page_size(
    State(state): State<crate::AppState>,
    Json(data): Json<SetPageSizeRequest>,
) -> Json<ViewResponse> {
    Json(state.services.view.set_page_size(data.per_page).await)
}

/// Move to the first, previous, next or last page
#[utoipa::path(
    post,
    path = "/view/navigate",
    tag = "view",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Updated view", body = ViewResponse)
    )
)]
pub async fn navigate(
    State(state): State<crate::AppState>,
    Json(data): Json<NavigateRequest>,
) -> Json<ViewResponse> {
    Json(state.services.view.navigate(data.to).await)
}

/// Dismiss the failure notice
#[utoipa::path(
    delete,
    path = "/view/notice",
    tag = "view",
    responses(
        (status = 200, description = "Updated view", body = ViewResponse)
    )
)]
pub async fn dismiss_notice(State(state): State<crate::AppState>) -> Json<ViewResponse> {
    Json(state.services.view.dismiss_notice().await)
}
