//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{cameras, health, view};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camera Inventory API",
        version = "0.1.0",
        description = "Search, filter, paginate and toggle the cameras of a remote inventory",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // View
        view::get_view,
        view::set_search,
        view::set_status,
        view::set_location,
        view::set_page_size,
        view::navigate,
        view::dismiss_notice,
        // Cameras
        cameras::list_cameras,
        cameras::reload_cameras,
        cameras::toggle_camera,
    ),
    components(
        schemas(
            // Cameras
            crate::models::camera::Camera,
            crate::models::enums::CameraStatus,
            crate::models::enums::StatusFilter,
            crate::models::enums::NavAction,
            cameras::ToggleRequest,
            // View
            crate::models::view::ViewState,
            crate::models::view::ViewResponse,
            crate::models::view::ViewOptions,
            crate::models::view::CameraPage,
            crate::models::view::PageControls,
            crate::models::view::Notice,
            crate::models::view::NoticeKind,
            crate::models::view::SetSearchRequest,
            crate::models::view::SetStatusRequest,
            crate::models::view::SetLocationRequest,
            crate::models::view::SetPageSizeRequest,
            crate::models::view::NavigateRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "view", description = "Inventory view state and intents"),
        (name = "cameras", description = "Camera list and status updates")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
