//! API handlers for the camera inventory REST endpoints

pub mod cameras;
pub mod health;
pub mod openapi;
pub mod view;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // View
        .route("/view", get(view::get_view))
        .route("/view/search", put(view::set_search))
        .route("/view/status", put(view::set_status))
        .route("/view/location", put(view::set_location))
        .route("/view/page-size", put(view::set_page_size))
        .route("/view/navigate", post(view::navigate))
        .route("/view/notice", delete(view::dismiss_notice))
        // Cameras
        .route("/cameras", get(cameras::list_cameras))
        .route("/cameras/reload", post(cameras::reload_cameras))
        .route("/cameras/:id/toggle", post(cameras::toggle_camera))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
