//! API integration tests
//!
//! Each test serves a fake camera API and the real router on ephemeral ports
//! and talks to them over HTTP.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value};

use camera_inventory::{api, config::AppConfig, repository::Repository, services::Services, AppState};

const TOKEN: &str = "test-token";

#[derive(Default)]
struct FakeUpstream {
    cameras: Vec<Value>,
    updates: Vec<Value>,
    fail_fetch: bool,
    /// Camera ids whose updates are refused
    refuse: Vec<i64>,
}

type Shared = Arc<Mutex<FakeUpstream>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn fetch_cameras(State(upstream): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let upstream = upstream.lock().unwrap();
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "unauthorized"})));
    }
    if upstream.fail_fetch {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})));
    }
    (StatusCode::OK, Json(json!({"data": {"cameras": upstream.cameras}})))
}

async fn update_status(
    State(upstream): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut upstream = upstream.lock().unwrap();
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let id = body["id"].as_i64().unwrap_or_default();
    if upstream.refuse.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    upstream.updates.push(body);
    StatusCode::OK
}

/// 25 cameras; odd ids active with mixed casing, three named after the lobby
fn camera_records() -> Vec<Value> {
    (1..=25i64)
        .map(|id| {
            let name = match id {
                3 => "Lobby North".to_string(),
                12 => "lobby south".to_string(),
                20 => "Main LOBBY".to_string(),
                _ => format!("Camera {:02}", id),
            };
            let status = match id % 4 {
                1 => json!("ACTIVE"),
                3 => json!("active"),
                0 => json!("disabled"),
                _ => Value::Null,
            };
            let location = ["HQ", "Warehouse", "Parking"][(id % 3) as usize];
            json!({
                "id": id,
                "name": name,
                "location": location,
                "status": status,
                "ip_address": format!("10.0.0.{}", id),
                "model": "DS-2CD",
                "resolution": "1920x1080"
            })
        })
        .collect()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

struct Harness {
    client: Client,
    base: String,
    upstream: Shared,
}

impl Harness {
    async fn start(token: &str) -> Self {
        let upstream: Shared = Arc::new(Mutex::new(FakeUpstream {
            cameras: camera_records(),
            refuse: vec![13],
            ..Default::default()
        }));
        let fake = Router::new()
            .route("/fetch/cameras", get(fetch_cameras))
            .route("/update/camera/status", post(update_status))
            .with_state(upstream.clone());
        let upstream_addr = serve(fake).await;

        let mut config = AppConfig::default();
        config.upstream.base_url = format!("http://{}/", upstream_addr);
        config.upstream.token = token.to_string();

        let services = Services::new(Repository::new(), &config).unwrap();
        let _ = services.view.reload().await;

        let state = AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        };
        let addr = serve(api::create_router(state)).await;

        Self {
            client: Client::new(),
            base: format!("http://{}/api/v1", addr),
            upstream,
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("Failed to send request");
        Self::decode(response).await
    }

    async fn send(&self, method: reqwest::Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = self.client.request(method, format!("{}{}", self.base, path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.expect("Failed to send request");
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> (StatusCode, Value) {
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        let text = response.text().await.expect("Failed to read response");
        (status, serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

fn row_ids(view: &Value) -> Vec<i64> {
    view["page"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

fn row<'a>(view: &'a Value, id: i64) -> &'a Value {
    view["page"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id)
        .expect("row not on page")
}

#[tokio::test]
async fn test_health_and_ready() {
    let harness = Harness::start(TOKEN).await;

    let (status, body) = harness.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = harness.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_initial_view_and_navigation() {
    let harness = Harness::start(TOKEN).await;

    let (status, view) = harness.get("/view").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["load_status"]["state"], "loaded");
    assert_eq!(view["page"]["total"], 25);
    assert_eq!(view["page"]["page_count"], 3);
    assert_eq!(view["page"]["range_label"], "1-10 of 25");
    assert_eq!(row_ids(&view), (1..=10).collect::<Vec<_>>());
    assert_eq!(view["options"]["locations"], json!(["All", "Warehouse", "Parking", "HQ"]));

    let (_, view) = harness
        .send(reqwest::Method::POST, "/view/navigate", Some(json!({"to": "last"})))
        .await;
    assert_eq!(view["state"]["page"], 3);
    assert_eq!(view["page"]["range_label"], "21-25 of 25");
    assert_eq!(row_ids(&view), (21..=25).collect::<Vec<_>>());
    assert_eq!(view["page"]["controls"]["next"], false);

    let (_, view) = harness
        .send(reqwest::Method::POST, "/view/navigate", Some(json!({"to": "next"})))
        .await;
    assert_eq!(view["state"]["page"], 3);
}

#[tokio::test]
async fn test_search_resets_page() {
    let harness = Harness::start(TOKEN).await;
    harness
        .send(reqwest::Method::POST, "/view/navigate", Some(json!({"to": "next"})))
        .await;

    let (status, view) = harness
        .send(reqwest::Method::PUT, "/view/search", Some(json!({"search": "Lobby"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"]["page"], 1);
    assert_eq!(view["page"]["total"], 3);
    assert_eq!(view["page"]["page_count"], 1);
    assert_eq!(row_ids(&view), vec![3, 12, 20]);
}

#[tokio::test]
async fn test_status_and_location_filters() {
    let harness = Harness::start(TOKEN).await;

    let (_, view) = harness
        .send(reqwest::Method::PUT, "/view/status", Some(json!({"status": "Inactive"})))
        .await;
    assert_eq!(view["page"]["total"], 12);
    assert!(view["page"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["status"] == "Inactive"));

    let (_, view) = harness
        .send(reqwest::Method::PUT, "/view/location", Some(json!({"location": "Parking"})))
        .await;
    // Parking holds ids 2, 5, 8, ...; the even ones are inactive.
    assert_eq!(row_ids(&view), vec![2, 8, 14, 20]);

    let (status, _) = harness
        .send(reqwest::Method::PUT, "/view/location", Some(json!({"location": "Mars"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, view) = harness
        .send(reqwest::Method::PUT, "/view/location", Some(json!({"location": "All"})))
        .await;
    assert_eq!(view["page"]["total"], 12);
}

#[tokio::test]
async fn test_page_size() {
    let harness = Harness::start(TOKEN).await;

    let (status, view) = harness
        .send(reqwest::Method::PUT, "/view/page-size", Some(json!({"per_page": 20})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["page"]["page_count"], 2);
    assert_eq!(view["page"]["range_label"], "1-20 of 25");

    let (status, _) = harness
        .send(reqwest::Method::PUT, "/view/page-size", Some(json!({"per_page": 15})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_toggle_patches_single_camera() {
    let harness = Harness::start(TOKEN).await;

    let (status, view) = harness
        .send(
            reqwest::Method::POST,
            "/cameras/7/toggle",
            Some(json!({"current_status": "Active"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row(&view, 7)["status"], "Inactive");
    assert_eq!(row(&view, 8)["status"], "Inactive");
    assert_eq!(row(&view, 9)["status"], "Active");

    let updates = harness.upstream.lock().unwrap().updates.clone();
    assert_eq!(updates, vec![json!({"id": 7, "status": "Inactive"})]);

    // No body: the stored status is used
    let (_, view) = harness.send(reqwest::Method::POST, "/cameras/7/toggle", None).await;
    assert_eq!(row(&view, 7)["status"], "Active");
}

#[tokio::test]
async fn test_failed_toggle_keeps_status_and_raises_notice() {
    let harness = Harness::start(TOKEN).await;

    let (status, body) = harness.send(reqwest::Method::POST, "/cameras/13/toggle", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "UpstreamRejected");

    let (_, view) = harness
        .send(reqwest::Method::PUT, "/view/page-size", Some(json!({"per_page": 20})))
        .await;
    assert_eq!(row(&view, 13)["status"], "Active");
    assert_eq!(view["notice"]["kind"], "toggle_failed");
    assert_eq!(view["notice"]["camera_id"], 13);

    let (_, view) = harness.send(reqwest::Method::DELETE, "/view/notice", None).await;
    assert!(view["notice"].is_null());
}

#[tokio::test]
async fn test_malformed_toggle_body_is_rejected() {
    let harness = Harness::start(TOKEN).await;

    let (status, body) = harness
        .send(
            reqwest::Method::POST,
            "/cameras/7/toggle",
            Some(json!({"current_status": "bogus"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(harness.upstream.lock().unwrap().updates.is_empty());

    let (_, view) = harness.get("/view").await;
    assert_eq!(row(&view, 7)["status"], "Active");
}

#[tokio::test]
async fn test_toggle_unknown_camera() {
    let harness = Harness::start(TOKEN).await;
    let (status, _) = harness.send(reqwest::Method::POST, "/cameras/404/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(harness.upstream.lock().unwrap().updates.is_empty());
}

#[tokio::test]
async fn test_rejected_token_shows_failed_load() {
    let harness = Harness::start("wrong-token").await;

    let (_, view) = harness.get("/view").await;
    assert_eq!(view["load_status"]["state"], "failed");
    assert_eq!(view["notice"]["kind"], "load_failed");
    assert_eq!(view["page"]["range_label"], "0-0 of 0");

    let (status, _) = harness.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_reload_failure_keeps_loaded_cameras() {
    let harness = Harness::start(TOKEN).await;
    harness.upstream.lock().unwrap().fail_fetch = true;

    let (status, _) = harness.send(reqwest::Method::POST, "/cameras/reload", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, view) = harness.get("/view").await;
    assert_eq!(view["load_status"]["state"], "failed");
    assert_eq!(view["page"]["total"], 25);

    harness.upstream.lock().unwrap().fail_fetch = false;
    let (status, view) = harness.send(reqwest::Method::POST, "/cameras/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["load_status"]["state"], "loaded");
    assert!(view["notice"].is_null());
}

#[tokio::test]
async fn test_stateless_camera_query() {
    let harness = Harness::start(TOKEN).await;

    let (status, page) = harness.get("/cameras?status=inactive&per_page=20&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 12);
    assert_eq!(page["page"], 1);
    assert_eq!(page["range_label"], "1-12 of 12");

    let (status, _) = harness.get("/cameras?per_page=50").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stateless query leaves the view alone
    let (_, view) = harness.get("/view").await;
    assert_eq!(view["state"]["status"], "All");
}
