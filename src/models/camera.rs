//! Camera model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::enums::CameraStatus;

/// Upstream-assigned identifier, kept in the shape it was received
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CameraId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for CameraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraId::Number(n) => write!(f, "{}", n),
            CameraId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CameraId {
    fn from(n: i64) -> Self {
        CameraId::Number(n)
    }
}

impl From<&str> for CameraId {
    fn from(s: &str) -> Self {
        CameraId::Text(s.to_string())
    }
}

/// Camera record as shown in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Camera {
    #[schema(value_type = String)]
    pub id: CameraId,
    pub name: String,
    /// Site tag, used as a filter facet
    pub location: String,
    pub status: CameraStatus,
    pub ip_address: String,
    pub model: String,
    pub resolution: String,
}

/// Camera record as sent by the remote API
#[derive(Debug, Clone, Deserialize)]
pub struct RawCamera {
    pub id: CameraId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resolution: String,
}

impl From<RawCamera> for Camera {
    fn from(raw: RawCamera) -> Self {
        let status = CameraStatus::from_raw(raw.status.as_ref().and_then(Value::as_str));
        Self {
            id: raw.id,
            name: raw.name,
            location: raw.location,
            status,
            ip_address: raw.ip_address,
            model: raw.model,
            resolution: raw.resolution,
        }
    }
}

/// `GET /fetch/cameras` response body: `{ data: { cameras: [...] } }`
#[derive(Debug, Default, Deserialize)]
pub struct CameraListEnvelope {
    #[serde(default)]
    pub data: Option<CameraListData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CameraListData {
    #[serde(default)]
    pub cameras: Option<Vec<RawCamera>>,
}

impl CameraListEnvelope {
    /// Normalized cameras in upstream order; missing sections mean no cameras
    pub fn into_cameras(self) -> Vec<Camera> {
        self.data
            .and_then(|d| d.cameras)
            .unwrap_or_default()
            .into_iter()
            .map(Camera::from)
            .collect()
    }
}

/// `POST /update/camera/status` request body
#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest<'a> {
    pub id: &'a CameraId,
    pub status: CameraStatus,
}

/// Display strings may arrive as null or as numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
