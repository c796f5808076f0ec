//! Client for the remote camera inventory API

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
    models::{
        camera::{CameraListEnvelope, UpdateStatusRequest},
        Camera, CameraId, CameraStatus,
    },
};

/// Source of camera records and sink for status changes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CameraSource: Send + Sync {
    /// Fetch and normalize the full camera list
    async fn fetch_cameras(&self) -> AppResult<Vec<Camera>>;

    /// Set a camera's status on the remote side
    async fn update_status(&self, id: &CameraId, status: CameraStatus) -> AppResult<()>;
}

/// `CameraSource` over HTTP with bearer authentication
#[derive(Clone)]
pub struct HttpCameraSource {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpCameraSource {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(AppError::UpstreamRejected(status.as_u16()))
        }
    }
}

#[async_trait]
impl CameraSource for HttpCameraSource {
    async fn fetch_cameras(&self) -> AppResult<Vec<Camera>> {
        let response = self
            .client
            .get(self.url("/fetch/cameras"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let envelope: CameraListEnvelope = Self::check(response)?.json().await?;
        Ok(envelope.into_cameras())
    }

    async fn update_status(&self, id: &CameraId, status: CameraStatus) -> AppResult<()> {
        let response = self
            .client
            .post(self.url("/update/camera/status"))
            .bearer_auth(&self.token)
            .json(&UpdateStatusRequest { id, status })
            .send()
            .await?;

        Self::check(response)?;
        Ok(())
    }
}
