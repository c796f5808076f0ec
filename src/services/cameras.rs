//! Camera service: loading the inventory and toggling camera status

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    inventory,
    models::{CameraId, CameraPage, CameraStatus, LoadStatus, ViewState},
    repository::{CameraStore, Outcome},
};

use super::upstream::CameraSource;

#[derive(Clone)]
pub struct CameraService {
    source: Arc<dyn CameraSource>,
    store: CameraStore,
}

impl CameraService {
    pub fn new(source: Arc<dyn CameraSource>, store: CameraStore) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &CameraStore {
        &self.store
    }

    /// Fetch the full list and replace the in-memory collection.
    ///
    /// A failure leaves the collection untouched and marks the load as failed.
    /// When a newer load was started meanwhile, the result (success or
    /// failure) is discarded and `Outcome::Superseded` is returned.
    pub async fn load(&self) -> AppResult<Outcome> {
        let ticket = self.store.begin_load().await;

        match self.source.fetch_cameras().await {
            Ok(cameras) => {
                let count = cameras.len();
                let outcome = self.store.complete_load(ticket, cameras).await;
                match outcome {
                    Outcome::Applied => tracing::info!("Loaded {} cameras", count),
                    Outcome::Superseded => tracing::debug!("Discarding superseded camera list"),
                }
                Ok(outcome)
            }
            Err(e) => match self.store.fail_load(ticket, e.to_string()).await {
                Outcome::Applied => {
                    tracing::error!("Failed to fetch cameras: {}", e);
                    Err(e)
                }
                Outcome::Superseded => {
                    tracing::debug!("Discarding superseded camera fetch failure: {}", e);
                    Ok(Outcome::Superseded)
                }
            },
        }
    }

    /// Flip a camera's status remotely, then patch the local record.
    ///
    /// `current` is the caller's last known status; the new status is its
    /// opposite. Nothing changes locally unless the remote update succeeds.
    pub async fn toggle_status(&self, id: &CameraId, current: CameraStatus) -> AppResult<CameraStatus> {
        let (ticket, _) = self.store.begin_toggle(id).await?;
        let new_status = current.toggled();

        match self.source.update_status(id, new_status).await {
            Ok(()) => {
                match self.store.complete_toggle(ticket, new_status).await {
                    Outcome::Applied => tracing::info!("Camera {} is now {}", id, new_status),
                    Outcome::Superseded => {
                        tracing::debug!("Discarding superseded status update of camera {}", id)
                    }
                }
                Ok(new_status)
            }
            Err(e) => {
                self.store.abandon_toggle(ticket).await;
                tracing::error!("Failed to update status of camera {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Toggle using the status currently held for the camera
    pub async fn toggle(&self, id: &CameraId) -> AppResult<CameraStatus> {
        let current = self
            .store
            .get(id)
            .await
            .map(|c| c.status)
            .ok_or_else(|| AppError::NotFound(format!("Camera {} not found", id)))?;
        self.toggle_status(id, current).await
    }

    /// Derive a page for an arbitrary view state without touching the view
    pub async fn page(&self, state: &ViewState) -> CameraPage {
        inventory::derive_page(&self.store.snapshot().await, state)
    }

    pub async fn load_status(&self) -> LoadStatus {
        self.store.load_status().await
    }
}
