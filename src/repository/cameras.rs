//! In-memory camera arena
//!
//! The collection is keyed by camera id and keeps load order. It is replaced
//! wholesale by a completed load and patched one record at a time by a
//! confirmed toggle. Every in-flight operation holds a ticket; a completion
//! whose ticket has been superseded is discarded.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Camera, CameraId, CameraStatus, LoadStatus},
};

/// Whether a completion was applied to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Superseded,
}

/// Handle of an in-flight load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Handle of an in-flight status update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTicket {
    pub id: CameraId,
    generation: u64,
}

struct StoreInner {
    cameras: IndexMap<CameraId, Camera>,
    status: LoadStatus,
    load_generation: u64,
    toggle_generation: u64,
    /// Newest toggle ticket issued per camera
    pending_toggles: HashMap<CameraId, u64>,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            cameras: IndexMap::new(),
            status: LoadStatus::NotLoaded,
            load_generation: 0,
            toggle_generation: 0,
            pending_toggles: HashMap::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct CameraStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl CameraStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cameras in load order
    pub async fn snapshot(&self) -> Vec<Camera> {
        self.inner.read().await.cameras.values().cloned().collect()
    }

    pub async fn load_status(&self) -> LoadStatus {
        self.inner.read().await.status.clone()
    }

    pub async fn get(&self, id: &CameraId) -> Option<Camera> {
        self.inner.read().await.cameras.get(id).cloned()
    }

    /// Find the id whose textual form is `raw` (ids arrive from URL paths)
    pub async fn resolve_id(&self, raw: &str) -> Option<CameraId> {
        self.inner
            .read()
            .await
            .cameras
            .keys()
            .find(|id| id.to_string() == raw)
            .cloned()
    }

    /// Start a load; any load started earlier becomes stale
    pub async fn begin_load(&self) -> LoadTicket {
        let mut inner = self.inner.write().await;
        inner.load_generation += 1;
        inner.status = LoadStatus::Loading;
        LoadTicket {
            generation: inner.load_generation,
        }
    }

    /// Replace the whole collection with a fresh load
    pub async fn complete_load(&self, ticket: LoadTicket, cameras: Vec<Camera>) -> Outcome {
        let mut inner = self.inner.write().await;
        if ticket.generation != inner.load_generation {
            return Outcome::Superseded;
        }

        let received = cameras.len();
        let cameras: IndexMap<CameraId, Camera> = cameras.into_iter().map(|c| (c.id.clone(), c)).collect();
        if cameras.len() != received {
            tracing::warn!(
                "Camera list contained {} duplicate id(s); later records win",
                received - cameras.len()
            );
        }

        inner.status = LoadStatus::Loaded {
            loaded_at: Utc::now(),
            count: cameras.len(),
        };
        inner.cameras = cameras;
        Outcome::Applied
    }

    /// Record a failed load. The previous collection, if any, is kept.
    pub async fn fail_load(&self, ticket: LoadTicket, message: String) -> Outcome {
        let mut inner = self.inner.write().await;
        if ticket.generation != inner.load_generation {
            return Outcome::Superseded;
        }
        inner.status = LoadStatus::Failed {
            message,
            at: Utc::now(),
        };
        Outcome::Applied
    }

    /// Start a status update of an existing camera; returns its current status
    pub async fn begin_toggle(&self, id: &CameraId) -> AppResult<(ToggleTicket, CameraStatus)> {
        let mut inner = self.inner.write().await;
        let status = inner
            .cameras
            .get(id)
            .map(|c| c.status)
            .ok_or_else(|| AppError::NotFound(format!("Camera {} not found", id)))?;

        inner.toggle_generation += 1;
        let generation = inner.toggle_generation;
        inner.pending_toggles.insert(id.clone(), generation);

        Ok((
            ToggleTicket {
                id: id.clone(),
                generation,
            },
            status,
        ))
    }

    /// Patch the ticket's camera with its confirmed status.
    ///
    /// Only that record changes. Superseded when a newer toggle of the same
    /// camera was started or the camera is gone after a reload.
    pub async fn complete_toggle(&self, ticket: ToggleTicket, status: CameraStatus) -> Outcome {
        let mut inner = self.inner.write().await;
        if !Self::release(&mut inner, &ticket) {
            return Outcome::Superseded;
        }
        match inner.cameras.get_mut(&ticket.id) {
            Some(camera) => {
                camera.status = status;
                Outcome::Applied
            }
            None => Outcome::Superseded,
        }
    }

    /// Drop a failed toggle's ticket without touching the collection
    pub async fn abandon_toggle(&self, ticket: ToggleTicket) {
        let mut inner = self.inner.write().await;
        Self::release(&mut inner, &ticket);
    }

    /// Clear the pending entry if `ticket` is still the newest for its camera
    fn release(inner: &mut StoreInner, ticket: &ToggleTicket) -> bool {
        match inner.pending_toggles.get(&ticket.id) {
            Some(&newest) if newest == ticket.generation => {
                inner.pending_toggles.remove(&ticket.id);
                true
            }
            _ => false,
        }
    }
}
