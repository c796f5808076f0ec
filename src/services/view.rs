//! Inventory view: current filter/page state and user intents

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    inventory,
    models::{
        view::{ViewOptions, ViewResponse},
        CameraId, CameraStatus, LocationFilter, NavAction, Notice, NoticeKind, PageSize,
        StatusFilter, ViewState,
    },
    repository::Outcome,
};

use super::cameras::CameraService;

struct ViewInner {
    state: ViewState,
    notice: Option<Notice>,
}

/// The single camera inventory view served by this process
#[derive(Clone)]
pub struct ViewService {
    cameras: CameraService,
    inner: Arc<Mutex<ViewInner>>,
}

impl ViewService {
    pub fn new(cameras: CameraService, per_page: PageSize) -> Self {
        Self {
            cameras,
            inner: Arc::new(Mutex::new(ViewInner {
                state: ViewState::new(per_page),
                notice: None,
            })),
        }
    }

    /// Derive the current page. A page past the end is clamped and stored.
    pub async fn render(&self) -> ViewResponse {
        let collection = self.cameras.store().snapshot().await;
        let load_status = self.cameras.load_status().await;

        let mut inner = self.inner.lock().await;
        let page = inventory::derive_page(&collection, &inner.state);
        if page.page != inner.state.page {
            inner.state = inner.state.with_page(page.page);
        }

        let options = ViewOptions {
            statuses: StatusFilter::OPTIONS.to_vec(),
            locations: std::iter::once(LocationFilter::ALL_LABEL.to_string())
                .chain(page.locations.iter().cloned())
                .collect(),
            page_sizes: PageSize::OPTIONS.iter().map(|&p| p.into()).collect(),
        };

        ViewResponse {
            state: inner.state.clone(),
            load_status,
            notice: inner.notice.clone(),
            page,
            options,
        }
    }

    pub async fn set_search(&self, search: String) -> ViewResponse {
        self.update(|state| state.with_search(search)).await;
        self.render().await
    }

    pub async fn set_status(&self, status: StatusFilter) -> ViewResponse {
        self.update(|state| state.with_status(status)).await;
        self.render().await
    }

    /// Select a location; must be `All` or one of the loaded locations
    pub async fn set_location(&self, location: LocationFilter) -> AppResult<ViewResponse> {
        if let LocationFilter::Only(wanted) = &location {
            let known = inventory::location_facets(&self.cameras.store().snapshot().await);
            if !known.iter().any(|l| l == wanted) {
                return Err(AppError::Validation(format!("Unknown location '{}'", wanted)));
            }
        }
        self.update(|state| state.with_location(location)).await;
        Ok(self.render().await)
    }

    pub async fn set_page_size(&self, per_page: PageSize) -> ViewResponse {
        self.update(|state| state.with_page_size(per_page)).await;
        self.render().await
    }

    pub async fn navigate(&self, action: NavAction) -> ViewResponse {
        let collection = self.cameras.store().snapshot().await;
        {
            let mut inner = self.inner.lock().await;
            let page_count = inventory::derive_page(&collection, &inner.state).page_count;
            inner.state = inner.state.navigate(action, page_count);
        }
        self.render().await
    }

    pub async fn dismiss_notice(&self) -> ViewResponse {
        self.inner.lock().await.notice = None;
        self.render().await
    }

    /// Re-fetch the camera list; a failure is kept as a notice unless a newer
    /// reload has superseded it
    pub async fn reload(&self) -> AppResult<ViewResponse> {
        match self.cameras.load().await {
            Ok(Outcome::Applied) => {
                self.clear_notice(NoticeKind::LoadFailed).await;
                Ok(self.render().await)
            }
            // A newer load owns the notice.
            Ok(Outcome::Superseded) => Ok(self.render().await),
            Err(e) => {
                self.raise(NoticeKind::LoadFailed, format!("Could not load cameras: {}", e), None)
                    .await;
                Err(e)
            }
        }
    }

    /// Toggle a camera from its last known status (or the stored one)
    pub async fn toggle(&self, id: &CameraId, current: Option<CameraStatus>) -> AppResult<ViewResponse> {
        let result = match current {
            Some(current) => self.cameras.toggle_status(id, current).await,
            None => self.cameras.toggle(id).await,
        };

        match result {
            Ok(_) => Ok(self.render().await),
            Err(e) if e.is_upstream() => {
                self.raise(
                    NoticeKind::ToggleFailed,
                    format!("Could not update camera {}: {}", id, e),
                    Some(id.clone()),
                )
                .await;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    async fn update(&self, transition: impl FnOnce(&ViewState) -> ViewState) {
        let mut inner = self.inner.lock().await;
        inner.state = transition(&inner.state);
    }

    async fn raise(&self, kind: NoticeKind, message: String, camera_id: Option<CameraId>) {
        self.inner.lock().await.notice = Some(Notice {
            kind,
            message,
            camera_id,
            at: Utc::now(),
        });
    }

    async fn clear_notice(&self, kind: NoticeKind) {
        let mut inner = self.inner.lock().await;
        if inner.notice.as_ref().is_some_and(|n| n.kind == kind) {
            inner.notice = None;
        }
    }
}
