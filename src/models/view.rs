//! View state and rendered view models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    camera::{Camera, CameraId},
    enums::{LocationFilter, NavAction, PageSize, StatusFilter},
};

/// Filter and pagination state of the inventory view.
///
/// Values are immutable; every transition returns a new state. Changing a
/// filter or the page size always moves back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewState {
    pub search: String,
    pub status: StatusFilter,
    #[schema(value_type = String)]
    pub location: LocationFilter,
    /// 1-indexed
    pub page: usize,
    #[schema(value_type = u32)]
    pub per_page: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ViewState {
    pub fn new(per_page: PageSize) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            location: LocationFilter::All,
            page: 1,
            per_page,
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: StatusFilter) -> Self {
        Self {
            status,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_location(&self, location: LocationFilter) -> Self {
        Self {
            location,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, per_page: PageSize) -> Self {
        Self {
            per_page,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Apply a pagination control. Boundary moves are no-ops.
    pub fn navigate(&self, action: NavAction, page_count: usize) -> Self {
        let last = page_count.max(1);
        let page = match action {
            NavAction::First => 1,
            NavAction::Previous => self.page.saturating_sub(1).max(1),
            NavAction::Next => (self.page + 1).min(last),
            NavAction::Last => last,
        };
        self.with_page(page)
    }
}

/// Enabled state of the four pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

/// One derived page of the inventory
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CameraPage {
    pub rows: Vec<Camera>,
    /// Number of cameras matching the filters
    pub total: usize,
    /// Effective page after clamping
    pub page: usize,
    pub page_count: usize,
    /// Start of the page slice (0-based, inclusive)
    pub first_index: usize,
    /// End of the page slice (0-based, exclusive, may exceed `total`)
    pub last_index: usize,
    /// e.g. `21-25 of 25`, or `0-0 of 0`
    pub range_label: String,
    pub controls: PageControls,
    /// Distinct locations of the whole collection, first-seen order
    pub locations: Vec<String>,
}

/// Progress of the camera list load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    NotLoaded,
    Loading,
    Loaded { loaded_at: DateTime<Utc>, count: usize },
    Failed { message: String, at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    LoadFailed,
    ToggleFailed,
}

/// Non-blocking failure indicator shown above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[schema(value_type = Option<String>)]
    pub camera_id: Option<CameraId>,
    pub at: DateTime<Utc>,
}

/// Option lists for the view's selectors
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewOptions {
    pub statuses: Vec<StatusFilter>,
    /// `All` followed by the location facets
    pub locations: Vec<String>,
    pub page_sizes: Vec<u32>,
}

/// Everything needed to draw the inventory view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewResponse {
    pub state: ViewState,
    #[schema(value_type = Object)]
    pub load_status: LoadStatus,
    pub notice: Option<Notice>,
    pub page: CameraPage,
    pub options: ViewOptions,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSearchRequest {
    pub search: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: StatusFilter,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetLocationRequest {
    /// Location facet, or `All`
    #[schema(value_type = String)]
    pub location: LocationFilter,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPageSizeRequest {
    #[schema(value_type = u32)]
    pub per_page: PageSize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigateRequest {
    pub to: NavAction,
}
