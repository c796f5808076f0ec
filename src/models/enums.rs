//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// CameraStatus
// ---------------------------------------------------------------------------

/// Normalized camera status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CameraStatus {
    Active,
    Inactive,
}

impl CameraStatus {
    /// Normalize a raw upstream status. Only `"active"` (any case) is Active.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("active") => CameraStatus::Active,
            _ => CameraStatus::Inactive,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CameraStatus::Active => CameraStatus::Inactive,
            CameraStatus::Inactive => CameraStatus::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraStatus::Active => "Active",
            CameraStatus::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Status facet of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn matches(self, status: CameraStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == CameraStatus::Active,
            StatusFilter::Inactive => status == CameraStatus::Inactive,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(AppError::Validation(format!("Unknown status filter '{}'", other))),
        }
    }
}

// ---------------------------------------------------------------------------
// LocationFilter
// ---------------------------------------------------------------------------

/// Location facet of the view. On the wire `"All"` means no restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    #[default]
    All,
    Only(String),
}

impl LocationFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(wanted) => wanted == location,
        }
    }
}

impl From<String> for LocationFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL_LABEL {
            LocationFilter::All
        } else {
            LocationFilter::Only(s)
        }
    }
}

impl From<LocationFilter> for String {
    fn from(f: LocationFilter) -> Self {
        match f {
            LocationFilter::All => LocationFilter::ALL_LABEL.to_string(),
            LocationFilter::Only(s) => s,
        }
    }
}

// ---------------------------------------------------------------------------
// PageSize
// ---------------------------------------------------------------------------

/// Rows per page; only 10 and 20 are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
}

impl PageSize {
    pub const OPTIONS: [PageSize; 2] = [PageSize::Ten, PageSize::Twenty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = AppError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            other => Err(AppError::Validation(format!(
                "Page size must be 10 or 20, got {}",
                other
            ))),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(p: PageSize) -> Self {
        p.get() as u32
    }
}

// ---------------------------------------------------------------------------
// NavAction
// ---------------------------------------------------------------------------

/// Pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
}
