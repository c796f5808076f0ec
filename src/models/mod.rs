//! Data models for the camera inventory

pub mod camera;
pub mod enums;
pub mod view;

// Re-export commonly used types
pub use camera::{Camera, CameraId};
pub use enums::{CameraStatus, LocationFilter, NavAction, PageSize, StatusFilter};
pub use view::{CameraPage, LoadStatus, Notice, NoticeKind, ViewState};
