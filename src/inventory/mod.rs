//! Filter and pagination engine
//!
//! Pure derivation from the loaded camera collection and a [`ViewState`] to
//! the page of rows the view displays. Nothing here performs I/O or keeps
//! state between calls.

pub mod filter;
pub mod pagination;

pub use filter::{location_facets, CameraFilter};
pub use pagination::Pagination;

use crate::models::{Camera, CameraPage, ViewState};

/// Derive the visible page for `state` from the full collection (load order).
///
/// The requested page is clamped into `1..=max(page_count, 1)`; the page
/// actually used is reported in [`CameraPage::page`].
pub fn derive_page(cameras: &[Camera], state: &ViewState) -> CameraPage {
    let filter = CameraFilter::from_state(state);
    let matching: Vec<&Camera> = cameras.iter().filter(|c| filter.matches(c)).collect();

    let pagination = Pagination::new(matching.len(), state.per_page.get(), state.page);
    let rows = matching[pagination.slice()]
        .iter()
        .map(|c| (*c).clone())
        .collect();

    CameraPage {
        rows,
        total: pagination.total,
        page: pagination.page,
        page_count: pagination.page_count,
        first_index: pagination.first_index,
        last_index: pagination.last_index,
        range_label: pagination.range_label(),
        controls: pagination.controls(),
        locations: location_facets(cameras),
    }
}
