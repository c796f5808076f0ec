//! Row predicate and location facets

use indexmap::IndexSet;

use crate::models::{Camera, LocationFilter, StatusFilter, ViewState};

/// Predicate selecting the cameras visible under a view state.
///
/// All three clauses must hold: the name contains the search term (ignoring
/// case; an empty term matches everything), the status filter matches and the
/// location filter matches.
#[derive(Debug, Clone)]
pub struct CameraFilter<'a> {
    needle: String,
    status: StatusFilter,
    location: &'a LocationFilter,
}

impl<'a> CameraFilter<'a> {
    pub fn from_state(state: &'a ViewState) -> Self {
        Self {
            needle: state.search.to_lowercase(),
            status: state.status,
            location: &state.location,
        }
    }

    pub fn matches(&self, camera: &Camera) -> bool {
        self.matches_search(camera)
            && self.status.matches(camera.status)
            && self.location.matches(&camera.location)
    }

    fn matches_search(&self, camera: &Camera) -> bool {
        self.needle.is_empty() || camera.name.to_lowercase().contains(&self.needle)
    }
}

/// Distinct locations across `cameras`, in first-seen order
pub fn location_facets<'a>(cameras: impl IntoIterator<Item = &'a Camera>) -> Vec<String> {
    cameras
        .into_iter()
        .map(|c| c.location.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
