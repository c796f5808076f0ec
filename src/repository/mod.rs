//! Repository layer holding the in-memory camera collection

pub mod cameras;

pub use cameras::{CameraStore, LoadTicket, Outcome, ToggleTicket};

/// Main repository struct
#[derive(Clone, Default)]
pub struct Repository {
    pub cameras: CameraStore,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
