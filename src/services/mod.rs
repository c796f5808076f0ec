//! Business logic services

pub mod cameras;
pub mod upstream;
pub mod view;

use std::sync::Arc;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

use upstream::{CameraSource, HttpCameraSource};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub cameras: cameras::CameraService,
    pub view: view::ViewService,
}

impl Services {
    /// Create all services talking to the configured upstream API
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        let source = HttpCameraSource::new(&config.upstream)?;
        Ok(Self::with_source(repository, Arc::new(source), config))
    }

    /// Create all services over an arbitrary camera source
    pub fn with_source(repository: Repository, source: Arc<dyn CameraSource>, config: &AppConfig) -> Self {
        let cameras = cameras::CameraService::new(source, repository.cameras);
        Self {
            view: view::ViewService::new(cameras.clone(), config.view.default_per_page),
            cameras,
        }
    }
}
