use std::sync::Arc;

use crate::{config::ServerConfig, storage::UploadStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UploadStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: Arc::new(UploadStore::new(config.storage_dir.clone())),
            max_body_bytes: config.max_body_bytes,
        }
    }
}
