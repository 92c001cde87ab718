use sift_core::SearchProvider;
use std::sync::Arc;

pub struct AppState {
    pub provider: Arc<dyn SearchProvider>,
}
