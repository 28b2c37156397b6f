use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup; the store handle is reused by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub config: Arc<Config>,
}
