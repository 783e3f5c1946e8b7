pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every request handler.
///
/// Built once at process start; the store lives exactly as long as the
/// process. Handlers read and copy task fields but never hold a mutable
/// reference into the store across requests.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}
