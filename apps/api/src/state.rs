use std::sync::Arc;

use crate::analysis::engine::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup; read-only, so shared without locking.
    pub analyzer: Arc<Analyzer>,
}
