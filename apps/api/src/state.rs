use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::planning::catalog::CourseCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: GeminiClient,
    /// Pluggable course catalog backend. Default: HttpCourseCatalog.
    pub catalog: Arc<dyn CourseCatalog>,
    pub config: Config,
}
