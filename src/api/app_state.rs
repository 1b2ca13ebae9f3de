use crate::observability::AppMetrics;
use crate::services::ArticleResolver;
use std::sync::Arc;

/// Application state shared by the article handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolver turning article keys into pages or redirects
    pub resolver: Arc<dyn ArticleResolver>,
    /// Counters updated per resolution
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("resolver", &"Arc<dyn ArticleResolver>")
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(resolver: Box<dyn ArticleResolver>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            resolver: Arc::from(resolver),
            metrics,
        }
    }
}
