use std::sync::Arc;

use crate::contact::relay::ContactRelay;
use crate::projects::catalog::ProjectCatalog;
use crate::projects::views::ViewCounter;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only or internally synchronized.
#[derive(Clone)]
pub struct AppState {
    pub relay: ContactRelay,
    pub projects: Arc<ProjectCatalog>,
    /// Redis in production; in-memory when REDIS_URL is unset.
    pub views: Arc<dyn ViewCounter>,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(
        contact: crate::config::ContactConfig,
        mailer: Arc<dyn crate::mailer::MailTransport>,
    ) -> Self {
        Self {
            relay: ContactRelay::new(contact, mailer),
            projects: Arc::new(ProjectCatalog::default()),
            views: Arc::new(crate::projects::views::MemoryViewCounter::default()),
        }
    }
}
