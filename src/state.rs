//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::EmployeeService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{CachedEmployeeRepository, PgEmployeeStore};

/// Employee service wired to the PostgreSQL store behind the cache.
pub type AppEmployeeService = EmployeeService<CachedEmployeeRepository<PgEmployeeStore>>;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<AppEmployeeService>,
    pub store: Arc<PgEmployeeStore>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires store, cache, repository and service together.
    ///
    /// `cache_ttl` applies to every entry the repository writes.
    pub fn new(pool: Arc<PgPool>, cache: Arc<dyn CacheService>, cache_ttl: Duration) -> Self {
        let store = Arc::new(PgEmployeeStore::new(pool));
        let repository = Arc::new(CachedEmployeeRepository::new(
            store.clone(),
            cache.clone(),
            cache_ttl,
        ));

        Self {
            employee_service: Arc::new(EmployeeService::new(repository)),
            store,
            cache,
        }
    }
}
