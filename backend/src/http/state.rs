//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repositories::LocalRepository;
use crate::db::repository::ScheduleRepository;
use crate::models::ValidationMode;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The schedule registry
    pub repository: Arc<dyn ScheduleRepository>,
    /// How submitted schedules are checked
    pub validation: ValidationMode,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ScheduleRepository>, validation: ValidationMode) -> Self {
        Self {
            repository,
            validation,
        }
    }

    /// State backed by a fresh, empty in-memory registry.
    pub fn in_memory(validation: ValidationMode) -> Self {
        Self::new(Arc::new(LocalRepository::new()), validation)
    }
}
