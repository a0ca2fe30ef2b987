//! Repository contract for the schedule registry.
//!
//! The registry is append-only: schedules can be stored and listed, never
//! updated or removed.

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::TrainSchedule;

/// Repository trait for schedule registry operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check if the repository is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Append a schedule to the end of the registry.
    ///
    /// No duplicate detection is performed; the same `train_id` may be stored
    /// any number of times.
    async fn store_schedule(&self, schedule: TrainSchedule) -> RepositoryResult<()>;

    /// All schedules in insertion order.
    async fn list_schedules(&self) -> RepositoryResult<Vec<TrainSchedule>>;

    /// Number of schedules stored so far.
    async fn count_schedules(&self) -> RepositoryResult<usize>;

    /// Schedules that need expansion, in insertion order.
    ///
    /// Computed on every call from the current contents.
    async fn list_overloaded(&self) -> RepositoryResult<Vec<TrainSchedule>> {
        let schedules = self.list_schedules().await?;
        Ok(schedules
            .into_iter()
            .filter(TrainSchedule::needs_expansion)
            .collect())
    }
}
