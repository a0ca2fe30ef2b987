//! High-level service layer over the schedule registry.
//!
//! These functions work with any [`ScheduleRepository`] implementation and
//! hold the logic that must not depend on the storage backend, such as the
//! optional strict validation.
//!
//! # Usage
//!
//! ```no_run
//! use rail_scheduler::db::{services, repositories::LocalRepository};
//! use rail_scheduler::models::{TrainSchedule, ValidationMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let schedule = TrainSchedule::new("T1", "Lyon", "Paris", 100, 95);
//!     services::add_schedule(&repo, schedule, ValidationMode::Permissive).await?;
//!
//!     let overloaded = services::list_overloaded(&repo).await?;
//!     println!("{} trains need expansion", overloaded.len());
//!     Ok(())
//! }
//! ```

use tracing::{debug, warn};

use super::repository::{ErrorContext, RepositoryError, RepositoryResult, ScheduleRepository};
use crate::models::{TrainSchedule, ValidationMode};

/// Check if the repository is healthy.
pub async fn health_check<R: ScheduleRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Validate a schedule according to `mode` and append it to the registry.
///
/// # Returns
/// * `Ok(())` once the schedule is stored
/// * `Err(RepositoryError::ValidationError)` if strict mode rejects it
pub async fn add_schedule<R: ScheduleRepository + ?Sized>(
    repo: &R,
    schedule: TrainSchedule,
    mode: ValidationMode,
) -> RepositoryResult<()> {
    if let Err(violations) = mode.check(&schedule) {
        let details = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        warn!(
            train_id = %schedule.train_id,
            %details,
            "Rejecting schedule in strict validation mode"
        );
        return Err(RepositoryError::validation_with_context(
            details,
            ErrorContext::new("store_schedule")
                .with_entity("train_schedule")
                .with_entity_id(&schedule.train_id)
                .with_details(format!("{} violation(s)", violations.len())),
        ));
    }

    debug!(
        train_id = %schedule.train_id,
        capacity = schedule.capacity,
        booked_seats = schedule.booked_seats,
        "Storing train schedule"
    );
    repo.store_schedule(schedule).await
}

/// All schedules in insertion order.
pub async fn list_schedules<R: ScheduleRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<TrainSchedule>> {
    let schedules = repo.list_schedules().await?;
    debug!(count = schedules.len(), "Listed train schedules");
    Ok(schedules)
}

/// Schedules at or above the overload threshold, in insertion order.
pub async fn list_overloaded<R: ScheduleRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<TrainSchedule>> {
    let overloaded = repo.list_overloaded().await?;
    debug!(count = overloaded.len(), "Listed overloaded train schedules");
    Ok(overloaded)
}

/// Number of stored schedules.
pub async fn count_schedules<R: ScheduleRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    repo.count_schedules().await
}
