//! In-memory local repository implementation.
//!
//! This is the schedule registry: an ordered, append-only list that lives for
//! as long as the process does.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::models::TrainSchedule;

/// In-memory local repository.
///
/// Clones share the same underlying list. The lock is held only while
/// appending or copying out, never across an await point.
///
/// # Example
/// ```
/// use rail_scheduler::db::repositories::LocalRepository;
/// use rail_scheduler::db::ScheduleRepository;
/// use rail_scheduler::models::TrainSchedule;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = LocalRepository::new();
/// repo.store_schedule(TrainSchedule::new("T1", "A", "B", 100, 95)).await.unwrap();
///
/// let overloaded = repo.list_overloaded().await.unwrap();
/// assert_eq!(overloaded.len(), 1);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    schedules: Arc<RwLock<Vec<TrainSchedule>>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with schedules, kept in the given order.
    pub fn with_schedules(schedules: impl IntoIterator<Item = TrainSchedule>) -> Self {
        Self {
            schedules: Arc::new(RwLock::new(schedules.into_iter().collect())),
        }
    }

    /// Number of stored schedules.
    pub fn len(&self) -> usize {
        self.schedules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.read().is_empty()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn store_schedule(&self, schedule: TrainSchedule) -> RepositoryResult<()> {
        self.schedules.write().push(schedule);
        Ok(())
    }

    async fn list_schedules(&self) -> RepositoryResult<Vec<TrainSchedule>> {
        Ok(self.schedules.read().clone())
    }

    async fn count_schedules(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }

    async fn list_overloaded(&self) -> RepositoryResult<Vec<TrainSchedule>> {
        Ok(self
            .schedules
            .read()
            .iter()
            .filter(|s| s.needs_expansion())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(id: &str, capacity: i32, booked_seats: i32) -> TrainSchedule {
        TrainSchedule::new(id, "A", "B", capacity, booked_seats)
    }

    #[tokio::test]
    async fn test_new_repository_is_empty() {
        let repo = LocalRepository::new();
        assert!(repo.is_empty());
        assert!(repo.list_schedules().await.unwrap().is_empty());
        assert!(repo.list_overloaded().await.unwrap().is_empty());
        assert_eq!(repo.count_schedules().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_preserves_insertion_order() {
        let repo = LocalRepository::new();
        repo.store_schedule(train("T1", 100, 95)).await.unwrap();
        repo.store_schedule(train("T2", 100, 80)).await.unwrap();
        repo.store_schedule(train("T3", 50, 50)).await.unwrap();

        let ids: Vec<_> = repo
            .list_schedules()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.train_id)
            .collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
    }

    #[tokio::test]
    async fn test_overloaded_override_matches_default_filter() {
        let repo = LocalRepository::with_schedules(vec![
            train("T1", 100, 95),
            train("T2", 100, 80),
            train("T3", 0, 0),
            train("T4", 10, 9),
        ]);

        let expected: Vec<_> = repo
            .list_schedules()
            .await
            .unwrap()
            .into_iter()
            .filter(TrainSchedule::needs_expansion)
            .collect();
        assert_eq!(repo.list_overloaded().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let repo = LocalRepository::new();
        repo.store_schedule(train("T1", 100, 10)).await.unwrap();
        repo.store_schedule(train("T1", 100, 10)).await.unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = LocalRepository::new();
        let handle = repo.clone();
        handle.store_schedule(train("T1", 100, 95)).await.unwrap();
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_stores_are_all_recorded() {
        let repo = LocalRepository::new();
        let mut tasks = Vec::new();
        for i in 0..64 {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move {
                repo.store_schedule(train(&format!("T{}", i), 100, i))
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(repo.count_schedules().await.unwrap(), 64);
    }
}
