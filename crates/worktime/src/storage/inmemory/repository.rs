//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use worktime_core::storage::{RepositoryError, Result, TimerPage, TimerRepository};
use worktime_core::timer::TimerRecord;

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    timers: Arc<RwLock<HashMap<Uuid, TimerRecord>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            timers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TimerRepository for InMemoryRepository {
    async fn get_timer(&self, row_key: Uuid) -> Result<Option<TimerRecord>> {
        let timers = self.timers.read().await;
        Ok(timers.get(&row_key).cloned())
    }

    async fn insert_timer(&self, timer: &TimerRecord) -> Result<()> {
        let mut timers = self.timers.write().await;
        if timers.contains_key(&timer.row_key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Timer",
                id: timer.row_key.to_string(),
            });
        }
        timers.insert(timer.row_key, timer.clone());
        Ok(())
    }

    async fn replace_timer(&self, timer: &TimerRecord) -> Result<()> {
        let mut timers = self.timers.write().await;
        if !timers.contains_key(&timer.row_key) {
            return Err(RepositoryError::NotFound {
                entity_type: "Timer",
                id: timer.row_key.to_string(),
            });
        }
        timers.insert(timer.row_key, timer.clone());
        Ok(())
    }

    async fn delete_timer(&self, row_key: Uuid) -> Result<()> {
        let mut timers = self.timers.write().await;
        if timers.remove(&row_key).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Timer",
                id: row_key.to_string(),
            });
        }
        Ok(())
    }

    async fn scan_timers(&self, exclusive_start: Option<String>) -> Result<TimerPage> {
        let timers = self.timers.read().await;

        // Row-key order keeps continuation tokens stable across calls.
        let mut records: Vec<TimerRecord> = timers.values().cloned().collect();
        records.sort_by_key(|t| t.row_key.to_string());

        if let Some(token) = exclusive_start {
            records.retain(|t| t.row_key.to_string() > token);
        }

        Ok(TimerPage::final_segment(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = InMemoryRepository::new();
        let timer = TimerRecord::new(42, 1);

        repo.insert_timer(&timer).await.unwrap();

        let retrieved = repo.get_timer(timer.row_key).await.unwrap();
        assert_eq!(retrieved, Some(timer));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_timer(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_insert_existing_key_fails() {
        let repo = InMemoryRepository::new();
        let timer = TimerRecord::new(42, 1);

        repo.insert_timer(&timer).await.unwrap();

        let result = repo.insert_timer(&timer).await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_replace() {
        let repo = InMemoryRepository::new();
        let mut timer = TimerRecord::new(42, 1);

        repo.insert_timer(&timer).await.unwrap();

        timer.kind = 2;
        repo.replace_timer(&timer).await.unwrap();

        let retrieved = repo.get_timer(timer.row_key).await.unwrap().unwrap();
        assert_eq!(retrieved.kind, 2);
    }

    #[tokio::test]
    async fn test_replace_nonexistent() {
        let repo = InMemoryRepository::new();
        let timer = TimerRecord::new(42, 1);

        let result = repo.replace_timer(&timer).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let timer = TimerRecord::new(42, 1);

        repo.insert_timer(&timer).await.unwrap();
        repo.delete_timer(timer.row_key).await.unwrap();

        let retrieved = repo.get_timer(timer.row_key).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_timer(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_scan_returns_all_records() {
        let repo = InMemoryRepository::new();
        let a = TimerRecord::new(1, 0);
        let b = TimerRecord::new(2, 0);

        repo.insert_timer(&a).await.unwrap();
        repo.insert_timer(&b).await.unwrap();

        let page = repo.scan_timers(None).await.unwrap();
        assert_eq!(page.timers.len(), 2);
        assert!(page.next.is_none());
    }

    #[tokio::test]
    async fn test_scan_is_ordered_by_row_key() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.insert_timer(&TimerRecord::new(i, 0)).await.unwrap();
        }

        let page = repo.scan_timers(None).await.unwrap();
        let keys: Vec<String> = page.timers.iter().map(|t| t.row_key.to_string()).collect();
        let mut sorted = keys.clone();
        sorted.sort();

        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn test_scan_skips_past_continuation_token() {
        let repo = InMemoryRepository::new();
        for i in 0..4 {
            repo.insert_timer(&TimerRecord::new(i, 0)).await.unwrap();
        }

        let full = repo.scan_timers(None).await.unwrap();
        let token = full.timers[1].row_key.to_string();

        let rest = repo.scan_timers(Some(token)).await.unwrap();
        assert_eq!(rest.timers.len(), 2);
        assert_eq!(rest.timers[0].row_key, full.timers[2].row_key);
    }
}
