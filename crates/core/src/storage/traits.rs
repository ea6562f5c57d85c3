use async_trait::async_trait;
use uuid::Uuid;

use crate::timer::TimerRecord;

use super::{Result, TimerPage};

/// Repository for timer operations.
///
/// The store is addressed by (partition key, row key); every record lives in
/// the fixed `WORKTIME` partition, so operations take the row key alone.
#[async_trait]
pub trait TimerRepository: Send + Sync {
    /// Gets a timer by its row key.
    async fn get_timer(&self, row_key: Uuid) -> Result<Option<TimerRecord>>;

    /// Inserts a new timer.
    async fn insert_timer(&self, timer: &TimerRecord) -> Result<()>;

    /// Replaces an existing timer unconditionally (match-any semantics; no
    /// version token is checked, so concurrent writers are last-write-wins).
    async fn replace_timer(&self, timer: &TimerRecord) -> Result<()>;

    /// Deletes a timer by its row key.
    async fn delete_timer(&self, row_key: Uuid) -> Result<()>;

    /// Scans one segment of the partition, starting after the given
    /// continuation token.
    async fn scan_timers(&self, exclusive_start: Option<String>) -> Result<TimerPage>;
}
