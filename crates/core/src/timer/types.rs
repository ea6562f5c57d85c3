use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partition key shared by every timer record.
///
/// All records live in this single logical partition; rows are addressed by
/// their row key alone. This concentrates the table into one partition, which
/// is a known hotspot caveat of the data layout.
pub const WORKTIME_PARTITION: &str = "WORKTIME";

/// A persisted work-time entry for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    /// Always [`WORKTIME_PARTITION`].
    pub partition_key: String,
    /// Unique identifier of the record within the partition.
    pub row_key: Uuid,
    pub employee_id: i32,
    /// Instant the entry refers to. Set to the creation time on insert,
    /// settable to an arbitrary value on update.
    pub work_time: DateTime<Utc>,
    /// Kind of time event (e.g. clock-in/clock-out). The enumeration is a
    /// caller-side contract and is not interpreted here.
    #[serde(rename = "type")]
    pub kind: i32,
    /// Reserved for a downstream consolidation process. Nothing in this
    /// service ever sets it to `true`.
    pub consolidated: bool,
}

impl TimerRecord {
    /// Creates a new record with a fresh row key, the current UTC instant as
    /// its work time, and `consolidated` cleared.
    pub fn new(employee_id: i32, kind: i32) -> Self {
        Self {
            partition_key: WORKTIME_PARTITION.to_string(),
            row_key: Uuid::new_v4(),
            employee_id,
            work_time: Utc::now(),
            kind,
            consolidated: false,
        }
    }

    /// Sets a specific row key for this record (useful for testing).
    pub fn with_row_key(mut self, row_key: Uuid) -> Self {
        self.row_key = row_key;
        self
    }

    /// Sets a specific work time for this record (useful for testing).
    pub fn with_work_time(mut self, work_time: DateTime<Utc>) -> Self {
        self.work_time = work_time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_invariants() {
        let record = TimerRecord::new(42, 1);

        assert_eq!(record.partition_key, WORKTIME_PARTITION);
        assert_eq!(record.employee_id, 42);
        assert_eq!(record.kind, 1);
        assert!(!record.consolidated);
    }

    #[test]
    fn test_new_records_have_distinct_row_keys() {
        let a = TimerRecord::new(1, 0);
        let b = TimerRecord::new(1, 0);

        assert_ne!(a.row_key, b.row_key);
    }

    #[test]
    fn test_wire_field_names() {
        let record = TimerRecord::new(7, 2);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["partitionKey"], "WORKTIME");
        assert_eq!(json["employeeId"], 7);
        assert_eq!(json["type"], 2);
        assert_eq!(json["consolidated"], false);
        assert!(json["rowKey"].is_string());
        assert!(json["workTime"].is_string());
    }

    #[test]
    fn test_round_trip() {
        let record = TimerRecord::new(13, 1);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TimerRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }
}
