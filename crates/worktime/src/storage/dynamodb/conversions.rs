//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! [`TimerRecord`]. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use worktime_core::storage::RepositoryError;
use worktime_core::timer::TimerRecord;

use super::keys;

/// Convert a TimerRecord to a DynamoDB item.
pub fn timer_to_item(timer: &TimerRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert("PK".to_string(), AttributeValue::S(keys::timer_pk()));
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::timer_sk(timer.row_key)),
    );

    // Data
    item.insert(
        "employeeId".to_string(),
        AttributeValue::N(timer.employee_id.to_string()),
    );
    item.insert(
        "workTime".to_string(),
        AttributeValue::S(timer.work_time.to_rfc3339()),
    );
    item.insert("type".to_string(), AttributeValue::N(timer.kind.to_string()));
    item.insert(
        "consolidated".to_string(),
        AttributeValue::Bool(timer.consolidated),
    );

    item
}

/// Convert a DynamoDB item to a TimerRecord.
pub fn item_to_timer(
    item: &HashMap<String, AttributeValue>,
) -> Result<TimerRecord, RepositoryError> {
    Ok(TimerRecord {
        partition_key: get_string(item, "PK")?,
        row_key: get_uuid(item, "SK")?,
        employee_id: get_int(item, "employeeId")?,
        work_time: get_datetime(item, "workTime")?,
        kind: get_int(item, "type")?,
        consolidated: get_bool(item, "consolidated")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required integer attribute.
fn get_int(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?
        .parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
