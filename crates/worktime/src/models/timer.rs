use chrono::{DateTime, Utc};
use serde::Deserialize;

use worktime_core::timer::TimerRecord;

/// Request payload for creating a timer (POST /timers).
///
/// `employee_id` is the only required field; a missing `type` defaults to `0`
/// to keep the wire contract of the system this replaces.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimer {
    pub employee_id: Option<i32>,
    #[serde(default, rename = "type")]
    pub kind: i32,
}

impl CreateTimer {
    /// Converts the request into a new TimerRecord.
    /// Returns None if the employee identification is missing.
    pub fn into_record(self) -> Option<TimerRecord> {
        let employee_id = self.employee_id?;
        Some(TimerRecord::new(employee_id, self.kind))
    }
}

/// Request payload for updating a timer (PUT /timers/{rowKey}).
///
/// Both fields are required; the handler validates their presence and reports
/// a field-specific message for each.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimer {
    pub work_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
}
