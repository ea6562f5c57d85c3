use chrono::{DateTime, Utc};
use serde::Serialize;

use worktime_core::timer::TimerRecord;

/// Uniform response envelope returned by every endpoint.
///
/// `message` is always present; the other fields are filled per endpoint and
/// omitted from the JSON body when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResponseResult>,
}

/// Payload carried by the envelope's `result` field: a single record or a
/// collection, depending on the endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseResult {
    One(Box<TimerRecord>),
    Many(Vec<TimerRecord>),
}

impl ApiResponse {
    /// Creates an envelope carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            employee_id: None,
            work_time: None,
            result: None,
        }
    }

    /// Echoes the employee id in the envelope.
    pub fn with_employee_id(mut self, employee_id: i32) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    /// Echoes the work time in the envelope.
    pub fn with_work_time(mut self, work_time: DateTime<Utc>) -> Self {
        self.work_time = Some(work_time);
        self
    }

    /// Carries a single record as the result.
    pub fn with_timer(mut self, timer: TimerRecord) -> Self {
        self.result = Some(ResponseResult::One(Box::new(timer)));
        self
    }

    /// Carries a collection of records as the result.
    pub fn with_timers(mut self, timers: Vec<TimerRecord>) -> Self {
        self.result = Some(ResponseResult::Many(timers));
        self
    }
}
