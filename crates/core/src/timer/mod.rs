mod types;

pub use types::{TimerRecord, WORKTIME_PARTITION};
