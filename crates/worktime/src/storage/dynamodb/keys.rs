//! DynamoDB key generation functions.
//!
//! Pure functions for generating the partition and row keys of the timers
//! table. All functions are sync and have no side effects.

use uuid::Uuid;

use worktime_core::timer::WORKTIME_PARTITION;

/// Generate the partition key for a timer.
///
/// Every record lives in the single `WORKTIME` partition.
pub fn timer_pk() -> String {
    WORKTIME_PARTITION.to_string()
}

/// Generate the row key for a timer.
///
/// Pattern: `<row_key>` (the record's UUID, no prefix).
pub fn timer_sk(row_key: Uuid) -> String {
    row_key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_pk_is_the_fixed_partition() {
        assert_eq!(timer_pk(), "WORKTIME");
    }

    #[test]
    fn test_timer_sk_is_the_bare_uuid() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        assert_eq!(timer_sk(id), "550e8400-e29b-41d4-a716-446655440001");
    }
}
