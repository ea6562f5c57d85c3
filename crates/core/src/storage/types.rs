use crate::timer::TimerRecord;

/// One segment of a partition scan.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerPage {
    pub timers: Vec<TimerRecord>,
    /// Continuation token for the next segment (the last row key returned by
    /// the store), or `None` when the scan is exhausted.
    pub next: Option<String>,
}

impl TimerPage {
    /// Creates the final segment of a scan, with no continuation token.
    pub fn final_segment(timers: Vec<TimerRecord>) -> Self {
        Self { timers, next: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_segment_has_no_continuation() {
        let page = TimerPage::final_segment(vec![TimerRecord::new(1, 0)]);

        assert_eq!(page.timers.len(), 1);
        assert!(page.next.is_none());
    }
}
