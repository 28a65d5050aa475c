use derivative::*;
use serde_derive::Serialize;

use crate::result::Status;

/// Timing aggregate for one keyword name.
///
/// `min_duration` starts at infinity so the first recorded sample always
/// wins the comparison; `finalize` clamps it back to zero for aggregates
/// that never saw a sample and fills in the derived fields.
#[derive(Debug, Serialize, Clone, Derivative)]
#[derivative(Default)]
pub struct KeywordStats {
    pub count: u64,
    pub passed: u64,
    pub failed: u64,
    #[derivative(Default(value = "f64::INFINITY"))]
    pub min_duration: f64,
    pub max_duration: f64,
    pub total_duration: f64,
    pub avg_duration: f64,
    pub success_rate: f64,
}

impl KeywordStats {
    /// Folds one executed keyword into the aggregate. Only passed and
    /// failed executions count, so `count` stays the sum of the two.
    pub fn record(&mut self, status: Status, duration: f64) {
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            _ => return,
        }
        self.count += 1;
        self.total_duration += duration;
        if duration < self.min_duration {
            self.min_duration = duration;
        }
        if duration > self.max_duration {
            self.max_duration = duration;
        }
    }

    /// Computes `avg_duration` and `success_rate` from the recorded
    /// samples. Derived fields are recomputed from scratch, so calling
    /// this more than once does not change the outcome.
    pub fn finalize(&mut self) {
        if self.count == 0 {
            self.min_duration = 0.0;
            self.avg_duration = 0.0;
            self.success_rate = 0.0;
        } else {
            self.avg_duration = self.total_duration / self.count as f64;
            self.success_rate = self.passed as f64 / self.count as f64 * 100.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregate_finalizes_to_zeros() {
        let mut stats = KeywordStats::default();
        stats.finalize();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.min_duration, 0.0);
        assert_eq!(stats.max_duration, 0.0);
        assert_eq!(stats.avg_duration, 0.0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_recording_samples() {
        let mut stats = KeywordStats::default();
        stats.record(Status::Pass, 0.5);
        stats.record(Status::Fail, 1.5);
        stats.record(Status::Pass, 1.0);
        stats.finalize();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.count, stats.passed + stats.failed);
        assert_eq!(stats.min_duration, 0.5);
        assert_eq!(stats.max_duration, 1.5);
        assert_eq!(stats.total_duration, 3.0);
        assert_eq!(stats.avg_duration, 1.0);
        assert!((stats.success_rate - 66.666).abs() < 0.01);
        assert!(stats.min_duration <= stats.avg_duration);
        assert!(stats.avg_duration <= stats.max_duration);
    }

    #[test]
    fn test_skipped_executions_are_ignored() {
        let mut stats = KeywordStats::default();
        stats.record(Status::Skip, 2.0);
        stats.record(Status::NotRun, 2.0);
        stats.finalize();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_duration, 0.0);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut stats = KeywordStats::default();
        stats.record(Status::Pass, 2.0);
        stats.record(Status::Pass, 4.0);
        stats.finalize();
        let first = stats.clone();
        stats.finalize();
        assert_eq!(stats.avg_duration, first.avg_duration);
        assert_eq!(stats.success_rate, first.success_rate);
        assert_eq!(stats.min_duration, first.min_duration);
        assert_eq!(stats.success_rate, 100.0);
    }
}
