pub mod keyword;
pub mod serialize;

pub use self::keyword::KeywordStats;

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde_derive::Serialize;

use crate::result::{Message, Status, StepKind};
use crate::system::SystemInfo;

/// The aggregated outcome of one execution-result traversal. Serialized
/// field names are a compatibility contract with the dashboard templates
/// that consume `metrics.json`, so they never change.
#[derive(Debug, Serialize, Clone)]
pub struct Metrics {
    #[serde(with = "self::serialize::timestamp")]
    pub generated_at: NaiveDateTime,
    pub total_tests: u64,
    pub passed_tests: u64,
    pub failed_tests: u64,
    pub skipped_tests: u64,
    pub duration: f64,
    pub suites: Vec<SuiteMetrics>,
    pub tags: BTreeMap<String, TagStats>,
    pub test_timeline: Vec<TimelineEntry>,
    pub critical_failures: Vec<CriticalFailure>,
    pub all_keywords: BTreeMap<String, KeywordStats>,
    pub system_info: SystemInfo,
}

/// Rollup for one suite. `total`/`passed`/`failed`/`skipped` cover the
/// suite's own tests plus every descendant suite; `keywords` is scoped to
/// this suite's subtree.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SuiteMetrics {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub status: Status,
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub duration: f64,
    pub setup_status: Status,
    pub teardown_status: Status,
    pub suites: Vec<SuiteMetrics>,
    pub tests: Vec<TestMetrics>,
    pub keywords: BTreeMap<String, KeywordStats>,
}

impl SuiteMetrics {
    /// Counts one directly-owned test. Tests without a verdict land in the
    /// skipped bucket, so `total` stays the sum of the three buckets.
    pub fn record_test(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Skip | Status::NotRun => self.skipped += 1,
        }
    }

    /// Folds a finished child suite into this rollup. The child's counters
    /// already include its own descendants.
    pub fn absorb(&mut self, child: &SuiteMetrics) {
        self.total += child.total;
        self.passed += child.passed;
        self.failed += child.failed;
        self.skipped += child.skipped;
    }
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct TestMetrics {
    pub name: String,
    pub status: Status,
    pub duration: f64,
    pub message: String,
    pub tags: Vec<String>,
    #[serde(with = "self::serialize::opt_timestamp")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(with = "self::serialize::opt_timestamp")]
    pub end_time: Option<NaiveDateTime>,
    pub steps: Vec<StepMetrics>,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct StepMetrics {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub kind: StepKind,
    pub status: Status,
    pub duration: f64,
    pub arguments: Vec<String>,
    pub assigned: Vec<String>,
    pub steps: Vec<StepMetrics>,
    pub messages: Vec<Message>,
}

/// Per-tag counters, updated exactly once per visited test per carried tag.
/// The verdict buckets follow the same policy as the suite rollups.
#[derive(Debug, Serialize, Clone, Default)]
pub struct TagStats {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl TagStats {
    pub fn record(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Skip | Status::NotRun => self.skipped += 1,
        }
    }
}

/// One row of the chronological test timeline, appended in visitation
/// order.
#[derive(Debug, Serialize, Clone)]
pub struct TimelineEntry {
    pub name: String,
    pub suite: String,
    pub status: Status,
    #[serde(with = "self::serialize::opt_timestamp")]
    pub start: Option<NaiveDateTime>,
    #[serde(with = "self::serialize::opt_timestamp")]
    pub end: Option<NaiveDateTime>,
    pub duration: f64,
}

/// A failed test that carried the critical marker.
#[derive(Debug, Serialize, Clone)]
pub struct CriticalFailure {
    pub test_name: String,
    pub suite_name: String,
    pub message: String,
    #[serde(with = "self::serialize::opt_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}
