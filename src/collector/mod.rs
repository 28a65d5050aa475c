use std::collections::BTreeMap;
use std::mem;

use chrono::Local;
use regex::Regex;

use crate::configuration::Settings;
use crate::error::Error;
use crate::metrics::{
    CriticalFailure, KeywordStats, Metrics, StepMetrics, SuiteMetrics, TagStats, TestMetrics,
    TimelineEntry,
};
use crate::result::{Message, ResultVisitor, Step, Suite, Test};
use crate::system::SystemInfo;

/// Folds one execution result tree into a [`Metrics`] value.
///
/// The collector is a [`ResultVisitor`] with explicit suite and step stacks,
/// so arbitrarily deep trees never grow its own call stack. State is
/// instance-local; a collector aggregates one tree at a time and must be
/// reset between runs (`collect` does that on entry).
pub struct MetricsCollector {
    settings: Settings,
    critical_patterns: Vec<Regex>,
    suite_stack: Vec<SuiteMetrics>,
    current_test: Option<TestMetrics>,
    step_stack: Vec<StepMetrics>,
    ignored_step_depth: usize,
    tags: BTreeMap<String, TagStats>,
    timeline: Vec<TimelineEntry>,
    critical_failures: Vec<CriticalFailure>,
    all_keywords: BTreeMap<String, KeywordStats>,
    finished: Option<Metrics>,
}

impl MetricsCollector {
    pub fn new(settings: Settings) -> Self {
        let critical_patterns = settings
            .critical_tag_patterns
            .iter()
            .filter_map(|pattern| {
                match Regex::new(translate_tag_pattern(pattern).as_str()) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        warn!("Ignoring unusable critical tag pattern '{}': {}", pattern, err);
                        None
                    }
                }
            })
            .collect();
        MetricsCollector {
            settings,
            critical_patterns,
            suite_stack: Vec::new(),
            current_test: None,
            step_stack: Vec::new(),
            ignored_step_depth: 0,
            tags: BTreeMap::new(),
            timeline: Vec::new(),
            critical_failures: Vec::new(),
            all_keywords: BTreeMap::new(),
            finished: None,
        }
    }

    /// Walks the given tree and hands the aggregate over to the caller.
    pub fn collect(&mut self, suite: &Suite) -> Result<Metrics, Error> {
        self.reset();
        suite.visit(self);
        self.take_metrics()
    }

    /// Clears every stack and accumulator so the collector can be driven
    /// over another tree.
    pub fn reset(&mut self) {
        self.suite_stack.clear();
        self.current_test = None;
        self.step_stack.clear();
        self.ignored_step_depth = 0;
        self.tags.clear();
        self.timeline.clear();
        self.critical_failures.clear();
        self.all_keywords.clear();
        self.finished = None;
    }

    /// Takes the finished aggregate out of the collector. Fails when no
    /// root suite was ever walked to completion.
    pub fn take_metrics(&mut self) -> Result<Metrics, Error> {
        self.finished.take().ok_or(Error::EmptyTraversal)
    }

    fn current_suite_name(&self) -> String {
        self.suite_stack
            .last()
            .map(|frame| frame.name.clone())
            .unwrap_or_default()
    }

    fn is_critical(&self, test: &Test) -> bool {
        if let Some(explicit) = test.critical {
            return explicit;
        }
        test.tags.iter().any(|tag| {
            self.critical_patterns
                .iter()
                .any(|pattern| pattern.is_match(tag))
        })
    }

    fn keyword_key(&self, step: &Step) -> String {
        match &step.library {
            Some(library)
                if !self
                    .settings
                    .implicit_libraries
                    .iter()
                    .any(|implicit| implicit == library) =>
            {
                format!("{}.{}", library, step.name)
            }
            _ => step.name.clone(),
        }
    }

    fn finish_run(&mut self, suite: &Suite, root: SuiteMetrics) {
        info!(
            "Aggregated {} tests from suite '{}'",
            root.total, root.name
        );
        let mut all_keywords = mem::take(&mut self.all_keywords);
        for stats in all_keywords.values_mut() {
            stats.finalize();
        }
        self.finished = Some(Metrics {
            generated_at: Local::now().naive_local(),
            total_tests: root.total,
            passed_tests: root.passed,
            failed_tests: root.failed,
            skipped_tests: root.skipped,
            duration: suite.duration,
            suites: vec![root],
            tags: mem::take(&mut self.tags),
            test_timeline: mem::take(&mut self.timeline),
            critical_failures: mem::take(&mut self.critical_failures),
            all_keywords,
            system_info: SystemInfo::capture(&self.settings.environment_variables),
        });
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        MetricsCollector::new(Settings::default())
    }
}

impl ResultVisitor for MetricsCollector {
    fn start_suite(&mut self, suite: &Suite) {
        let frame = SuiteMetrics {
            name: suite.name.clone(),
            source: suite.source.clone(),
            status: suite.status,
            duration: suite.duration,
            setup_status: suite
                .setup
                .as_ref()
                .map(|step| step.status)
                .unwrap_or_default(),
            teardown_status: suite
                .teardown
                .as_ref()
                .map(|step| step.status)
                .unwrap_or_default(),
            ..Default::default()
        };
        self.suite_stack.push(frame);
    }

    fn end_suite(&mut self, suite: &Suite) {
        let mut frame = match self.suite_stack.pop() {
            Some(frame) => frame,
            None => {
                warn!(
                    "Suite '{}' closed without a matching open, ignoring",
                    suite.name
                );
                return;
            }
        };
        for stats in frame.keywords.values_mut() {
            stats.finalize();
        }
        match self.suite_stack.last_mut() {
            Some(parent) => {
                parent.absorb(&frame);
                parent.suites.push(frame);
            }
            None => self.finish_run(suite, frame),
        }
    }

    fn start_test(&mut self, test: &Test) {
        if self.suite_stack.is_empty() {
            warn!("Test '{}' started outside of any suite, ignoring", test.name);
            return;
        }
        if let Some(open) = &self.current_test {
            warn!(
                "Test '{}' started while '{}' was still open, replacing it",
                test.name, open.name
            );
        }
        self.current_test = Some(TestMetrics {
            name: test.name.clone(),
            status: test.status,
            duration: test.duration,
            message: test.message.clone(),
            tags: test.tags.clone(),
            start_time: test.start_time,
            end_time: test.end_time,
            steps: Vec::new(),
        });
    }

    fn end_test(&mut self, test: &Test) {
        let mut record = match self.current_test.take() {
            Some(record) => record,
            None => {
                warn!("Test '{}' closed without a matching open, ignoring", test.name);
                return;
            }
        };
        if !self.step_stack.is_empty() {
            debug!(
                "Test '{}' closed with {} unterminated steps",
                test.name,
                self.step_stack.len()
            );
            while let Some(orphan) = self.step_stack.pop() {
                match self.step_stack.last_mut() {
                    Some(parent) => parent.steps.push(orphan),
                    None => record.steps.push(orphan),
                }
            }
        }

        let suite_name = self.current_suite_name();
        self.timeline.push(TimelineEntry {
            name: record.name.clone(),
            suite: suite_name.clone(),
            status: record.status,
            start: record.start_time,
            end: record.end_time,
            duration: record.duration,
        });
        // One update per distinct tag, repeated entries count once.
        let mut seen_tags: Vec<&str> = Vec::new();
        for tag in &record.tags {
            if seen_tags.contains(&tag.as_str()) {
                continue;
            }
            seen_tags.push(tag.as_str());
            self.tags
                .entry(tag.clone())
                .or_default()
                .record(record.status);
        }
        if record.status.is_fail() && self.is_critical(test) {
            debug!("Recording critical failure of '{}'", record.name);
            self.critical_failures.push(CriticalFailure {
                test_name: record.name.clone(),
                suite_name,
                message: record.message.clone(),
                timestamp: record.end_time.or(record.start_time),
            });
        }
        match self.suite_stack.last_mut() {
            Some(frame) => {
                frame.record_test(record.status);
                frame.tests.push(record);
            }
            None => warn!("Test '{}' closed outside of any suite, dropping", test.name),
        }
    }

    fn start_step(&mut self, step: &Step) {
        // Suite-level fixtures run outside of any test and stay out of the
        // aggregation; the depth counter keeps their nested closings paired.
        if self.current_test.is_none() {
            self.ignored_step_depth += 1;
            debug!("Step '{}' outside of any test, not aggregated", step.name);
            return;
        }
        self.step_stack.push(StepMetrics {
            name: step.name.clone(),
            library: step.library.clone(),
            kind: step.kind,
            status: step.status,
            duration: step.duration,
            arguments: step.arguments.clone(),
            assigned: step.assigned.clone(),
            steps: Vec::new(),
            messages: Vec::new(),
        });
    }

    fn end_step(&mut self, step: &Step) {
        if self.ignored_step_depth > 0 {
            self.ignored_step_depth -= 1;
            return;
        }
        let record = match self.step_stack.pop() {
            Some(record) => record,
            None => {
                warn!("Step '{}' closed without a matching open, ignoring", step.name);
                return;
            }
        };
        if step.kind.is_aggregable() && (step.status.is_pass() || step.status.is_fail()) {
            let key = self.keyword_key(step);
            for frame in self.suite_stack.iter_mut() {
                frame
                    .keywords
                    .entry(key.clone())
                    .or_default()
                    .record(step.status, step.duration);
            }
            self.all_keywords
                .entry(key)
                .or_default()
                .record(step.status, step.duration);
        }
        match self.step_stack.last_mut() {
            Some(parent) => parent.steps.push(record),
            None => match self.current_test.as_mut() {
                Some(test) => test.steps.push(record),
                None => warn!("Step '{}' closed outside of any test, dropping", step.name),
            },
        }
    }

    fn log_message(&mut self, message: &Message) {
        if self.ignored_step_depth > 0 {
            return;
        }
        match self.step_stack.last_mut() {
            Some(step) => step.messages.push(message.clone()),
            None => debug!("Message outside of any step dropped: {}", message.text),
        }
    }
}

/// Translates a simple tag pattern (`*` and `?` wildcards) into an anchored
/// case-insensitive regex.
fn translate_tag_pattern(pattern: &str) -> String {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push_str("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push_str(regex::escape(other.to_string().as_str()).as_str()),
        }
    }
    translated.push('$');
    translated
}
