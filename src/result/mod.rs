pub mod status;
pub mod visitor;

pub use self::status::Status;
pub use self::visitor::ResultVisitor;

use chrono::NaiveDateTime;
use serde_derive::Serialize;

/// One suite of an execution result, owning its child suites, its tests and
/// its optional fixture steps.
#[derive(Debug, Default, Clone)]
pub struct Suite {
    pub name: String,
    pub source: Option<String>,
    pub status: Status,
    pub setup: Option<Step>,
    pub teardown: Option<Step>,
    pub suites: Vec<Suite>,
    pub tests: Vec<Test>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration: f64,
}

/// A single executed test. Fixture steps are carried in `steps` and flagged
/// by their kind; `critical` is only set when the result file carries an
/// explicit criticality marker.
#[derive(Debug, Default, Clone)]
pub struct Test {
    pub name: String,
    pub status: Status,
    pub message: String,
    pub tags: Vec<String>,
    pub critical: Option<bool>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration: f64,
    pub steps: Vec<Step>,
}

/// A keyword call, fixture or control structure executed inside a test or
/// suite fixture.
#[derive(Debug, Default, Clone)]
pub struct Step {
    pub name: String,
    pub library: Option<String>,
    pub kind: StepKind,
    pub status: Status,
    pub duration: f64,
    pub arguments: Vec<String>,
    pub assigned: Vec<String>,
    pub steps: Vec<Step>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Keyword,
    Setup,
    Teardown,
    For,
    While,
    If,
    Try,
    Iteration,
    Branch,
    Control,
}

impl StepKind {
    /// Only real keyword calls and fixtures feed keyword statistics;
    /// control structures merely shape the tree.
    pub fn is_aggregable(&self) -> bool {
        match self {
            StepKind::Keyword | StepKind::Setup | StepKind::Teardown => true,
            _ => false,
        }
    }
}

impl Default for StepKind {
    fn default() -> Self {
        StepKind::Keyword
    }
}

/// A log line emitted while a step was running.
#[derive(Debug, Serialize, Default, Clone)]
pub struct Message {
    pub level: MessageLevel,
    #[serde(with = "crate::metrics::serialize::opt_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    pub text: String,
    pub html: bool,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fail,
    Skip,
}

impl MessageLevel {
    pub fn from_marker(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Some(MessageLevel::Trace),
            "DEBUG" => Some(MessageLevel::Debug),
            "INFO" => Some(MessageLevel::Info),
            "WARN" => Some(MessageLevel::Warn),
            "ERROR" => Some(MessageLevel::Error),
            "FAIL" => Some(MessageLevel::Fail),
            "SKIP" => Some(MessageLevel::Skip),
            _ => None,
        }
    }
}

impl Default for MessageLevel {
    fn default() -> Self {
        MessageLevel::Info
    }
}
