use core::str::FromStr;
use std::fmt;

use serde_derive::Serialize;

use crate::error::Error;

/// Outcome marker carried by every suite, test and step of an execution
/// result. `NOT RUN` covers skipped fixtures and control branches that the
/// framework never entered.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "SKIP")]
    Skip,
    #[serde(rename = "NOT RUN")]
    NotRun,
}

impl Status {
    pub fn is_pass(&self) -> bool {
        *self == Status::Pass
    }

    pub fn is_fail(&self) -> bool {
        *self == Status::Fail
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Skip => "SKIP",
            Status::NotRun => "NOT RUN",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotRun
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Older result files spell the last marker with an underscore.
        match value.trim().to_ascii_uppercase().as_str() {
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            "SKIP" => Ok(Status::Skip),
            "NOT RUN" | "NOT_RUN" => Ok(Status::NotRun),
            other => Err(Error::Parse(format!("unknown status marker '{}'", other))),
        }
    }
}
