//! Aggregated execution metrics for Robot Framework result files: parses
//! `output.xml` into a suite tree and folds it into the `metrics.json`
//! document dashboards consume.

// #![deny(unused_imports)]
//#![deny(missing_docs)]

#[macro_use]
extern crate log;

pub mod collector;
pub mod configuration;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod parser;
pub mod report;
pub mod result;
pub mod system;
pub mod time;

pub use crate::collector::MetricsCollector;
pub use crate::configuration::Settings;
pub use crate::error::Error;
pub use crate::metrics::Metrics;
pub use crate::report::{generate, ReportWriter};
pub use crate::result::ResultVisitor;
