use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::collector::MetricsCollector;
use crate::configuration::constants::report::{
    GENERATED_AT_FORMAT, METRICS_FILE_NAME, UNSERIALIZABLE_PLACEHOLDER,
};
use crate::configuration::Settings;
use crate::error::Error;
use crate::metrics::Metrics;
use crate::parser;

/// Writes aggregated metrics as a pretty-printed `metrics.json` into an
/// output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        ReportWriter { output_dir }
    }

    /// Creates the output directory if needed and writes the report.
    /// Returns the path of the written file.
    pub fn write(&self, metrics: &Metrics) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(METRICS_FILE_NAME);
        serde_json::to_writer_pretty(&File::create(&path)?, &to_document(metrics))?;
        info!("Metrics report written to {}", path.display());
        Ok(path)
    }

    /// Renders the report in memory.
    pub fn render(&self, metrics: &Metrics) -> Result<String, Error> {
        let rendered = serde_json::to_string_pretty(&to_document(metrics))?;
        Ok(rendered)
    }
}

/// Parses a result file, aggregates it and writes `metrics.json` into
/// `output_dir`. The aggregate is returned for further use.
pub fn generate(output_xml: &Path, output_dir: &Path, settings: Settings) -> Result<Metrics, Error> {
    let run = parser::parse_file(output_xml)?;
    let mut collector = MetricsCollector::new(settings);
    let metrics = collector.collect(&run.suite)?;
    ReportWriter::new(output_dir.to_path_buf()).write(&metrics)?;
    Ok(metrics)
}

/// Converts the aggregate into a JSON document section by section, so one
/// unserializable section degrades to a placeholder instead of losing the
/// whole report.
fn to_document(metrics: &Metrics) -> Value {
    let mut document = serde_json::Map::new();
    document.insert(
        "generated_at".to_owned(),
        Value::String(metrics.generated_at.format(GENERATED_AT_FORMAT).to_string()),
    );
    document.insert("total_tests".to_owned(), Value::from(metrics.total_tests));
    document.insert("passed_tests".to_owned(), Value::from(metrics.passed_tests));
    document.insert("failed_tests".to_owned(), Value::from(metrics.failed_tests));
    document.insert(
        "skipped_tests".to_owned(),
        Value::from(metrics.skipped_tests),
    );
    document.insert("duration".to_owned(), Value::from(metrics.duration));
    document.insert("suites".to_owned(), section("suites", &metrics.suites));
    document.insert("tags".to_owned(), section("tags", &metrics.tags));
    document.insert(
        "test_timeline".to_owned(),
        section("test_timeline", &metrics.test_timeline),
    );
    document.insert(
        "critical_failures".to_owned(),
        section("critical_failures", &metrics.critical_failures),
    );
    document.insert(
        "all_keywords".to_owned(),
        section("all_keywords", &metrics.all_keywords),
    );
    document.insert(
        "system_info".to_owned(),
        section("system_info", &metrics.system_info),
    );
    Value::Object(document)
}

fn section<T: Serialize>(name: &str, value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(value) => value,
        Err(err) => {
            error!("Cannot serialize report section '{}': {}", name, err);
            Value::String(format!("{}: {}", UNSERIALIZABLE_PLACEHOLDER, err))
        }
    }
}
