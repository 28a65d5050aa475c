use chrono::NaiveDateTime;

/// Timestamp layout used by Robot Framework in `output.xml`,
/// e.g. `20230216 21:12:06.473`.
pub const TIMESTAMP_FORMAT: &'static str = "%Y%m%d %H:%M:%S%.f";

/// ISO-like layout written by newer framework versions.
const ISO_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a result-file timestamp, accepting both the classic and the ISO
/// layout. Empty values and the `N/A` marker yield `None`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }
    match NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_TIMESTAMP_FORMAT))
    {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            debug!("Cannot parse timestamp '{}': {}", trimmed, err);
            None
        }
    }
}

/// Wall time between two optional timestamps in seconds; `0` whenever one
/// of the endpoints is missing.
pub fn elapsed_seconds(start: &Option<NaiveDateTime>, end: &Option<NaiveDateTime>) -> f64 {
    match (start, end) {
        (Some(start), Some(end)) => {
            end.signed_duration_since(*start).num_milliseconds() as f64 / 1000.0
        }
        _ => 0.0,
    }
}
