pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
    pub const CARGO_PKG_VERSION: &'static str = env!("CARGO_PKG_VERSION");
}

pub mod defaults {
    pub const CRITICAL_TAG_PATTERNS: &'static [&'static str] = &["critical"];
    pub const IMPLICIT_LIBRARIES: &'static [&'static str] = &["BuiltIn"];
}

pub mod report {
    pub const METRICS_FILE_NAME: &'static str = "metrics.json";
    pub const GENERATED_AT_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
    pub const EVENT_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.3f";
    pub const UNSERIALIZABLE_PLACEHOLDER: &'static str = "<unserializable>";
}
