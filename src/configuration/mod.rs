pub mod constants;

use serde_derive::Deserialize;

use self::constants::defaults;

/// Collection-time tuning. Controls which tags mark a test as critical,
/// plus the libraries addressable without a prefix and the environment
/// variables copied into the report's system section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub critical_tag_patterns: Vec<String>,
    pub implicit_libraries: Vec<String>,
    pub environment_variables: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            critical_tag_patterns: to_strings(defaults::CRITICAL_TAG_PATTERNS),
            implicit_libraries: to_strings(defaults::IMPLICIT_LIBRARIES),
            environment_variables: Vec::new(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
