use std::collections::BTreeMap;
use std::env;

use serde_derive::Serialize;

/// Snapshot of the machine a report was generated on. Captured once per
/// traversal, right after the root suite closes.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SystemInfo {
    pub os: String,
    pub architecture: String,
    pub cpu_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_memory_mb: Option<u64>,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub environment: BTreeMap<String, String>,
}

impl SystemInfo {
    /// Captures the current host. `selected_vars` names the environment
    /// variables to copy into the snapshot; unset ones are left out.
    pub fn capture(selected_vars: &[String]) -> Self {
        let mut environment = BTreeMap::new();
        for name in selected_vars {
            if let Ok(value) = env::var(name) {
                environment.insert(name.clone(), value);
            }
        }
        SystemInfo {
            os: env::consts::OS.to_owned(),
            architecture: env::consts::ARCH.to_owned(),
            cpu_count: num_cpus::get(),
            total_memory_mb: total_memory_mb(),
            hostname: hostname::get()
                .ok()
                .and_then(|name| name.into_string().ok())
                .unwrap_or_else(|| "unknown".to_owned()),
            username: env::var("USER").or_else(|_| env::var("USERNAME")).ok(),
            environment,
        }
    }
}

#[cfg(target_os = "linux")]
fn total_memory_mb() -> Option<u64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            let kilobytes: u64 = rest.trim().trim_end_matches("kB").trim().parse().ok()?;
            return Some(kilobytes / 1024);
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
fn total_memory_mb() -> Option<u64> {
    None
}
