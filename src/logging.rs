use std::path::PathBuf;

use log::LevelFilter;

use crate::configuration::constants::cargo_env;

/// Installs the global dispatcher: timestamped stdout output plus an
/// optional log file chain. Embedding applications that already own a
/// logger can skip this entirely.
pub fn init(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?);
    }
    dispatcher.apply()?;
    info!(
        "{} {} logging at level {}",
        cargo_env::CARGO_PKG_NAME,
        cargo_env::CARGO_PKG_VERSION,
        level
    );
    Ok(())
}
