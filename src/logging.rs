// File: src/logging.rs
//! Logger bootstrap for binaries. Library code only uses the `log` macros.
use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

/// Installs a terminal logger at `level`.
///
/// A second call leaves the first logger in place and still returns `Ok`.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    if TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        log::debug!("Logger already initialised, keeping existing one");
    }
    Ok(())
}
