use std::io::Write;

use env_logger::{Builder, Target};
use log::{debug, LevelFilter};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "PHASH_LOG";

/// Initialize the logger with timestamp, log level, and module path.
/// Logs go to stderr only so stdout carries nothing but the hash.
pub fn init_logger(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] [{}:{}] - {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;

    debug!("Logging initialised at {}", level);
    Ok(())
}
