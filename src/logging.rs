use std::{env, fs::File, sync::Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SnakeError};

/// Path of the log file. Unset means no logging at all: the game owns the
/// terminal, so nothing may be written to stdout or stderr while it runs.
pub const LOG_PATH_VAR: &str = "SNAKE_LOG";
const DEFAULT_FILTER: &str = "snake_term=debug";

/// Installs the global subscriber when `SNAKE_LOG` is set. Returns whether
/// logging was enabled.
pub fn init() -> Result<bool> {
    let path = match env::var_os(LOG_PATH_VAR) {
        Some(path) => path,
        None => return Ok(false),
    };

    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| SnakeError::Logging(e.to_string()))?;

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter),
    )
    .map_err(|e| SnakeError::Logging(e.to_string()))?;

    Ok(true)
}
