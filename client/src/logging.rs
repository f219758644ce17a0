//! Log setup. The terminal belongs to the game, so records go to a file.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ClientError;

pub const LOG_FILE: &str = "pong.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() -> Result<PathBuf, ClientError> {
    let path = log_path();
    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    install_panic_hook();

    Ok(path)
}

/// Log panics, then hand them to the hook that was installed before
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        previous(info);
    }));
}
