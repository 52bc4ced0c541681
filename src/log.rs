// src/log.rs
use std::{fs::{self, OpenOptions}, io, path::Path, sync::Mutex};

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

/// `RUST_LOG` wins; otherwise `default`.
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Lines carry time since start, e.g.
/// `0.532114s DEBUG rune_scrape::scrape::resolve: Override hit base=…`.
///
/// - `Some(path)`: append everything from `debug` up to `path`, no colours.
/// - `None`: warnings and errors to stderr.
///
/// A second call is a no-op.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt().with_timer(Uptime::default());

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_env_filter(filter("debug"))
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder
            .with_env_filter(filter("warn"))
            .with_writer(io::stderr)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Subscriber already installed");
    }
    Ok(())
}
