//! Tracing initialisation for buildlight binaries.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored
//! since the global subscriber can only be set once per process.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// Log lines go to stderr so stdout stays free for status output.
///
/// * `json`: emit newline-delimited JSON log lines instead of plain text.
/// * `level`: verbosity for buildlight's own crates when `RUST_LOG` is not
///   set. Dependencies such as reqwest and hyper stay at `warn`.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    if json {
        registry.with(layer.json()).try_init().ok();
    } else {
        registry.with(layer).try_init().ok();
    }
}

/// Filter directives used when `RUST_LOG` is unset. The `buildlight` target
/// prefix covers the binary and the `buildlight_*` library crates.
fn default_filter(level: Level) -> String {
    format!("warn,buildlight={}", level.as_str().to_ascii_lowercase())
}
