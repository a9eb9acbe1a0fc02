//! Logger setup for clockQuiz binaries.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once.
///
/// `filter` uses the `env_logger` syntax ("info", "clockcore=debug").
/// When it is `None`, `RUST_LOG` is honoured and `info` is the fallback.
/// Later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
