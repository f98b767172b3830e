//! Logger initialization for binaries built on this crate.
//!
//! The geometry core itself never logs; it is a pure value library. Binaries
//! call [`init_logging`] once, early in `main`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend. Idempotent; calls after the
/// first are ignored.
///
/// Filter precedence: the explicit `filter` argument (env_logger syntax,
/// e.g. `"debug"` or `"coordspace_geom=trace"`), then the `RUST_LOG`
/// environment variable, then warn level so stdout stays clean by default.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
