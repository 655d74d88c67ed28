//! Logger bootstrap for the binary and tests.
//!
//! Filters are read from `SPARRING_LOG` using `env_logger` directive syntax,
//! so `SPARRING_LOG=sparring::ai=debug` traces strikes without the engine.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding filter directives.
pub const FILTER_ENV: &str = "SPARRING_LOG";
/// Environment variable controlling colour output.
pub const STYLE_ENV: &str = "SPARRING_LOG_STYLE";

/// Directives used when [`FILTER_ENV`] is unset.
///
/// Dependencies stay at `warn`; this crate logs at `info`, or `debug` when
/// `verbose` is set.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let own = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("{},{}={own}", LevelFilter::Warn, env!("CARGO_CRATE_NAME"))
}

/// Installs the global logger.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init(verbose: bool) {
    let env = Env::new()
        .filter_or(FILTER_ENV, default_filter(verbose))
        .write_style(STYLE_ENV);
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis().format_target(true);

    if builder.try_init().is_err() {
        log::trace!("logger already installed");
    }
}
