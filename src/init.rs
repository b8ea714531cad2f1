//! Process-wide logging setup for binaries using this crate.
//!
//! The library itself only ever emits [`tracing`] events, through
//! [`TracingSink`](crate::fault::TracingSink). Something still has to print them, which is what
//! [`init`] sets up.

use tracing_subscriber::EnvFilter;

use crate::fault::{self, Fault};

#[derive(Debug, Clone)]
pub struct InitOptions {
    /// The filter directive used when `RUST_LOG` is unset or invalid, e.g. `"info"` or
    /// `"faultkit=debug,warn"`.
    pub default_filter: String,
    /// Whether each event includes the file and line it came from.
    pub with_location: bool,
    /// Whether to also [`install_panic_hook`](fault::install_panic_hook).
    pub panic_hook: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitOptions {
            default_filter: String::from("info"),
            with_location: false,
            panic_hook: false,
        }
    }
}

/// Installs a formatting subscriber as the global default, filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already set, in which case the panic hook isn't installed
/// either.
pub fn init(options: &InitOptions) -> Result<(), Fault> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(options.with_location)
        .with_line_number(options.with_location)
        .try_init()
        .map_err(Fault::from_boxed)?;

    if options.panic_hook {
        fault::install_panic_hook();
    }
    Ok(())
}
