//! A fixed-interval polling loop.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

use crate::fault::{Diagnostic, Reporter};

/// Calls `f` forever on this thread, sleeping `interval` after each call.
///
/// Before each call `message` is logged, unless it is empty. An error from `f` is logged and the
/// loop carries on; there is no backoff and no way to stop other than unwinding out of `f`.
pub fn loop_do<E, F>(interval: Duration, message: &str, mut f: F) -> !
where
    E: Display,
    F: FnMut() -> Result<(), E>,
{
    let reporter = Reporter::global();
    loop {
        tick(reporter, message, &mut f);
        thread::sleep(interval);
    }
}

fn tick<E, F>(reporter: &Reporter, message: &str, f: &mut F)
where
    E: Display,
    F: FnMut() -> Result<(), E>,
{
    if !message.is_empty() {
        reporter.emit(&Diagnostic::Note(message));
    }
    reporter.log_fault(f());
}
