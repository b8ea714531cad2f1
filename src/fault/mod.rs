//! The error-escalation shim: a bridge between the two error idioms Rust code ends up with,
//! returned [`Result`]s and unwinding panics.
//!
//! Errors flow into a [`Fault`], which can be raised ([`raise`], [`escalate`], [`Escalate`]),
//! caught back into a slot ([`recover_into`]), stored ([`record`]), logged ([`log_fault`]) or used
//! to end the process ([`halt_on_fault`]).
//!
//! # Never Dropped
//! Every path here upholds one rule: a fault is raised, stored or logged, at least once. When two
//! faults compete for the same slot, the first one keeps it and the second is logged as shadowed,
//! naming both.
//!
//! # Reporters
//! Logging goes through a [`Reporter`] and its [`DiagnosticSink`]. The free functions in this
//! module use [`Reporter::global`]; construct a `Reporter` directly to send diagnostics somewhere
//! specific.

mod escalate;
mod fault;
mod reporter;
mod sink;
mod tests;

use std::fmt::Display;

pub use escalate::*;
pub use fault::*;
pub use reporter::*;
pub use sink::*;

/// [`Reporter::log_fault`] on the global reporter.
pub fn log_fault<T, E: Display>(result: Result<T, E>) -> Option<T> {
    Reporter::global().log_fault(result)
}

/// [`Reporter::record`] on the global reporter.
pub fn record<E, F>(slot: &mut Option<Fault>, errable: F)
where
    E: Into<Fault>,
    F: FnOnce() -> Result<(), E>,
{
    Reporter::global().record(slot, errable)
}

/// [`Reporter::clean_up`] on the global reporter.
pub fn clean_up<T, E, C, F>(outcome: &mut Result<T, E>, cleanup: F)
where
    E: From<C> + Display,
    C: Display,
    F: FnOnce() -> Result<(), C>,
{
    Reporter::global().clean_up(outcome, cleanup)
}

/// [`Reporter::recover_into`] on the global reporter.
pub fn recover_into<R, F: FnOnce() -> R>(slot: &mut Option<Fault>, body: F) -> Option<R> {
    Reporter::global().recover_into(slot, body)
}

/// [`Reporter::escalate_from`] on the global reporter.
pub fn escalate_from<E, F>(errable: F)
where
    E: Into<Fault>,
    F: FnOnce() -> Result<(), E>,
{
    Reporter::global().escalate_from(errable)
}

/// [`Reporter::halt_on_fault`] on the global reporter.
pub fn halt_on_fault<T, E: Display>(result: Result<T, E>) -> T {
    Reporter::global().halt_on_fault(result)
}
