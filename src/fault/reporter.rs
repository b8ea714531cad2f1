use std::backtrace::Backtrace;
use std::fmt::{self, Debug, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::sync::{Arc, OnceLock};
use std::thread;

use super::{Diagnostic, DiagnosticSink, Fault, TracingSink};

static GLOBAL: OnceLock<Reporter> = OnceLock::new();

/// The error-escalation shim. A `Reporter` decides what happens to a fault that can't simply be
/// returned: store it into a slot, log it, or halt. Whatever it decides, the fault is never
/// dropped without a trace in the [`DiagnosticSink`].
///
/// # Slots
/// A slot is an `Option<Fault>` owned by the caller. Only the first fault to arrive is kept. A
/// later, different fault is logged as [`Shadowed`](Diagnostic::Shadowed) and the slot is left
/// alone.
///
/// # Global Reporter
/// Helpers that have no reporter passed to them, including the free functions in
/// [`fault`](crate::fault) and [`Drop`] impls, use [`Reporter::global`]. It logs via
/// [`tracing`] unless a different reporter was [`install`](Reporter::install)ed first.
#[derive(Clone)]
pub struct Reporter {
    sink: Arc<dyn DiagnosticSink>,
}

impl Reporter {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Reporter {
        Reporter { sink }
    }

    pub fn tracing() -> Reporter {
        Reporter::new(Arc::new(TracingSink))
    }

    pub fn global() -> &'static Reporter {
        GLOBAL.get_or_init(Reporter::tracing)
    }

    /// Makes this the process-wide reporter. Fails, handing the reporter back, if one has already
    /// been installed or the default has already been used.
    pub fn install(self) -> Result<(), Reporter> {
        GLOBAL.set(self)
    }

    pub fn emit(&self, diagnostic: &Diagnostic<'_>) {
        self.sink.emit(diagnostic);
    }

    /// Logs the error, if any, and carries on.
    pub fn log_fault<T, E: Display>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.emit(&Diagnostic::Reported(&error));
                None
            },
        }
    }

    /// Stores `fault` into `slot` unless the slot already holds a different fault, in which case
    /// the new one is logged as shadowed.
    pub fn store(&self, slot: &mut Option<Fault>, fault: Fault) {
        match slot.as_ref() {
            Some(kept) if kept.is(&fault) => {},
            Some(kept) => self.emit(&Diagnostic::Shadowed {
                kept,
                shadowed: &fault,
            }),
            None => *slot = Some(fault),
        }
    }

    /// Runs `errable` and [`store`](Reporter::store)s its error, if any. Never raises.
    pub fn record<E, F>(&self, slot: &mut Option<Fault>, errable: F)
    where
        E: Into<Fault>,
        F: FnOnce() -> Result<(), E>,
    {
        if let Err(error) = errable() {
            self.store(slot, error.into());
        }
    }

    /// The typed counterpart to [`record`](Reporter::record), for cleanup that runs after a
    /// fallible operation. A cleanup error turns an `Ok` outcome into an `Err`, but never replaces
    /// an error that is already there.
    pub fn clean_up<T, E, C, F>(&self, outcome: &mut Result<T, E>, cleanup: F)
    where
        E: From<C> + Display,
        C: Display,
        F: FnOnce() -> Result<(), C>,
    {
        if let Err(shadowed) = cleanup() {
            match outcome {
                Ok(_) => *outcome = Err(E::from(shadowed)),
                Err(kept) => self.emit(&Diagnostic::Shadowed {
                    kept: &*kept,
                    shadowed: &shadowed,
                }),
            }
        }
    }

    /// Runs `body`, intercepting any fault that unwinds out of it. The fault is logged along with
    /// its call stack, then [`store`](Reporter::store)d into `slot`, and `None` is returned.
    ///
    /// `body` is treated as unwind safe: after an interception the caller is expected to inspect
    /// `slot` rather than trust any state `body` was part way through changing.
    pub fn recover_into<R, F: FnOnce() -> R>(&self, slot: &mut Option<Fault>, body: F) -> Option<R> {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => Some(value),
            Err(payload) => {
                let fault = Fault::from_panic(payload);
                match fault.trace() {
                    Some(trace) => self.emit(&Diagnostic::Recovered {
                        fault: &fault,
                        trace,
                    }),
                    None => self.emit(&Diagnostic::Recovered {
                        fault: &fault,
                        trace: &Backtrace::force_capture(),
                    }),
                }
                self.store(slot, fault);
                None
            },
        }
    }

    /// Runs `errable` and raises its error, e.g. to fold a `close` into escalation style.
    ///
    /// If this thread is already unwinding, raising again would abort the process, so the error is
    /// logged as shadowed by the fault in flight instead.
    pub fn escalate_from<E, F>(&self, errable: F)
    where
        E: Into<Fault>,
        F: FnOnce() -> Result<(), E>,
    {
        if let Err(error) = errable() {
            let fault: Fault = error.into();
            if thread::panicking() {
                self.emit(&Diagnostic::Shadowed {
                    kept: &"fault already unwinding",
                    shadowed: &fault,
                });
            } else {
                super::raise(fault)
            }
        }
    }

    /// Logs the error, if any, and exits the process with status 1. Unlike
    /// [`raise`](super::raise), this can't be intercepted.
    pub fn halt_on_fault<T, E: Display>(&self, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.emit(&Diagnostic::Fatal(&error));
                process::exit(1)
            },
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::tracing()
    }
}

impl Debug for Reporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
