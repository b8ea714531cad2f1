use std::backtrace::Backtrace;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Mutex, PoisonError};

use super::Fault;

/// A single diagnostic event emitted by a [`Reporter`](super::Reporter).
pub enum Diagnostic<'a> {
    /// An error passed to [`log_fault`](super::Reporter::log_fault).
    Reported(&'a dyn Display),
    /// A fault intercepted by [`recover_into`](super::Reporter::recover_into), with the call stack
    /// it was raised from.
    Recovered {
        fault: &'a Fault,
        trace: &'a Backtrace,
    },
    /// A secondary fault that lost the race for a slot. `kept` is the fault that remains.
    Shadowed {
        kept: &'a dyn Display,
        shadowed: &'a dyn Display,
    },
    /// A raised fault seen by the panic hook. It may still be recovered further up the stack.
    Escalated {
        fault: &'a Fault,
        location: Option<&'a str>,
    },
    /// An error that is about to terminate the process.
    Fatal(&'a dyn Display),
    Note(&'a str),
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Reported(fault) => write!(f, "{fault}"),
            Diagnostic::Recovered { fault, trace } => {
                write!(f, "recovered fault: {fault}\nstacktrace from panic:\n{trace}")
            },
            Diagnostic::Shadowed { kept, shadowed } => {
                write!(f, "fault shadowed: {shadowed} (kept: {kept})")
            },
            Diagnostic::Escalated { fault, location: Some(location) } => {
                write!(f, "fault escalated at {location}: {fault}")
            },
            Diagnostic::Escalated { fault, location: None } => write!(f, "fault escalated: {fault}"),
            Diagnostic::Fatal(fault) => write!(f, "fatal fault: {fault}"),
            Diagnostic::Note(message) => write!(f, "{message}"),
        }
    }
}

impl Debug for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Diagnostic({self})")
    }
}

/// The destination for everything a [`Reporter`](super::Reporter) logs.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic<'_>);
}

/// Forwards diagnostics to [`tracing`], which is where they end up unless another sink is
/// installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::Reported(fault) => tracing::error!(%fault, "fault reported"),
            Diagnostic::Recovered { fault, trace } => {
                tracing::error!(%fault, "recovered fault\nstacktrace from panic:\n{trace}")
            },
            Diagnostic::Shadowed { kept, shadowed } => {
                tracing::warn!(%kept, %shadowed, "fault shadowed")
            },
            Diagnostic::Escalated { fault, location } => {
                tracing::error!(%fault, location = location.unwrap_or("<unknown>"), "fault escalated")
            },
            Diagnostic::Fatal(fault) => tracing::error!(%fault, "fatal fault, exiting"),
            Diagnostic::Note(message) => tracing::info!("{message}"),
        }
    }
}

/// Keeps every diagnostic as its rendered line.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.to_string());
    }
}
