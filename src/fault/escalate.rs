use std::panic;

use super::{AssertionFault, Diagnostic, Fault, Reporter};

/// Raises `error` as an unwinding fault, with the current call stack attached. The only way back
/// is a [`recover_into`](Reporter::recover_into) (or [`catch_unwind`](panic::catch_unwind)) further
/// up the stack; otherwise the thread dies with it.
pub fn raise<E: Into<Fault>>(error: E) -> ! {
    panic::panic_any(error.into().traced())
}

/// Raises the fault if there is one, otherwise does nothing.
pub fn escalate(fault: Option<Fault>) {
    if let Some(fault) = fault {
        raise(fault)
    }
}

/// Raises `explanation` as an [`AssertionFault`] if `condition` doesn't hold.
pub fn assert_invariant<S: Into<String>>(condition: bool, explanation: S) {
    if !condition {
        raise(AssertionFault(explanation.into()))
    }
}

pub trait Escalate<T> {
    /// A method similar to [`Result::unwrap`], except that the error is raised as a [`Fault`]
    /// rather than formatted into a panic message, so it can be recovered intact.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn escalate(self) -> T;
}

impl<T, E: Into<Fault>> Escalate<T> for Result<T, E> {
    fn escalate(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => raise(error),
        }
    }
}

/// Chains a panic hook that reports raised faults through the global [`Reporter`] as
/// [`Escalated`](Diagnostic::Escalated), instead of the default hook's `Box<dyn Any>` message.
/// Panics with any other payload go to the previous hook.
///
/// The hook runs before anything has had a chance to recover the fault, so a recovered fault is
/// reported twice: once here and once by [`recover_into`](Reporter::recover_into).
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| match info.payload().downcast_ref::<Fault>() {
        Some(fault) => {
            let location = info.location().map(|loc| loc.to_string());
            Reporter::global().emit(&Diagnostic::Escalated {
                fault,
                location: location.as_deref(),
            });
        },
        None => previous(info),
    }));
}
