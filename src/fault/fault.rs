use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use derive_more::{Display, Error};

/// An opaque, reason-carrying error value that can travel through both error channels: returned as
/// an ordinary value, or raised as the payload of an unwinding panic.
///
/// Faults are reference counted, so cloning one produces a handle to the _same_ fault. This
/// identity is what [`Fault::is`] compares and is how a slot recognises a fault it already holds.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<dyn Error + Send + Sync + 'static>,
    trace: Option<Arc<Backtrace>>,
}

impl Fault {
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Fault {
        Fault {
            inner: Arc::new(error),
            trace: None,
        }
    }

    /// Creates a fault carrying nothing but a message.
    pub fn msg<S: Into<String>>(message: S) -> Fault {
        Fault::new(MessageFault(message.into()))
    }

    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Fault {
        Fault {
            inner: Arc::from(error),
            trace: None,
        }
    }

    /// Converts the payload of a caught panic into a fault. A payload raised by
    /// [`raise`](super::raise) is returned as-is, keeping its identity and trace. Anything else
    /// becomes a [`PanicFault`] with a trace captured here.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Fault {
        match payload.downcast::<Fault>() {
            Ok(fault) => *fault,
            Err(payload) => {
                let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
                    (*msg).to_owned()
                } else if let Some(msg) = payload.downcast_ref::<String>() {
                    msg.clone()
                } else {
                    String::from("opaque panic payload")
                };
                Fault::new(PanicFault(message)).traced()
            },
        }
    }

    /// Returns true if both handles refer to the same fault.
    pub fn is(&self, other: &Fault) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// The call stack captured when this fault was raised, if it has been.
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_deref()
    }

    /// Captures the current call stack, unless one is already attached.
    pub(crate) fn traced(mut self) -> Fault {
        if self.trace.is_none() {
            self.trace = Some(Arc::new(Backtrace::force_capture()));
        }
        self
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Fault {
    fn from(value: E) -> Self {
        Fault::new(value)
    }
}

impl Deref for Fault {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Fault {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Debug for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("error", &self.inner)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}

#[derive(Debug, Display, Clone, Error)]
#[display("{_0}")]
pub struct MessageFault(#[error(not(source))] pub String);

/// A panic that wasn't raised as a [`Fault`], e.g. from [`panic!`] or an index out of bounds.
#[derive(Debug, Display, Clone, Error)]
#[display("panic: {_0}")]
pub struct PanicFault(#[error(not(source))] pub String);

#[derive(Debug, Display, Clone, Error)]
#[display("Assertion failed: \n{_0}")]
pub struct AssertionFault(#[error(not(source))] pub String);
