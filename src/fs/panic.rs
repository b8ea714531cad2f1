use std::error::Error;

use derive_more::{Display, Error};

use crate::fault;

/// An error that can only come from a bug in this crate, such as a descriptor being used after it
/// was closed. These are raised as faults rather than returned.
pub trait Panic: Error + Send + Sync + Sized + 'static {
    fn panic(self) -> ! {
        fault::raise(self)
    }
}

#[derive(Debug, Display, Clone, Error)]
#[display("file descriptor corruption")]
pub struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Clone, Error)]
#[display("pointer exceeded accessible address space")]
pub struct BadAddrPanic;
impl Panic for BadAddrPanic {}
