use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::fs::error::*;
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ReadDirError {
    CorruptEntry(CorruptEntryError),
    NonDirComponent(NonDirComponentError),
    RemovedDirectory(RemovedDirectoryError),
    Unexpected(UnexpectedError),
}

impl ReadDirError {
    /// Interprets the errno left by `getdents64`.
    pub(crate) fn interpret_raw_error(error: c_int) -> ReadDirError {
        match error {
            libc::EBADF =>   BadFdPanic.panic(),
            libc::EFAULT =>  BadAddrPanic.panic(),
            libc::ENOENT =>  RemovedDirectoryError.into(),
            libc::ENOTDIR => NonDirComponentError.into(),
            e =>             UnexpectedError(e).into(),
        }
    }
}
