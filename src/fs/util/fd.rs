use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::Deref;
use std::thread;

use libc::{c_int, mode_t, stat as Stat};

use crate::fault;
use crate::fs::file::{CloneError, CloseError, MetadataError};
use crate::fs::panic::{BadFdPanic, Panic};
use crate::fs::util::{self, Metadata, RawOsError};
use crate::fs::StatError;

pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn open(pathname: &CStr, flags: c_int, mode: mode_t) -> Result<Fd, RawOsError> {
        match unsafe { libc::open(pathname.as_ptr(), flags, mode as libc::c_uint) } {
            -1 => Err(util::err_no()),
            fd => Ok(Fd(fd)),
        }
    }

    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            Err(MetadataError::interpret_raw_error(util::err_no()))?
        }
        // SAFETY: fstat either initializes raw_meta or returns an error and diverges.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(Metadata::from_stat(raw))
    }

    /// Stats `name` relative to this (directory) descriptor, without following a final symlink.
    pub fn stat_at(&self, name: &CStr) -> Result<Metadata, StatError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        if unsafe {
            libc::fstatat(self.0, name.as_ptr(), raw_meta.as_mut_ptr(), libc::AT_SYMLINK_NOFOLLOW)
        } == -1
        {
            Err(StatError::interpret_raw_error(util::err_no()))?
        }
        // SAFETY: fstatat either initializes raw_meta or returns an error and diverges.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(Metadata::from_stat(raw))
    }

    pub fn close(self) -> Result<(), CloseError> {
        // The descriptor is invalidated by close regardless of the outcome, so Drop mustn't try
        // again.
        let fd = ManuallyDrop::new(self);
        match unsafe { libc::close(fd.0) } {
            -1 => Err(CloseError::interpret_raw_error(util::err_no())),
            _ => Ok(()),
        }
    }

    pub fn try_clone(&self) -> Result<Fd, CloneError> {
        match unsafe { libc::fcntl(self.0, libc::F_DUPFD_CLOEXEC, 0) } {
            -1 => Err(CloneError::interpret_raw_error(util::err_no())),
            fd => Ok(Fd(fd)),
        }
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // Only reached when the owner didn't close explicitly, usually because it is returning
        // another error. A close error here is secondary, so it is logged rather than returned.
        if unsafe { libc::close(self.0) } == -1 {
            match util::err_no() {
                // Raise only if we aren't already, to prevent aborting an existing unwind.
                libc::EBADF if !thread::panicking() => BadFdPanic.panic(),
                libc::EBADF => {
                    fault::log_fault(Err::<(), _>(BadFdPanic));
                },
                e => {
                    fault::log_fault(Err::<(), _>(CloseError::interpret_raw_error(e)));
                },
            }
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
