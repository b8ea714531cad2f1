use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_int, c_void};

use crate::fs::InvalidPathError;

pub type RawOsError = c_int;

pub fn err_no() -> RawOsError {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// # Safety
/// `dirp` must be valid for writes of `bytes` bytes.
pub unsafe fn getdents(fd: c_int, dirp: *mut c_void, bytes: usize) -> isize {
    unsafe { libc::syscall(libc::SYS_getdents64, fd, dirp, bytes) as isize }
}

/// Converts a path into the NUL terminated form expected by the kernel.
pub fn c_path(path: &Path) -> Result<CString, InvalidPathError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)
}
