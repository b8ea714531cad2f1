use std::mem::MaybeUninit;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From, IsVariant};
use libc::{c_int, mode_t, stat as Stat};

use crate::fs::error::*;
use crate::fs::file::OpenError;
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};
use crate::fs::util::{self, Metadata};

/// Mode given to directories created by [`ensure_dir`], before the umask is applied.
pub const DIR_MODE: mode_t = 0o775;

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum StatError {
    ExcessiveLinks(ExcessiveLinksError),
    InvalidPath(InvalidPathError),
    MetadataOverflow(MetadataOverflowError),
    MissingComponent(MissingComponentError),
    NoSearch(NoSearchError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    PathLength(PathLengthError),
    Unexpected(UnexpectedError),
}

impl StatError {
    pub(crate) fn interpret_raw_error(error: c_int) -> StatError {
        match error {
            libc::EACCES =>       NoSearchError.into(),
            libc::EBADF =>        BadFdPanic.panic(),
            libc::EFAULT =>       BadAddrPanic.panic(),
            libc::ELOOP =>        ExcessiveLinksError.into(),
            libc::ENAMETOOLONG => PathLengthError.into(),
            libc::ENOENT =>       MissingComponentError.into(),
            libc::ENOMEM =>       OOMError.into(),
            libc::ENOTDIR =>      NonDirComponentError.into(),
            libc::EOVERFLOW =>    MetadataOverflowError.into(),
            e =>                  UnexpectedError(e).into(),
        }
    }
}

/// Resolves `path` against the working directory `wd`. Absolute paths are returned unchanged.
pub fn make_path<W: AsRef<Path>, P: AsRef<Path>>(wd: W, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        wd.as_ref().join(path)
    }
}

/// Reads the metadata of whatever is at `path`, following symlinks.
pub fn metadata<P: AsRef<Path>>(path: P) -> Result<Metadata, StatError> {
    let pathname = util::c_path(path.as_ref())?;

    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
    if unsafe { libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        Err(StatError::interpret_raw_error(util::err_no()))?
    }
    // SAFETY: stat either initializes raw_meta or returns an error and diverges.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(Metadata::from_stat(raw))
}

/// Whether something other than a directory exists at `path`. Any error counts as absence.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    metadata(path).is_ok_and(|meta| !meta.is_dir())
}

pub fn file_size<P: AsRef<Path>>(path: P) -> Result<i64, FsError> {
    Ok(metadata(path)?.size)
}

/// Makes sure a directory exists at `path`, creating it (but not its parents) if nothing is there.
/// Fails if `path` exists but isn't a directory.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), FsError> {
    let path = path.as_ref();
    match metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(NotADirectoryError(path.to_path_buf()).into()),
        Err(StatError::MissingComponent(_)) => {
            let pathname = util::c_path(path).map_err(OpenError::from)?;
            if unsafe { libc::mkdir(pathname.as_ptr(), DIR_MODE) } == -1 {
                match util::err_no() {
                    // Lost a race with someone else creating it, which is fine if it's a directory.
                    libc::EEXIST if metadata(path).is_ok_and(|meta| meta.is_dir()) => {},
                    e => Err(OpenError::interpret_raw_error(e))?,
                }
            }
            Ok(())
        },
        Err(e) => Err(e.into()),
    }
}
