use std::io::SeekFrom;
use std::path::Path;

use libc::mode_t;

use crate::fault::Reporter;
use crate::fs::FsError;
use crate::fs::file::{File, OpenOptions, ReadWrite};

/// Mode given to files created by this module, before the umask is applied.
pub const FILE_MODE: mode_t = 0o644;

/// Creates a new file at `path` holding exactly `size` zero bytes.
///
/// The file must not exist yet: an existing path fails with an error for which
/// [`FsError::already_exists`] holds. A failure to close the new file is only returned when
/// everything else succeeded, otherwise it gets logged as shadowed.
pub fn create_sized_file<P: AsRef<Path>>(path: P, size: u64) -> Result<(), FsError> {
    create_sized_file_with(Reporter::global(), path, size)
}

/// [`create_sized_file`], logging a shadowed close error to `reporter`.
pub fn create_sized_file_with<P: AsRef<Path>>(
    reporter: &Reporter,
    path: P,
    size: u64,
) -> Result<(), FsError> {
    let file = OpenOptions::new()
        .read_write()
        .create()
        .mode(FILE_MODE)
        .open(path)?;

    let mut outcome = file.set_len(size).map_err(FsError::from);
    reporter.clean_up(&mut outcome, || file.close());
    outcome
}

/// Opens an existing file read-write with its offset placed `offset` bytes from the start.
pub fn open_file_at<P: AsRef<Path>>(path: P, offset: u64) -> Result<File<ReadWrite>, FsError> {
    let file = OpenOptions::new()
        .read_write()
        .no_create()
        .open(path)?;

    file.seek(SeekFrom::Start(offset))?;
    Ok(file)
}
