use std::fmt::Display;
use std::path::Path;

use crate::fault::Reporter;
use crate::fs::file::{File, OpenOptions, Read, ReadError, Write};
use crate::fs::{FILE_MODE, FsError};
use crate::io::Close;

const BUFFER_SIZE: usize = 64 * 1024;

/// Copies the contents of `src` into `dst`, creating `dst` or emptying it first. Returns the number
/// of bytes copied.
pub fn copy_file<D: AsRef<Path>, S: AsRef<Path>>(dst: D, src: S) -> Result<u64, FsError> {
    copy_file_limited(dst, src, u64::MAX)
}

/// Like [`copy_file`], but stops after `max` bytes. A source shorter than `max` is copied whole.
///
/// Both files are closed before returning, destination first. The first error to happen is the
/// one returned; any close errors after it are logged as shadowed.
pub fn copy_file_limited<D: AsRef<Path>, S: AsRef<Path>>(
    dst: D,
    src: S,
    max: u64,
) -> Result<u64, FsError> {
    copy_file_limited_with(Reporter::global(), dst, src, max)
}

/// [`copy_file_limited`], logging shadowed close errors to `reporter`.
pub fn copy_file_limited_with<D: AsRef<Path>, S: AsRef<Path>>(
    reporter: &Reporter,
    dst: D,
    src: S,
    max: u64,
) -> Result<u64, FsError> {
    let input = File::open(src)?;
    let output = OpenOptions::new()
        .write_only()
        .create_or_empty()
        .mode(FILE_MODE)
        .open(dst)?;

    let mut outcome = pump(&input, &output, max);
    release(reporter, &mut outcome, output, input);
    outcome
}

fn pump<R: Read, W: Write>(input: &File<R>, output: &File<W>, max: u64) -> Result<u64, FsError> {
    let mut buf = vec![0_u8; BUFFER_SIZE];
    let mut copied = 0_u64;

    while copied < max {
        let want = usize::try_from(max - copied).map_or(BUFFER_SIZE, |left| left.min(BUFFER_SIZE));
        let count = match input.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(count) => count,
            Err(ReadError::Interrupt(_)) => continue,
            Err(e) => Err(e)?,
        };
        output.write_all(&buf[..count])?;
        copied += count as u64;
    }

    Ok(copied)
}

/// Closes `output` then `input`, folding their errors into `outcome` without replacing one that is
/// already there.
pub(crate) fn release<T, O, I>(
    reporter: &Reporter,
    outcome: &mut Result<T, FsError>,
    output: O,
    input: I,
) where
    O: Close,
    I: Close,
    O::Error: Display,
    I::Error: Display,
    FsError: From<O::Error> + From<I::Error>,
{
    reporter.clean_up(outcome, || output.close());
    reporter.clean_up(outcome, || input.close());
}
