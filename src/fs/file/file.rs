use std::io::{self, ErrorKind, SeekFrom};
use std::marker::PhantomData;
use std::path::Path;

use libc::{c_int, mode_t, off_t};

use super::{
    AccessMode, CloneError, CloseError, MetadataError, NoCreate, OpenError, OpenOptions,
    Read, ReadError, ReadOnly, ReadWrite, SeekError, TruncateError, Write, WriteError,
};
use crate::fs::util::{self, Fd, Metadata};
use crate::fs::{IOError, InvalidSeekError, OversizedFileError};
use crate::io::Close;
use crate::util::fmt::raw_type_name;

/// An open regular file. The access mode `A` decides which of the read and write methods exist.
///
/// Dropping a `File` closes it, but any error from doing so can only be logged. Use
/// [`close`](File::close) to find out whether it succeeded.
pub struct File<A: AccessMode> {
    pub(crate) _access: PhantomData<fn() -> A>,
    pub(crate) fd: Fd,
}

impl File<ReadOnly> {
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File<ReadOnly>, OpenError> {
        File::options().open(file_path)
    }

    pub const fn options() -> OpenOptions<ReadOnly, NoCreate> {
        OpenOptions::new()
    }
}

impl File<ReadWrite> {
    /// Creates a new file, failing if the path already exists.
    pub fn create<P: AsRef<Path>>(
        file_path: P,
        file_mode: mode_t,
    ) -> Result<File<ReadWrite>, OpenError> {
        OpenOptions::new()
            .read_write()
            .create()
            .mode(file_mode)
            .open(file_path)
    }
}

impl<A: AccessMode> File<A> {
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError>
    where
        A: Read,
    {
        // SAFETY: The kernel writes at most buf.len() bytes into buf.
        match unsafe { libc::read(*self.fd, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(ReadError::interpret_raw_error(util::err_no())),
            count => Ok(count as usize),
        }
    }

    pub fn write(&self, buf: &[u8]) -> Result<usize, WriteError>
    where
        A: Write,
    {
        // SAFETY: The kernel reads at most buf.len() bytes from buf.
        match unsafe { libc::write(*self.fd, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(WriteError::interpret_raw_error(util::err_no())),
            count => Ok(count as usize),
        }
    }

    /// Writes the whole buffer, retrying short and interrupted writes.
    pub fn write_all(&self, mut buf: &[u8]) -> Result<(), WriteError>
    where
        A: Write,
    {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => Err(IOError)?,
                Ok(count) => buf = &buf[count..],
                Err(WriteError::Interrupt(_)) => {},
                Err(e) => Err(e)?,
            }
        }
        Ok(())
    }

    /// Moves the file offset, returning the new offset from the start of the file.
    pub fn seek(&self, pos: SeekFrom) -> Result<u64, SeekError> {
        let (offset, whence): (off_t, c_int) = match pos {
            SeekFrom::Start(offset) => (
                off_t::try_from(offset).map_err(|_| InvalidSeekError)?,
                libc::SEEK_SET,
            ),
            SeekFrom::Current(offset) => (offset, libc::SEEK_CUR),
            SeekFrom::End(offset) => (offset, libc::SEEK_END),
        };

        match unsafe { libc::lseek(*self.fd, offset, whence) } {
            -1 => Err(SeekError::interpret_raw_error(util::err_no())),
            pos => Ok(pos as u64),
        }
    }

    /// Truncates or zero-extends the file to exactly `size` bytes. The offset isn't moved.
    pub fn set_len(&self, size: u64) -> Result<(), TruncateError>
    where
        A: Write,
    {
        let size = off_t::try_from(size).map_err(|_| OversizedFileError)?;
        match unsafe { libc::ftruncate(*self.fd, size) } {
            -1 => Err(TruncateError::interpret_raw_error(util::err_no())),
            _ => Ok(()),
        }
    }

    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        self.fd.metadata()
    }

    /// Duplicates the underlying descriptor. Both handles share one file offset.
    pub fn try_clone(&self) -> Result<File<A>, CloneError> {
        Ok(File {
            _access: PhantomData,
            fd: self.fd.try_clone()?,
        })
    }

    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}

impl<A: AccessMode> Close for File<A> {
    type Error = CloseError;

    fn close(self) -> Result<(), CloseError> {
        File::close(self)
    }
}

impl<A: AccessMode> std::fmt::Debug for File<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File")
            .field("<access>", &raw_type_name::<A>())
            .field("fd", &self.fd)
            .finish()
    }
}

impl From<ReadError> for io::Error {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Interrupt(e) => io::Error::new(ErrorKind::Interrupted, e),
            ReadError::WouldBlock(e) => io::Error::new(ErrorKind::WouldBlock, e),
            ReadError::IsDirectory(e) => io::Error::new(ErrorKind::IsADirectory, e),
            e => io::Error::other(e),
        }
    }
}

impl From<WriteError> for io::Error {
    fn from(value: WriteError) -> Self {
        match value {
            WriteError::Interrupt(e) => io::Error::new(ErrorKind::Interrupted, e),
            WriteError::WouldBlock(e) => io::Error::new(ErrorKind::WouldBlock, e),
            WriteError::StorageExhausted(e) => io::Error::new(ErrorKind::StorageFull, e),
            e => io::Error::other(e),
        }
    }
}

impl From<SeekError> for io::Error {
    fn from(value: SeekError) -> Self {
        match value {
            SeekError::InvalidSeek(e) => io::Error::new(ErrorKind::InvalidInput, e),
            SeekError::Unseekable(e) => io::Error::new(ErrorKind::NotSeekable, e),
            e => io::Error::other(e),
        }
    }
}

impl<A: Read> io::Read for File<A> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(File::read(self, buf)?)
    }
}

impl<A: Write> io::Write for File<A> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(File::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        // Writes go straight to the descriptor, there is nothing buffered here.
        Ok(())
    }
}

impl<A: AccessMode> io::Seek for File<A> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Ok(File::seek(self, pos)?)
    }
}
