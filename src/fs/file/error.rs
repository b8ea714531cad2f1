use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::fs::error::*;
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    AlreadyExists(AlreadyExistsError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    IsDirectory(IsDirectoryError),
    MetadataOverflow(MetadataOverflowError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    OversizedFile(OversizedFileError),
    PathLength(PathLengthError),
    ReadOnlyFS(ReadOnlyFSError),
    StorageExhausted(StorageExhaustedError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    /// Interprets the errno left by `open` or `mkdir`.
    pub(crate) fn interpret_raw_error(error: c_int) -> OpenError {
        match error {
            libc::EACCES | libc::EPERM =>   AccessError.into(),
            libc::EEXIST =>                 AlreadyExistsError.into(),
            libc::EFAULT =>                 BadAddrPanic.panic(),
            libc::EFBIG | libc::EOVERFLOW => OversizedFileError.into(),
            libc::EINTR =>                  InterruptError.into(),
            libc::EISDIR =>                 IsDirectoryError.into(),
            libc::ELOOP =>                  ExcessiveLinksError.into(),
            libc::EMFILE | libc::ENFILE =>  FileCountError.into(),
            libc::ENAMETOOLONG =>           PathLengthError.into(),
            libc::ENOENT =>                 MissingComponentError.into(),
            libc::ENOMEM =>                 OOMError.into(),
            libc::ENOSPC | libc::EDQUOT =>  StorageExhaustedError.into(),
            libc::ENOTDIR =>                NonDirComponentError.into(),
            libc::EROFS =>                  ReadOnlyFSError.into(),
            e =>                            UnexpectedError(e).into(),
        }
    }
}

impl From<MetadataError> for OpenError {
    fn from(value: MetadataError) -> Self {
        match value {
            MetadataError::OOM(e) => e.into(),
            MetadataError::MetadataOverflow(e) => e.into(),
            MetadataError::Unexpected(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    Unexpected(UnexpectedError),
}

impl CloseError {
    pub(crate) fn interpret_raw_error(error: c_int) -> CloseError {
        match error {
            libc::EBADF =>                 BadFdPanic.panic(),
            libc::EINTR =>                 InterruptError.into(),
            libc::EIO =>                   IOError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            e =>                           UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ReadError {
    Interrupt(InterruptError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    WouldBlock(WouldBlockError),
    Unexpected(UnexpectedError),
}

impl ReadError {
    pub(crate) fn interpret_raw_error(error: c_int) -> ReadError {
        match error {
            libc::EAGAIN =>    WouldBlockError.into(),
            libc::EBADF =>     BadFdPanic.panic(),
            libc::EFAULT =>    BadAddrPanic.panic(),
            libc::EINTR =>     InterruptError.into(),
            libc::EIO =>       IOError.into(),
            libc::EISDIR =>    IsDirectoryError.into(),
            e =>               UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum WriteError {
    Interrupt(InterruptError),
    IO(IOError),
    OversizedFile(OversizedFileError),
    StorageExhausted(StorageExhaustedError),
    WouldBlock(WouldBlockError),
    Unexpected(UnexpectedError),
}

impl WriteError {
    pub(crate) fn interpret_raw_error(error: c_int) -> WriteError {
        match error {
            libc::EAGAIN =>                WouldBlockError.into(),
            libc::EBADF =>                 BadFdPanic.panic(),
            libc::EFAULT =>                BadAddrPanic.panic(),
            libc::EFBIG =>                 OversizedFileError.into(),
            libc::EINTR =>                 InterruptError.into(),
            libc::EIO =>                   IOError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            e =>                           UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum SeekError {
    InvalidSeek(InvalidSeekError),
    OversizedFile(OversizedFileError),
    Unseekable(UnseekableError),
    Unexpected(UnexpectedError),
}

impl SeekError {
    pub(crate) fn interpret_raw_error(error: c_int) -> SeekError {
        match error {
            libc::EBADF =>     BadFdPanic.panic(),
            libc::EINVAL =>    InvalidSeekError.into(),
            libc::EOVERFLOW => OversizedFileError.into(),
            libc::ESPIPE =>    UnseekableError.into(),
            e =>               UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum TruncateError {
    Access(AccessError),
    Interrupt(InterruptError),
    IO(IOError),
    InvalidSize(InvalidSizeError),
    OversizedFile(OversizedFileError),
    ReadOnlyFS(ReadOnlyFSError),
    Unexpected(UnexpectedError),
}

impl TruncateError {
    pub(crate) fn interpret_raw_error(error: c_int) -> TruncateError {
        match error {
            libc::EACCES | libc::EPERM => AccessError.into(),
            libc::EBADF =>                BadFdPanic.panic(),
            libc::EFBIG =>                OversizedFileError.into(),
            libc::EINTR =>                InterruptError.into(),
            libc::EINVAL =>               InvalidSizeError.into(),
            libc::EIO =>                  IOError.into(),
            libc::EROFS =>                ReadOnlyFSError.into(),
            e =>                          UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum MetadataError {
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
    Unexpected(UnexpectedError),
}

impl MetadataError {
    pub(crate) fn interpret_raw_error(error: c_int) -> MetadataError {
        match error {
            libc::EBADF =>     BadFdPanic.panic(),
            libc::EFAULT =>    BadAddrPanic.panic(),
            libc::ENOMEM =>    OOMError.into(),
            libc::EOVERFLOW => MetadataOverflowError.into(),
            e =>               UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum CloneError {
    FileCount(FileCountError),
    Interrupt(InterruptError),
    Unexpected(UnexpectedError),
}

impl CloneError {
    pub(crate) fn interpret_raw_error(error: c_int) -> CloneError {
        match error {
            libc::EBADF =>  BadFdPanic.panic(),
            libc::EINTR =>  InterruptError.into(),
            libc::EMFILE => FileCountError.into(),
            e =>            UnexpectedError(e).into(),
        }
    }
}
