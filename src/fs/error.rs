use std::path::PathBuf;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::fs::dir::ReadDirError;
use crate::fs::file::{
    CloneError, CloseError, MetadataError, OpenError, ReadError, SeekError, TruncateError,
    WriteError,
};
use crate::fs::StatError;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("operation would block but the file is non-blocking")]
pub struct WouldBlockError;

#[derive(Debug, Display, Clone, Error)]
#[display("directory no longer exists")]
pub struct RemovedDirectoryError;

#[derive(Debug, Display, Clone, Error)]
#[display("search permission is denied for one of the directories in the provided path")]
pub struct NoSearchError;

#[derive(Debug, Display, Clone, Error)]
#[display("permission denied")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Error)]
#[display("file already exists")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Clone, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Error)]
#[display("file system is read-only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is too large")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains an interior nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Error)]
#[display("seek offset is invalid")]
pub struct InvalidSeekError;

#[derive(Debug, Display, Clone, Error)]
#[display("file does not support seeking")]
pub struct UnseekableError;

#[derive(Debug, Display, Clone, Error)]
#[display("size is invalid for this file")]
pub struct InvalidSizeError;

#[derive(Debug, Display, Clone, Error)]
#[display("directory entry is malformed")]
pub struct CorruptEntryError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is already a file: {}", _0.display())]
pub struct NotADirectoryError(#[error(not(source))] pub PathBuf);

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

/// Any error from this module, for helpers that string several operations together.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum FsError {
    Open(OpenError),
    Close(CloseError),
    Read(ReadError),
    Write(WriteError),
    Seek(SeekError),
    Truncate(TruncateError),
    Metadata(MetadataError),
    Stat(StatError),
    Clone(CloneError),
    ReadDir(ReadDirError),
    NotADirectory(NotADirectoryError),
}

impl FsError {
    /// Whether this is the "already exists" failure of an exclusive create.
    pub const fn already_exists(&self) -> bool {
        matches!(self, FsError::Open(OpenError::AlreadyExists(_)))
    }

    /// Whether the path, or one of its components, doesn't exist.
    pub const fn not_found(&self) -> bool {
        matches!(
            self,
            FsError::Open(OpenError::MissingComponent(_))
                | FsError::Stat(StatError::MissingComponent(_))
        )
    }
}
