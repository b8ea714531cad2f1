use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use super::{Directory, ReadDirError};
use crate::fs::util::{self, FileType, Metadata};
use crate::fs::CorruptEntryError;

// Offsets into a struct linux_dirent64.
const INO_OFFSET: usize = 0;
const RECLEN_OFFSET: usize = 16;
const TYPE_OFFSET: usize = 18;
const NAME_OFFSET: usize = 19;

pub(crate) const BUFFER_SIZE: usize = 8192;

/// A single name in a directory, as reported by the kernel. `file_type` is only a hint and is
/// `None` for file systems that don't provide one.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub inode: u64,
    pub file_type: Option<FileType>,
    pub name: CString,
}

impl DirEntry {
    pub fn name(&self) -> &OsStr {
        OsStr::from_bytes(self.name.as_bytes())
    }
}

/// An entry with its full metadata, as returned by [`read_dir`](super::read_dir).
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: OsString,
    pub metadata: Metadata,
}

impl EntryInfo {
    pub const fn size(&self) -> i64 {
        self.metadata.size
    }

    pub const fn file_type(&self) -> FileType {
        self.metadata.file_type
    }

    pub const fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }
}

/// An iterator over the entries of a [`Directory`], excluding `.` and `..`. Entries are read from
/// the kernel a buffer at a time.
pub struct DirEntries<'a> {
    pub(crate) dir: &'a Directory,
    pub(crate) buf: Box<[u8]>,
    pub(crate) head: usize,
    pub(crate) end: usize,
    pub(crate) exhausted: bool,
}

impl<'a> DirEntries<'a> {
    pub(crate) fn new(dir: &'a Directory) -> DirEntries<'a> {
        DirEntries {
            dir,
            buf: vec![0; BUFFER_SIZE].into_boxed_slice(),
            head: 0,
            end: 0,
            exhausted: false,
        }
    }

    fn fill(&mut self) -> Result<bool, ReadDirError> {
        // SAFETY: buf is owned by self and its length is passed along with it.
        let count = unsafe {
            util::getdents(*self.dir.fd, self.buf.as_mut_ptr().cast(), self.buf.len())
        };
        match count {
            -1 => Err(ReadDirError::interpret_raw_error(util::err_no())),
            0 => Ok(false),
            count => {
                self.head = 0;
                self.end = count as usize;
                Ok(true)
            },
        }
    }

    fn parse_head(&mut self) -> Result<DirEntry, ReadDirError> {
        let record = &self.buf[self.head..self.end];
        if record.len() < NAME_OFFSET {
            Err(CorruptEntryError)?
        }

        let reclen = u16::from_ne_bytes([record[RECLEN_OFFSET], record[RECLEN_OFFSET + 1]]) as usize;
        if reclen <= NAME_OFFSET || reclen > record.len() {
            Err(CorruptEntryError)?
        }

        let mut inode = [0; 8];
        inode.copy_from_slice(&record[INO_OFFSET..INO_OFFSET + 8]);
        let name = CStr::from_bytes_until_nul(&record[NAME_OFFSET..reclen])
            .map_err(|_| CorruptEntryError)?;

        let entry = DirEntry {
            inode: u64::from_ne_bytes(inode),
            file_type: FileType::from_dirent_type(record[TYPE_OFFSET]),
            name: name.to_owned(),
        };
        self.head += reclen;
        Ok(entry)
    }
}

impl Iterator for DirEntries<'_> {
    type Item = Result<DirEntry, ReadDirError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.head >= self.end {
                if self.exhausted {
                    return None;
                }
                match self.fill() {
                    Ok(true) => {},
                    Ok(false) => {
                        self.exhausted = true;
                        return None;
                    },
                    Err(e) => {
                        self.exhausted = true;
                        return Some(Err(e));
                    },
                }
            }

            match self.parse_head() {
                Ok(entry) if matches!(entry.name.as_bytes(), b"." | b"..") => continue,
                Ok(entry) => return Some(Ok(entry)),
                Err(e) => {
                    // The rest of this buffer can't be trusted.
                    self.head = self.end;
                    self.exhausted = true;
                    return Some(Err(e));
                },
            }
        }
    }
}
