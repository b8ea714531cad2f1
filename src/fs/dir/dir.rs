use std::path::Path;

use libc::{O_CLOEXEC, O_DIRECTORY, O_RDONLY, c_int};

use super::{DirEntries, DirEntry, EntryInfo};
use crate::fault::Reporter;
use crate::fs::file::{CloseError, MetadataError, OpenError};
use crate::fs::util::{self, Fd, Metadata};
use crate::fs::{FsError, StatError};

#[derive(Debug)]
pub struct Directory {
    pub(crate) fd: Fd,
}

impl Directory {
    pub fn open<P: AsRef<Path>>(dir_path: P) -> Result<Directory, OpenError> {
        let pathname = util::c_path(dir_path.as_ref())?;

        // Can't open as O_PATH because we need to read entries.
        let flags: c_int = O_RDONLY | O_DIRECTORY | O_CLOEXEC;

        Ok(Directory {
            fd: Fd::open(&pathname, flags, 0).map_err(OpenError::interpret_raw_error)?,
        })
    }

    pub fn entries(&self) -> DirEntries<'_> {
        DirEntries::new(self)
    }

    /// Reads the metadata of an entry in this directory, without following symlinks.
    pub fn entry_metadata(&self, entry: &DirEntry) -> Result<Metadata, StatError> {
        self.fd.stat_at(&entry.name)
    }

    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        self.fd.metadata()
    }

    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}

/// Lists the directory at `dir_path`, in no particular order, with the metadata of every entry.
/// Entries removed between being listed and being inspected are left out.
pub fn read_dir<P: AsRef<Path>>(dir_path: P) -> Result<Vec<EntryInfo>, FsError> {
    read_dir_with(Reporter::global(), dir_path)
}

/// [`read_dir`], logging a shadowed close error to `reporter`.
pub fn read_dir_with<P: AsRef<Path>>(
    reporter: &Reporter,
    dir_path: P,
) -> Result<Vec<EntryInfo>, FsError> {
    let dir = Directory::open(dir_path)?;

    let mut outcome = collect_entries(&dir);
    reporter.clean_up(&mut outcome, || dir.close());
    outcome
}

fn collect_entries(dir: &Directory) -> Result<Vec<EntryInfo>, FsError> {
    let mut list = Vec::new();
    for entry in dir.entries() {
        let entry = entry?;
        match dir.entry_metadata(&entry) {
            Ok(metadata) => list.push(EntryInfo {
                name: entry.name().to_owned(),
                metadata,
            }),
            Err(StatError::MissingComponent(_)) => continue,
            Err(e) => Err(e)?,
        }
    }
    Ok(list)
}
