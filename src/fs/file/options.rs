use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::path::Path;

use libc::{O_APPEND, O_CLOEXEC, O_NOFOLLOW, O_SYNC, c_int, mode_t};

use super::{
    AccessMode, Create, CreateOrEmpty, File, NoCreate, OpenError, OpenMode, ReadOnly, ReadWrite,
    WriteOnly,
};
use crate::fs::util::{self, Fd, FileType};
use crate::fs::IsDirectoryError;
use crate::util::fmt::{DebugRaw, raw_type_name};

/// A builder struct to help with opening files, using customizable options and logical defaults:
/// read-only, no creation, mode `0o644` for anything that does get created.
/// Available via [`File::options`] to avoid additional use statements.
pub struct OpenOptions<Access: AccessMode, Open: OpenMode> {
    pub(crate) _access: PhantomData<fn() -> Access>,
    pub(crate) _open: PhantomData<fn() -> Open>,
    pub(crate) flags: c_int,
    pub(crate) mode: mode_t,
}

macro_rules! set_flag {
    ($self:ident, $value:expr, $flag:expr) => {
        if $value {
            $self.flags |= $flag;
        } else {
            $self.flags &= !$flag;
        }
    };
}

macro_rules! get_flag {
    ($self:ident, $flag:expr) => {
        $self.flags & $flag != 0
    };
}

impl OpenOptions<ReadOnly, NoCreate> {
    pub const fn new() -> OpenOptions<ReadOnly, NoCreate> {
        OpenOptions {
            _access: PhantomData,
            _open: PhantomData,
            flags: 0,
            mode: 0o644,
        }
    }
}

impl<A: AccessMode, O: OpenMode> OpenOptions<A, O> {
    pub(crate) const fn flags(&self) -> c_int {
        self.flags | A::FLAGS | O::FLAGS | O_CLOEXEC
    }

    /// Opens the file at `file_path`. Directories are refused even where the kernel would allow
    /// opening them read-only.
    pub fn open<P: AsRef<Path>>(&self, file_path: P) -> Result<File<A>, OpenError> {
        let pathname = util::c_path(file_path.as_ref())?;

        let fd = Fd::open(&pathname, self.flags(), self.mode)
            .map_err(OpenError::interpret_raw_error)?;

        if fd.metadata()?.file_type == FileType::Directory {
            Err(IsDirectoryError)?
        }

        Ok(File {
            _access: PhantomData,
            fd,
        })
    }

    pub const fn no_create(self) -> OpenOptions<A, NoCreate> {
        OpenOptions::<A, NoCreate> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    pub const fn create_or_empty(self) -> OpenOptions<A, CreateOrEmpty> {
        OpenOptions::<A, CreateOrEmpty> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    pub const fn create(self) -> OpenOptions<A, Create> {
        OpenOptions::<A, Create> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    pub const fn read_only(self) -> OpenOptions<ReadOnly, O> {
        OpenOptions::<ReadOnly, O> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    pub const fn write_only(self) -> OpenOptions<WriteOnly, O> {
        OpenOptions::<WriteOnly, O> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    pub const fn read_write(self) -> OpenOptions<ReadWrite, O> {
        OpenOptions::<ReadWrite, O> {
            _access: PhantomData,
            _open: PhantomData,
            flags: self.flags,
            mode: self.mode,
        }
    }

    /// The permissions given to a newly created file, before the umask is applied.
    pub const fn mode(mut self, file_mode: mode_t) -> Self {
        self.mode = file_mode;
        self
    }

    pub const fn append(mut self, value: bool) -> Self {
        set_flag!(self, value, O_APPEND);
        self
    }

    pub const fn force_sync(mut self, value: bool) -> Self {
        set_flag!(self, value, O_SYNC);
        self
    }

    pub const fn follow_links(mut self, value: bool) -> Self {
        set_flag!(self, !value, O_NOFOLLOW);
        self
    }
}

// Derived Clone and Copy would require the uninhabited marker types to implement them.
impl<A: AccessMode, O: OpenMode> Clone for OpenOptions<A, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: AccessMode, O: OpenMode> Copy for OpenOptions<A, O> {}

impl Default for OpenOptions<ReadOnly, NoCreate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AccessMode, O: OpenMode> Debug for OpenOptions<A, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenOptions")
            .field("<access>", &raw_type_name::<A>())
            .field("<open>", &raw_type_name::<O>())
            .field("mode", &DebugRaw(format!("0o{:o}", self.mode)))
            .field("append", &get_flag!(self, O_APPEND))
            .field("force_sync", &get_flag!(self, O_SYNC))
            .field("follow_links", &!get_flag!(self, O_NOFOLLOW))
            .finish()
    }
}
