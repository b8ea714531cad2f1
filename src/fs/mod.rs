//! File lifecycle helpers and the Linux file APIs they are built on.
//!
//! The free functions here ([`create_sized_file`], [`open_file_at`], [`copy_file`],
//! [`read_dir`], ...) each string a few syscalls together and return an [`FsError`]. The types
//! underneath them ([`File`], [`OpenOptions`](file::OpenOptions), [`Directory`]) return an error
//! specific to the one operation that failed, built by interpreting its `errno`.
//!
//! Helpers that close what they open come in two forms: the plain one logs through
//! [`Reporter::global`](crate::fault::Reporter::global), and a `_with` twin takes the
//! [`Reporter`](crate::fault::Reporter) to use.
//!
//! Nothing in this module raises a fault for an ordinary failure. The exception is kernel misuse
//! that can only come from a bug here, such as `EBADF`, which is raised through
//! [`fault::raise`](crate::fault::raise).
#![cfg(target_os = "linux")]

pub mod dir;
pub mod file;

mod copy;
mod error;
mod lifecycle;
mod path;
pub(crate) mod panic;
pub(crate) mod util;

pub use copy::*;
pub use dir::{Directory, EntryInfo, read_dir, read_dir_with};
pub use error::*;
pub use file::File;
pub use lifecycle::*;
pub use path::*;
pub use util::{FileType, Metadata};
