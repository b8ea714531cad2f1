//! Types for interacting with the directories of a file system. Simpler than the file module, this
//! one is primarily focussed on the [`Directory`] and [`DirEntry`] types, plus [`read_dir`] for
//! when a plain listing is all that's needed.
//!
//! # Opening
//! With less options relevant while opening `Directory`s, this module does not provide a builder
//! like file's [`OpenOptions`](crate::fs::file::OpenOptions).

mod dir;
mod dir_entry;
mod error;

pub use dir::*;
pub use dir_entry::*;
pub use error::*;
