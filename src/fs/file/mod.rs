//! Types for reading and writing regular files, centred on [`File`] and the [`OpenOptions`]
//! builder.
//!
//! # Access Mode
//! Each `File` carries its access mode ([`ReadOnly`], [`WriteOnly`] or [`ReadWrite`]) as a type
//! parameter, so reading from a write-only file is a compile error rather than an `EBADF`.
//!
//! # Open Mode
//! Similarly, `OpenOptions` tracks whether opening may create the file ([`NoCreate`],
//! [`CreateOrEmpty`] or [`Create`]).

mod access;
mod error;
mod file;
mod open_mode;
mod options;

pub use access::*;
pub use error::*;
pub use file::*;
pub use open_mode::*;
pub use options::*;
