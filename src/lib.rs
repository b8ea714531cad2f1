//! This crate is a small toolbox of helpers for error handling, file I/O and a few string and date
//! chores, the sort of thing every service ends up writing for itself.
//!
//! # Error Handling
//! Rust code ends up with two ways of failing: returning a [`Result`], or unwinding with a panic.
//! Most of this crate returns `Result`s, strongly typed, using enums for static dispatch with
//! structs (often ZSTs) that implement [`Error`](std::error::Error). Sometimes, though, an error
//! has nowhere sensible to be returned to: a failed close in a `Drop`, a broken invariant, a
//! serializer that should never fail. The [`fault`] module bridges the two, turning errors into
//! raised [`Fault`](fault::Fault)s and catching them back into plain values, without ever losing
//! one when two failures collide.
//!
//! # Modules
//! - [`fault`]: the error-escalation shim and the [`Reporter`](fault::Reporter) that logs for it.
//! - [`io`]: [`IndexedStream`](io::IndexedStream), a reader that knows how far through it is.
//! - [`fs`]: thin, typed wrappers around Linux file syscalls, plus file lifecycle helpers built
//!   on them.
//! - [`date`], [`text`], [`json`] and [`poll`]: small standalone helpers.
//! - [`init`]: logging setup for binaries.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its syscall wrappers. Logging goes through `tracing`,
//! dates through `chrono` and JSON through `serde_json`. Optional parts sit behind Cargo features
//! of the same name (`fs`, `date`, `json`), plus `subscriber` for [`init`], all on by default.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod fault;
pub mod io;
pub mod poll;
pub mod text;

#[cfg(feature = "date")]
pub mod date;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "subscriber")]
pub mod init;
#[cfg(feature = "json")]
pub mod json;

pub(crate) mod util;
