//! Stream decorators. At the moment this is just [`IndexedStream`] and the [`Close`] trait that it
//! uses to release the resource behind it.

mod close;
mod indexed;
mod tests;

pub use close::*;
pub use indexed::*;
