use std::fmt::Debug;

use libc::{O_RDONLY, O_RDWR, O_WRONLY, c_int};

use crate::util::sealed::Sealed;

/// The access a [`File`](super::File) was opened with. Implemented only by the uninhabited
/// markers in this module.
pub trait AccessMode: Sealed + Debug {
    const FLAGS: c_int;
}

/// Access modes that allow [`File::read`](super::File::read).
pub trait Read: AccessMode {}

/// Access modes that allow [`File::write`](super::File::write) and anything else that modifies
/// the file, such as [`set_len`](super::File::set_len).
pub trait Write: AccessMode {}

macro_rules! access_mode {
    ($(#[$meta:meta])* $name:ident = $flags:expr; $($capability:ident),+) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl Sealed for $name {}

        impl AccessMode for $name {
            const FLAGS: c_int = $flags;
        }

        $(impl $capability for $name {})+
    };
}

access_mode!(
    /// Opened with `O_RDONLY`.
    ReadOnly = O_RDONLY; Read
);

access_mode!(
    /// Opened with `O_WRONLY`.
    WriteOnly = O_WRONLY; Write
);

access_mode!(
    /// Opened with `O_RDWR`.
    ReadWrite = O_RDWR; Read, Write
);
