use libc::{O_CREAT, O_EXCL, O_TRUNC, c_int};

use crate::util::sealed::Sealed;

pub trait OpenMode: Sealed {
    const FLAGS: c_int;
}

/// Open an existing file only.
pub enum NoCreate {}

impl Sealed for NoCreate {}

impl OpenMode for NoCreate {
    const FLAGS: c_int = 0;
}

/// Create the file if it is missing, otherwise empty the existing one.
pub enum CreateOrEmpty {}

impl Sealed for CreateOrEmpty {}

impl OpenMode for CreateOrEmpty {
    const FLAGS: c_int = O_CREAT | O_TRUNC;
}

/// Create a new file, failing if anything already exists at the path.
pub enum Create {}

impl Sealed for Create {}

impl OpenMode for Create {
    const FLAGS: c_int = O_CREAT | O_EXCL;
}
