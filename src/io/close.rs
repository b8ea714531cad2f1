use std::convert::Infallible;

/// A resource that is released exactly once, by value.
pub trait Close {
    type Error;

    fn close(self) -> Result<(), Self::Error>;
}

/// Nothing to release.
impl Close for () {
    type Error = Infallible;

    fn close(self) -> Result<(), Infallible> {
        Ok(())
    }
}
