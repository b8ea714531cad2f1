#[cfg(feature = "fs")]
pub mod fmt;
pub mod panic;
#[cfg(feature = "fs")]
pub mod sealed;
