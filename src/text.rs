//! Small string predicates.

use std::borrow::Cow;

/// Whether `s` contains any of `subs`.
pub fn contains_any<S: AsRef<str>>(s: &str, subs: &[S]) -> bool {
    subs.iter().any(|sub| s.contains(sub.as_ref()))
}

/// Whether `sub` occurs in any of `list`. The reverse of [`contains_any`].
pub fn included_in_any<S: AsRef<str>>(sub: &str, list: &[S]) -> bool {
    list.iter().any(|s| s.as_ref().contains(sub))
}

pub fn is_one_of<S: AsRef<str>>(s: &str, list: &[S]) -> bool {
    list.iter().any(|candidate| candidate.as_ref() == s)
}

/// Reads the text in a fixed size, NUL padded buffer, as found in C structs. Everything from the
/// first NUL onwards is dropped; without one, the whole buffer is used. Invalid UTF-8 is replaced.
pub fn str_from_nul_padded(bytes: &[u8]) -> Cow<'_, str> {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end])
}
