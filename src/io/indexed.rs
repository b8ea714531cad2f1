use std::io::{self, Read};

use super::Close;

/// Wraps a readable source with a count of the bytes consumed so far and an advisory declared
/// length, e.g. for reading a known-size section of a larger file.
///
/// The declared length is never enforced: reading past it is allowed and simply makes
/// [`remaining`](IndexedStream::remaining) negative. Stopping at the end is up to the caller.
#[derive(Debug)]
pub struct IndexedStream<R, C> {
    source: R,
    closer: C,
    idx: i64,
    len: i64,
}

impl<R: Read, C: Close> IndexedStream<R, C> {
    pub const fn new(source: R, closer: C, len: i64) -> IndexedStream<R, C> {
        IndexedStream {
            source,
            closer,
            idx: 0,
            len,
        }
    }

    pub const fn consumed(&self) -> i64 {
        self.idx
    }

    pub const fn declared_len(&self) -> i64 {
        self.len
    }

    pub const fn remaining(&self) -> i64 {
        self.len - self.idx
    }

    pub const fn at_end(&self) -> bool {
        self.idx >= self.len
    }

    pub const fn get_ref(&self) -> &R {
        &self.source
    }

    /// Releases the underlying resource. Taking `self` guarantees this only happens once.
    pub fn close(self) -> Result<(), C::Error> {
        self.closer.close()
    }

    pub fn into_parts(self) -> (R, C) {
        (self.source, self.closer)
    }
}

impl<R: Read, C: Close> Read for IndexedStream<R, C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = self.source.read(buf)?;
        self.idx += count as i64;
        Ok(count)
    }
}
