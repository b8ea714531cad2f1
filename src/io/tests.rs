#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::io::{self, Cursor, ErrorKind, Read};

use derive_more::{Display, Error};

use super::*;

#[derive(Debug, Display, Error, PartialEq)]
#[display("already closed")]
struct AlreadyClosed;

struct CountedClose<'a>(&'a Cell<usize>);

impl Close for CountedClose<'_> {
    type Error = AlreadyClosed;

    fn close(self) -> Result<(), AlreadyClosed> {
        self.0.set(self.0.get() + 1);
        if self.0.get() > 1 { Err(AlreadyClosed) } else { Ok(()) }
    }
}

struct Failing;

impl Read for Failing {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::BrokenPipe, "source went away"))
    }
}

#[test]
fn test_counts_consumed_bytes() {
    let mut stream = IndexedStream::new(Cursor::new(vec![7_u8; 10]), (), 10);
    assert_eq!(stream.remaining(), 10);
    assert!(!stream.at_end());

    let mut buf = [0; 4];
    assert_eq!(stream.read(&mut buf).unwrap(), 4);
    assert_eq!(stream.consumed(), 4);
    assert_eq!(stream.remaining(), 6, "Remaining should be the declared length minus consumed.");
    assert!(!stream.at_end());

    let mut rest = Vec::new();
    stream.read_to_end(&mut rest).unwrap();
    assert_eq!(rest.len(), 6);
    assert_eq!(stream.remaining(), 0);
    assert!(stream.at_end(), "Consuming exactly the declared length should reach the end.");

    assert_eq!(stream.read(&mut buf).unwrap(), 0, "End of data should read nothing.");
    assert_eq!(stream.consumed(), 10, "Empty reads shouldn't move the counter.");
}

#[test]
fn test_overrun_is_not_defended() {
    let mut stream = IndexedStream::new(Cursor::new(vec![1_u8; 12]), (), 5);

    let mut all = Vec::new();
    stream.read_to_end(&mut all).unwrap();

    assert_eq!(all.len(), 12, "The declared length shouldn't limit reads.");
    assert_eq!(stream.remaining(), -7);
    assert!(stream.at_end());
}

#[test]
fn test_short_source() {
    let mut stream = IndexedStream::new(Cursor::new(vec![1_u8; 3]), (), 8);

    let mut all = Vec::new();
    stream.read_to_end(&mut all).unwrap();

    assert_eq!(stream.remaining(), 5);
    assert!(!stream.at_end(), "A source shorter than declared never reaches the end.");
}

#[test]
fn test_zero_length_starts_at_end() {
    let stream = IndexedStream::new(io::empty(), (), 0);
    assert!(stream.at_end());
    assert_eq!(stream.remaining(), 0);
}

#[test]
fn test_propagates_source_error() {
    let mut stream = IndexedStream::new(Failing, (), 4);

    let err = stream.read(&mut [0; 4]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    assert_eq!(stream.consumed(), 0);
}

#[test]
fn test_close_delegates_once() {
    let closes = Cell::new(0);
    let stream = IndexedStream::new(Cursor::new([0_u8; 2]), CountedClose(&closes), 2);

    assert_eq!(stream.close(), Ok(()));
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_into_parts() {
    let closes = Cell::new(0);
    let mut stream = IndexedStream::new(Cursor::new([1_u8, 2, 3]), CountedClose(&closes), 3);
    stream.read_exact(&mut [0; 2]).unwrap();

    let (source, closer) = stream.into_parts();
    assert_eq!(source.position(), 2);
    assert_eq!(closer.close(), Ok(()));
    assert_eq!(closes.get(), 1, "Closing through the parts should also only close once.");
}
