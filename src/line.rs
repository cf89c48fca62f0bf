use std::io::{self, BufRead};

use crate::error::Fatal;

/// The capacity a fresh [`LineBuffer`] starts with, unless configured otherwise.
pub(crate) const INITIAL_CAPACITY: usize = 16;

/// No allocation may be larger than this many bytes.
const MAX_CAPACITY: usize = isize::MAX as usize;

/// Computes the capacity following `current`.
///
/// The capacity always doubles. Doubling past [`MAX_CAPACITY`] is an error rather than a
/// wrap-around.
pub(crate) fn next_capacity(current: usize) -> Result<usize, Fatal> {
    current
        .checked_mul(2)
        .filter(|&next| next <= MAX_CAPACITY)
        .ok_or(Fatal::CapacityOverflow)
}

/// The growable buffer a line is accumulated into.
///
/// The buffer keeps track of its own logical capacity so that growth follows the doubling policy
/// of [`next_capacity`] regardless of how the allocator rounds requests.
#[derive(Debug)]
pub(crate) struct LineBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl LineBuffer {
    /// Creates an empty buffer able to hold `capacity` bytes (at least one).
    pub fn with_capacity(capacity: usize) -> Result<Self, Fatal> {
        let capacity = capacity.max(1);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| Fatal::OutOfMemory)?;
        Ok(Self { bytes, capacity })
    }

    /// The number of bytes the buffer can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends a byte, doubling the capacity first if the buffer is full.
    pub fn push(&mut self, byte: u8) -> Result<(), Fatal> {
        if self.bytes.len() == self.capacity() {
            self.grow()?;
        }
        self.bytes.push(byte);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), Fatal> {
        let next = next_capacity(self.capacity)?;
        self.bytes
            .try_reserve_exact(next - self.bytes.len())
            .map_err(|_| Fatal::OutOfMemory)?;
        tracing::trace!(from = self.capacity, to = next, "grew line buffer");
        self.capacity = next;
        Ok(())
    }

    /// Turns the buffer into the exactly-sized bytes of the line.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.bytes;
        bytes.shrink_to_fit();
        bytes
    }
}

/// Decodes a line, replacing invalid UTF-8 sequences with `U+FFFD`.
pub(crate) fn decode_line(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Reads the next byte of `reader`, or `None` once the stream is exhausted.
///
/// Exactly one byte is consumed, so nothing past the end of the current line is ever taken from
/// the reader.
fn next_byte<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<u8>, Fatal> {
    let byte = loop {
        match reader.fill_buf() {
            Ok(available) => break available.first().copied(),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(Fatal::Io(err)),
        }
    };

    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

/// Reads the bytes of one line from `reader`.
///
/// The line feed is consumed but not included in the result. `None` is returned when the stream
/// ends before a single byte could be read; an empty line is `Some(Vec::new())`.
pub(crate) fn read_raw_line_from<R: BufRead + ?Sized>(
    reader: &mut R,
    initial_capacity: usize,
) -> Result<Option<Vec<u8>>, Fatal> {
    let mut line = LineBuffer::with_capacity(initial_capacity)?;

    loop {
        match next_byte(reader)? {
            Some(b'\n') => break,
            Some(byte) => line.push(byte)?,
            None if line.is_empty() => {
                tracing::debug!("reached the end of the input");
                return Ok(None);
            }
            None => break,
        }
    }

    Ok(Some(line.into_bytes()))
}
