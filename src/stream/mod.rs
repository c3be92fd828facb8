/*!
 Contains logic and data structures used to read and write the colorset
 binary stream.

 ## Overview

 A [`ColorSetStream`] owns a growable byte buffer. Append operations write
 typed values at the true end of the buffer and cannot fail; read operations
 consume bytes sequentially from an independent cursor and fail with
 [`StreamError`] rather than ever returning garbage. The cursor and the
 append position are independent views over the same buffer, so a stream can
 be written and then read back from position `0` after [`ColorSetStream::rewind`].

 All multi-byte values are big-endian.
*/

use crate::{error::stream::StreamError, model::Color};


/// A sequential, bounds-checked reader and writer over an owned byte buffer
#[derive(Debug, Default)]
pub struct ColorSetStream {
    /// The raw bytes of the stream
    data: Vec<u8>,
    /// The current read position in the stream
    idx: usize,
}

impl ColorSetStream {
    /// Creates an empty stream, ready for appending
    pub fn new() -> Self {
        Self {
            data: vec![],
            idx: 0,
        }
    }

    /// Creates a stream over a copy of existing archive bytes, cursor at `0`
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            idx: 0,
        }
    }

    /// The entire buffer, independent of the read cursor
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the stream and returns its buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current read position
    pub fn position(&self) -> usize {
        self.idx
    }

    /// The number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.idx
    }

    /// Moves the read cursor back to the start of the buffer
    pub fn rewind(&mut self) {
        self.idx = 0;
    }

    /// Appends raw bytes to the stream
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn append_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    pub fn append_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_u32(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_u64(&mut self, value: u64) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_f32(&mut self, value: f32) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_f64(&mut self, value: f64) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a boolean as a single `0` or `1` byte
    pub fn append_bool(&mut self, value: bool) {
        self.append_u8(u8::from(value));
    }

    /// Appends a string as a 4-byte byte-count prefix followed by UTF-8 bytes.
    ///
    /// The empty string is encoded as a zero prefix with no payload; strings
    /// longer than [`u32::MAX`] bytes are not representable in the format.
    pub fn append_string(&mut self, value: &str) {
        let bytes = value.as_bytes();
        debug_assert!(bytes.len() <= u32::MAX as usize);
        self.append_u32(bytes.len() as u32);
        self.data.extend_from_slice(bytes);
    }

    /// Appends the four components of a color, red through alpha
    pub fn append_color(&mut self, color: &Color) {
        self.append_f32(color.r);
        self.append_f32(color.g);
        self.append_f32(color.b);
        self.append_f32(color.a);
    }

    /// Reads exactly `n` bytes from the stream and advances the cursor
    fn read_exact_bytes(&mut self, n: usize) -> Result<&[u8], StreamError> {
        let end = self
            .idx
            .checked_add(n)
            .ok_or(StreamError::OutOfBounds(usize::MAX, self.data.len()))?;
        let range = self
            .data
            .get(self.idx..end)
            .ok_or(StreamError::OutOfBounds(end, self.data.len()))?;
        self.idx = end;
        Ok(range)
    }

    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        let byte = self
            .data
            .get(self.idx)
            .copied()
            .ok_or(StreamError::OutOfBounds(self.idx + 1, self.data.len()))?;
        self.idx += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, StreamError> {
        Ok(u16::from_be_bytes(
            self.read_exact_bytes(2)?
                .try_into()
                .map_err(StreamError::SliceError)?,
        ))
    }

    pub fn read_u32(&mut self) -> Result<u32, StreamError> {
        Ok(u32::from_be_bytes(
            self.read_exact_bytes(4)?
                .try_into()
                .map_err(StreamError::SliceError)?,
        ))
    }

    pub fn read_u64(&mut self) -> Result<u64, StreamError> {
        Ok(u64::from_be_bytes(
            self.read_exact_bytes(8)?
                .try_into()
                .map_err(StreamError::SliceError)?,
        ))
    }

    pub fn read_f32(&mut self) -> Result<f32, StreamError> {
        Ok(f32::from_be_bytes(
            self.read_exact_bytes(4)?
                .try_into()
                .map_err(StreamError::SliceError)?,
        ))
    }

    pub fn read_f64(&mut self) -> Result<f64, StreamError> {
        Ok(f64::from_be_bytes(
            self.read_exact_bytes(8)?
                .try_into()
                .map_err(StreamError::SliceError)?,
        ))
    }

    /// Reads a single byte as a boolean; any non-zero value is `true`
    pub fn read_bool(&mut self) -> Result<bool, StreamError> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads `n` bytes as an owned copy; `n = 0` yields an empty buffer
    pub fn read_data(&mut self, n: usize) -> Result<Vec<u8>, StreamError> {
        Ok(self.read_exact_bytes(n)?.to_vec())
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// The cursor does not move if the prefix, the payload, or the UTF-8
    /// decode fails.
    pub fn read_string(&mut self) -> Result<String, StreamError> {
        let start = self.idx;
        match self.read_string_body() {
            Ok(string) => Ok(string),
            Err(why) => {
                self.idx = start;
                Err(why)
            }
        }
    }

    fn read_string_body(&mut self) -> Result<String, StreamError> {
        let length = self.read_u32()? as usize;
        let parsed = std::str::from_utf8(self.read_exact_bytes(length)?)
            .map_err(StreamError::StringParseError)?;
        Ok(parsed.to_string())
    }

    /// Reads four `f32` components, red through alpha.
    ///
    /// The cursor does not move if any component read fails.
    pub fn read_color(&mut self) -> Result<Color, StreamError> {
        let start = self.idx;
        match self.read_color_body() {
            Ok(color) => Ok(color),
            Err(why) => {
                self.idx = start;
                Err(why)
            }
        }
    }

    fn read_color_body(&mut self) -> Result<Color, StreamError> {
        Ok(Color::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }
}
