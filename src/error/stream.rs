/*!
 Errors that can happen when reading typed values from a colorset byte stream.
*/

use std::{
    array::TryFromSliceError,
    fmt::{Display, Formatter, Result},
    str::Utf8Error,
};

/// Errors that can happen when reading typed values from a colorset byte stream
#[derive(Debug)]
pub enum StreamError {
    /// A read needed bytes up to the first index, but the buffer only holds the second
    OutOfBounds(usize, usize),
    SliceError(TryFromSliceError),
    StringParseError(Utf8Error),
}

impl Display for StreamError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            StreamError::OutOfBounds(end, len) => {
                write!(fmt, "Read up to index {end:x} is outside of range {len:x}!")
            }
            StreamError::SliceError(why) => {
                write!(fmt, "Unable to slice source stream: {why}")
            }
            StreamError::StringParseError(why) => write!(fmt, "Failed to parse string: {why}"),
        }
    }
}
