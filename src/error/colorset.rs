/*!
 Errors that can happen when decoding a colorset archive or reading one from disk.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::stream::StreamError;

/// Errors that can happen when decoding a colorset archive
#[derive(Debug)]
pub enum ColorSetError {
    /// The data is not a colorset archive, or a declared length field is implausible
    InvalidFormat(String),
    /// The archive ended after the first number of entries out of the declared second
    Truncated(u32, u32),
    Stream(StreamError),
    Plist(plist::Error),
    Io(std::io::Error),
}

impl Display for ColorSetError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ColorSetError::InvalidFormat(why) => {
                write!(fmt, "Not a valid colorset archive: {why}")
            }
            ColorSetError::Truncated(parsed, declared) => {
                write!(fmt, "Archive ended after {parsed} of {declared} entries!")
            }
            ColorSetError::Stream(why) => write!(fmt, "Failed to read stream data: {why}"),
            ColorSetError::Plist(why) => write!(fmt, "Unable to parse property list: {why}"),
            ColorSetError::Io(why) => write!(fmt, "Unable to access colorset file: {why}"),
        }
    }
}
