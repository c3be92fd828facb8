#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod colorset;
pub mod error;
pub mod model;
pub mod stream;
