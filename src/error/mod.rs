/*!
 This module defines the types of errors that can happen when reading and
 writing colorset data.
*/

pub mod colorset;
pub mod stream;
