/*!
 Data structures representing the colors and named color pairs stored in a colorset.
*/

pub mod color;
pub mod pair;

pub use color::Color;
pub use pair::ColorPair;
