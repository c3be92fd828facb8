/*!
 A named colorset entry: a primary color plus an optional variant for
 alternate appearances such as dark mode.
*/

use crate::model::color::Color;

/// A primary color and its optional variant
///
/// Pairs are plain values; a decoded pair is never mutated in place, the
/// owning [`ColorSet`](crate::colorset::ColorSet) replaces entries wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    /// The main/primary color
    pub color: Color,
    /// An optional color variant to use on dark interfaces
    pub variant: Option<Color>,
}

impl ColorPair {
    pub const fn new(color: Color, variant: Option<Color>) -> Self {
        Self { color, variant }
    }
}
