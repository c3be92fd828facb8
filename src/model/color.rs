/*!
 Logic and containers for normalized RGBA color values.
*/

/// A color as four normalized RGBA components, each in `[0.0, 1.0]`
///
/// The codec carries no color space or profile metadata; components are
/// whatever the producing platform's device RGB APIs emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a 6-digit hexadecimal color string.
    ///
    /// Accepts `#RRGGBB`, `0xRRGGBB` and bare `RRGGBB` forms; the alpha
    /// component is always `1.0`.
    pub fn from_hex(string: &str) -> Option<Color> {
        let digits = string
            .strip_prefix('#')
            .or_else(|| string.strip_prefix("0x"))
            .unwrap_or(string);

        if digits.len() != 6 {
            return None;
        }

        let value = u32::from_str_radix(digits, 16).ok()?;

        let r = (value >> 16) & 0xFF;
        let g = (value >> 8) & 0xFF;
        let b = value & 0xFF;

        Some(Color::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        ))
    }

    /// Formats the color as a `#RRGGBB` string, ignoring alpha
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u32,
            (self.g * 255.0).round() as u32,
            (self.b * 255.0).round() as u32
        )
    }

    /// Builds a color from hue, saturation and lightness, each in `[0.0, 1.0]`
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Color::new(r, g, b, alpha)
    }

    /// The hue, saturation and lightness of the color, each in `[0.0, 1.0]`
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn with_hue(&self, hue: f32) -> Color {
        let (_, s, l) = self.to_hsl();
        Color::from_hsl(hue, s, l, self.a)
    }

    pub fn with_saturation(&self, saturation: f32) -> Color {
        let (h, _, l) = self.to_hsl();
        Color::from_hsl(h, saturation, l, self.a)
    }

    pub fn with_lightness(&self, lightness: f32) -> Color {
        let (h, s, _) = self.to_hsl();
        Color::from_hsl(h, s, lightness, self.a)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let mut rgb = [h + 1.0 / 3.0, h, h - 1.0 / 3.0];

    for channel in rgb.iter_mut() {
        if *channel < 0.0 {
            *channel += 1.0;
        } else if *channel > 1.0 {
            *channel -= 1.0;
        }

        *channel = if *channel * 6.0 < 1.0 {
            t1 + (t2 - t1) * 6.0 * *channel
        } else if *channel * 2.0 < 1.0 {
            t2
        } else if *channel * 3.0 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - *channel) * 6.0
        } else {
            t1
        };
    }

    (rgb[0], rgb[1], rgb[2])
}

fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let v = r.max(g).max(b);
    let m = r.min(g).min(b);
    let l = (m + v) / 2.0;

    if l <= 0.0 {
        return (0.0, 0.0, l);
    }

    let vm = v - m;
    let mut s = vm;

    if s <= 0.0 {
        return (0.0, s, l);
    }

    s /= if l <= 0.5 { v + m } else { 2.0 - v - m };

    let r2 = (v - r) / vm;
    let g2 = (v - g) / vm;
    let b2 = (v - b) / vm;

    let mut h = if r == v {
        if g == m {
            5.0 + b2
        } else {
            1.0 - g2
        }
    } else if g == v {
        if b == m {
            1.0 + r2
        } else {
            3.0 - b2
        }
    } else if r == m {
        3.0 + g2
    } else {
        5.0 - r2
    };

    h /= 6.0;

    (h, s, l)
}
