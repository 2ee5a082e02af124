//! Pure scalar-to-color mappings.  Every function here turns a
//! normalized value (iteration ratio, hue, exponent) into a single
//! [`Rgb`]; none of them carry state.
//!
//! [`Rgb`]: ../grid/struct.Rgb.html

use grid::Rgb;

/// Solid black.
pub const BLACK: Rgb = Rgb(0, 0, 0);
/// Solid white.
pub const WHITE: Rgb = Rgb(255, 255, 255);
/// The fern green, matching the classic renders.
pub const GREEN: Rgb = Rgb(0, 128, 0);

/// Map a hue in [0, 1) around the color wheel to a fully saturated
/// color, in six linear sectors starting at yellow.
pub fn from_hue(hue: f64) -> Rgb {
    if hue < 1.0 / 6.0 {
        Rgb((255.0 * (1.0 - 6.0 * hue)) as u8, 255, 0)
    } else if hue < 1.0 / 3.0 {
        Rgb(0, 255, (255.0 * (6.0 * hue - 1.0)) as u8)
    } else if hue < 1.0 / 2.0 {
        Rgb(0, (255.0 * (2.0 - 6.0 * hue)) as u8, 255)
    } else if hue < 2.0 / 3.0 {
        Rgb((255.0 * (6.0 * hue - 3.0)) as u8, 0, 255)
    } else if hue < 5.0 / 6.0 {
        Rgb(255, 0, (255.0 * (4.0 - 6.0 * hue)) as u8)
    } else {
        Rgb(255, (255.0 * (6.0 * hue - 5.0)) as u8, 0)
    }
}

/// The red/blue ramp used by the escape-time renders: 0 ("escaped
/// immediately") is pure blue, 1 ("never escaped") is pure red.
pub fn escape_gradient(v: f64) -> Rgb {
    Rgb((v * 255.0) as u8, 0, ((1.0 - v) * 255.0) as u8)
}

/// A plain grayscale ramp from black (0) to white (1).
pub fn grayscale(v: f64) -> Rgb {
    let channel = (v * 255.0) as u8;
    Rgb(channel, channel, channel)
}
