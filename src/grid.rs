//! The in-memory pixel grid that every generator writes into.
//!
//! A grid is allocated once per render at its final size, mutated in
//! place by the selected algorithm, and then read out by the bitmap
//! encoder.  Writes are direct indexed stores into a flat RGB byte
//! buffer; nothing is allocated per pixel.

use planes::Segment;

/// A single color, one byte per channel: red, green, blue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// An owned width×height raster of [`Rgb`] values.
///
/// [`Rgb`]: struct.Rgb.html
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a grid of the given size, filled with black.
    pub fn new(width: u32, height: u32) -> PixelGrid {
        PixelGrid {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 3],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.data.chunks_mut(3) {
            pixel[0] = color.0;
            pixel[1] = color.1;
            pixel[2] = color.2;
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }

    /// Store `color` at (x, y).  The coordinates must be in bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        assert!(x < self.width && y < self.height);
        let offset = self.offset(x, y);
        self.data[offset] = color.0;
        self.data[offset + 1] = color.1;
        self.data[offset + 2] = color.2;
    }

    /// Read the color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height);
        let offset = self.offset(x, y);
        Rgb(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }

    /// Store `color` at (x, y) if that pixel exists, and silently do
    /// nothing otherwise.  The chaos games and curve spikes wander
    /// off the canvas; those points are simply not drawn.
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        self.set(x as u32, y as u32, color);
    }

    /// Rasterize a segment with Bresenham's algorithm, clipping any
    /// part that falls outside the grid.
    pub fn draw_line(&mut self, segment: &Segment, color: Rgb) {
        let mut x0 = segment.start.x.round() as i64;
        let mut y0 = segment.start.y.round() as i64;
        let x1 = segment.end.x.round() as i64;
        let y1 = segment.end.y.round() as i64;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// The raw interleaved RGB bytes, row-major from the top-left
    /// pixel.  This is the layout bitmap encoders consume.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planes::Point;

    #[test]
    fn set_then_get() {
        let mut grid = PixelGrid::new(4, 3);
        grid.set(3, 2, Rgb(10, 20, 30));
        assert_eq!(grid.get(3, 2), Rgb(10, 20, 30));
        assert_eq!(grid.get(0, 0), Rgb(0, 0, 0));
    }

    #[test]
    fn plot_ignores_out_of_bounds() {
        let mut grid = PixelGrid::new(4, 4);
        grid.plot(-1, 0, Rgb(255, 255, 255));
        grid.plot(0, 4, Rgb(255, 255, 255));
        grid.plot(1_000_000, 1_000_000, Rgb(255, 255, 255));
        assert!(grid.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut grid = PixelGrid::new(3, 3);
        grid.fill(Rgb(1, 2, 3));
        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(grid.get(x, y), Rgb(1, 2, 3));
            }
        }
    }

    #[test]
    fn horizontal_line_covers_the_row() {
        let mut grid = PixelGrid::new(8, 4);
        let segment = Segment {
            start: Point::new(0.0, 2.0),
            end: Point::new(7.0, 2.0),
        };
        grid.draw_line(&segment, Rgb(255, 0, 0));
        for x in 0..8 {
            assert_eq!(grid.get(x, 2), Rgb(255, 0, 0));
        }
        assert_eq!(grid.get(0, 1), Rgb(0, 0, 0));
    }

    #[test]
    fn diagonal_line_is_clipped_not_panicking() {
        let mut grid = PixelGrid::new(4, 4);
        let segment = Segment {
            start: Point::new(-3.0, -3.0),
            end: Point::new(6.0, 6.0),
        };
        grid.draw_line(&segment, Rgb(9, 9, 9));
        assert_eq!(grid.get(1, 1), Rgb(9, 9, 9));
    }
}
