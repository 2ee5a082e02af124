//! Line-drawn fractals: the recursive Koch snowflake and the
//! space-filling Hilbert curve.
//!
//! Both produce an ordered run of segments that the grid rasterizes
//! one by one.  The Koch recursion carries an explicit accumulator
//! rather than mutating anything behind the call stack; the Hilbert
//! walk decodes each linear index independently, two quadrant bits
//! per scale.

use std::f64::consts::PI;

use color;
use config::FractalRequest;
use error::RenderError;
use grid::PixelGrid;
use planes::{Point, Segment};

/// Subdivide the edge `start`→`end` to the given depth, appending
/// the resulting segments to `segments` in left-to-right order along
/// the original edge.
///
/// At each level the edge A→E splits at its third points B and D,
/// and the apex C is found by rotating the B→D vector by −60° about
/// B, so every straight stretch grows a triangular spike.  Depth 0
/// is the edge itself.
pub fn koch_curve(start: Point, end: Point, depth: u32, segments: &mut Vec<Segment>) {
    if depth == 0 {
        segments.push(Segment { start, end });
        return;
    }

    let a = start;
    let b = Point::new((2.0 * start.x + end.x) / 3.0, (2.0 * start.y + end.y) / 3.0);
    let d = Point::new((start.x + 2.0 * end.x) / 3.0, (start.y + 2.0 * end.y) / 3.0);

    let angle = -PI / 3.0;
    let dx = d.x - b.x;
    let dy = d.y - b.y;
    let c = Point::new(
        b.x + dx * angle.cos() - dy * angle.sin(),
        b.y + dx * angle.sin() + dy * angle.cos(),
    );

    koch_curve(a, b, depth - 1, segments);
    koch_curve(b, c, depth - 1, segments);
    koch_curve(c, d, depth - 1, segments);
    koch_curve(d, end, depth - 1, segments);
}

/// Draw the closed snowflake outline: three Koch edges around the
/// triangle top → bottom-left → bottom-right → top, black on white.
/// The request limit is the recursion depth, default 5.
pub fn koch_snowflake(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let depth = request.effective_limit();
    let (w, h) = (f64::from(grid.width()), f64::from(grid.height()));
    let top = Point::new(w / 2.0, 0.0);
    let left = Point::new(0.0, h);
    let right = Point::new(w, h);

    let mut segments = vec![];
    koch_curve(top, left, depth, &mut segments);
    koch_curve(left, right, depth, &mut segments);
    koch_curve(right, top, depth, &mut segments);

    grid.fill(color::WHITE);
    for segment in &segments {
        grid.draw_line(segment, color::BLACK);
    }
    Ok(())
}

/// Decode a linear Hilbert index into cell coordinates on the
/// 2^order × 2^order lattice.
///
/// The standard walk: consume two bits per scale from least to most
/// significant; rx selects the horizontal half and ry (after xoring
/// with rx) the vertical one.  When ry is 0 the quadrant is a
/// mirrored copy, so the partial coordinates are reflected (for
/// rx=1) and transposed before the scale offset is added.
pub fn hilbert_cell(index: u32, order: u32) -> (u32, u32) {
    let (mut x, mut y) = (0, 0);
    let mut t = index;
    let mut s = 1;
    while s < (1 << order) {
        let rx = 1 & (t >> 1);
        let ry = 1 & (t ^ rx);
        if ry == 0 {
            if rx == 1 {
                x = s - 1 - x;
                y = s - 1 - y;
            }
            let swap = x;
            x = y;
            y = swap;
        }
        x += s * rx;
        y += s * ry;
        s <<= 1;
        t >>= 2;
    }
    (x, y)
}

/// Draw the Hilbert curve of the requested order (default 5) by
/// connecting consecutive cell centers, black on white.  The image
/// width fixes the cell size.
pub fn hilbert_curve(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    // Orders past 15 would overflow the u32 cell index, and at one
    // pixel per cell they stop being drawable long before that.
    let order = request.effective_limit().min(15);
    let n = 1u32 << order;
    let cell = f64::from(grid.width()) / f64::from(n);

    grid.fill(color::WHITE);
    let mut prev = Point::new(cell / 2.0, cell / 2.0);
    for index in 1..n * n {
        let (x, y) = hilbert_cell(index, order);
        let next = Point::new(
            f64::from(x) * cell + cell / 2.0,
            f64::from(y) * cell + cell / 2.0,
        );
        grid.draw_line(&Segment { start: prev, end: next }, color::BLACK);
        prev = next;
    }
    Ok(())
}
