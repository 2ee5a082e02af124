//! Per-pixel parameter maps: the Lyapunov exponent of the
//! alternating logistic map, and the Menger sponge membership test.

use itertools::iproduct;
use num::Complex;

use color;
use config::FractalRequest;
use error::RenderError;
use grid::{PixelGrid, Rgb};
use planes::PlaneMapper;

/// Warm-up steps discarded before the exponent sum starts, so the
/// orbit settles onto its attractor first.
const TRANSIENT: u32 = 100;

/// The Lyapunov exponent of x ← r·x·(1−x) with r alternating
/// between `a` (even steps) and `b` (odd steps), started at x=0.5.
/// The averaged log-derivative is negative for stable orbits and
/// positive for chaotic ones.
pub fn lyapunov_exponent(a: f64, b: f64, limit: u32) -> f64 {
    let mut x = 0.5;
    let mut sum = 0.0;
    for i in 0..limit {
        let r = if i % 2 == 0 { a } else { b };
        x = r * x * (1.0 - x);
        if i > TRANSIENT {
            sum += (r * (1.0 - 2.0 * x)).abs().ln();
        }
    }
    // Clamped so a budget at or below the transient cannot divide
    // by zero.
    sum / f64::from(limit.saturating_sub(TRANSIENT).max(1))
}

/// Map every pixel to (a,b) ∈ [2,4]² and color by the exponent's
/// sign and size: chaos in red, stability in blue.
pub fn lyapunov(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let plane = PlaneMapper::new(
        grid.width(),
        grid.height(),
        Complex::new(2.0, 2.0),
        Complex::new(4.0, 4.0),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let point = plane.pixel_to_point(x, y);
        let lambda = lyapunov_exponent(point.re, point.im, limit);
        let shade = if lambda >= 0.0 {
            Rgb((5.0 * lambda).min(255.0) as u8, 0, 0)
        } else {
            Rgb(0, 0, (-5.0 * lambda).min(255.0) as u8)
        };
        grid.set(x, y, shade);
    }
    Ok(())
}

/// True when the cell survives `depth` rounds of center removal:
/// at each scale, a cell whose coordinates are both ≡ 1 (mod 3)
/// falls in a removed center square; otherwise zoom out by a factor
/// of three and test again.
pub fn menger_cell(x: u32, y: u32, depth: u32) -> bool {
    let (mut x, mut y) = (x, y);
    for _ in 0..depth {
        if x % 3 == 1 && y % 3 == 1 {
            return false;
        }
        x /= 3;
        y /= 3;
    }
    true
}

/// The Menger sponge cross-section (a Sierpinski carpet): removed
/// cells white, surviving cells black.  The limit is the test
/// depth, default 4.
pub fn menger_sponge(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let depth = request.effective_limit();
    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let shade = if menger_cell(x, y, depth) {
            color::BLACK
        } else {
            color::WHITE
        };
        grid.set(x, y, shade);
    }
    Ok(())
}
