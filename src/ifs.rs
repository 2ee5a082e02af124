//! Stochastic iterated function systems: the chaos-game Sierpinski
//! triangle and the Barnsley fern.
//!
//! Both trace a Markov chain of affine moves, plotting a single
//! pixel at every stop.  Each render owns a private generator seeded
//! from the request, so the same request always reproduces the same
//! point cloud and parallel renders never share randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use color;
use config::FractalRequest;
use error::RenderError;
use grid::PixelGrid;
use planes::Point;

/// The chaos game: from a random starting pixel, repeatedly move
/// halfway toward one of the triangle's three vertices chosen
/// uniformly at random, plotting black on white.  The limit is the
/// chain length, default 100000.
pub fn sierpinski(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let (w, h) = (f64::from(grid.width()), f64::from(grid.height()));
    let vertices = [
        Point::new(w / 2.0, 0.0),
        Point::new(0.0, h),
        Point::new(w, h),
    ];

    let mut rng = StdRng::seed_from_u64(request.seed);
    let mut point = Point::new(
        f64::from(rng.gen_range(0, grid.width())),
        f64::from(rng.gen_range(0, grid.height())),
    );

    grid.fill(color::WHITE);
    for _ in 0..limit {
        let vertex: usize = rng.gen_range(0, 3);
        point = point.midpoint(&vertices[vertex]);
        grid.plot(point.x as i64, point.y as i64, color::BLACK);
    }
    Ok(())
}

/// The Barnsley fern: one of four affine contractions is drawn each
/// step by a weighted lottery (1% stem, 85% main frond, 7% each
/// side leaflet), walking a point through fern space.  Fern space is
/// roughly [-2.5, 2.5] × [0, 11]; a fixed scale-and-flip lands it in
/// pixel space, and out-of-frame stops are simply not drawn.  The
/// limit is the chain length, default 50000.
pub fn barnsley_fern(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let (w, h) = (f64::from(grid.width()), f64::from(grid.height()));

    let mut rng = StdRng::seed_from_u64(request.seed);
    let mut point = Point::new(0.0, 0.0);

    for _ in 0..limit {
        let draw: f64 = rng.gen();
        point = if draw < 0.01 {
            Point::new(0.0, 0.16 * point.y)
        } else if draw < 0.86 {
            Point::new(
                0.85 * point.x + 0.04 * point.y,
                -0.04 * point.x + 0.85 * point.y + 1.6,
            )
        } else if draw < 0.93 {
            Point::new(
                0.2 * point.x - 0.26 * point.y,
                0.23 * point.x + 0.22 * point.y + 1.6,
            )
        } else {
            Point::new(
                -0.15 * point.x + 0.28 * point.y,
                0.26 * point.x + 0.24 * point.y + 0.44,
            )
        };

        let x = ((point.x + 2.5) * (w / 5.5)) as i64;
        let y = ((h - 20.0) - point.y * (h / 11.0)) as i64;
        grid.plot(x, y, color::GREEN);
    }
    Ok(())
}
