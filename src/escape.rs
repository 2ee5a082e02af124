// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time family: Mandelbrot, Julia, Burning Ship, Newton,
//! and Tricorn.
//!
//! Each generator maps every pixel into its variant's window of the
//! complex plane, iterates the variant's recurrence from the
//! variant's seed, and stops when the value's magnitude crosses an
//! escape threshold or the iteration budget runs out.  The count of
//! completed iterations, normalized by the budget, drives the color.
//! A pixel that never escapes takes the boundary color: the most
//! saturated end of the ramp, or black for the Tricorn.  Magnitude
//! thresholds are tested against `norm_sqr` to skip the square root.

use itertools::iproduct;
use num::Complex;

use color;
use config::FractalRequest;
use error::RenderError;
use grid::PixelGrid;
use planes::PlaneMapper;

/// z ← z² + c from z = 0 over the [-2,2]² window, escaping at
/// magnitude 4, on the red/blue gradient.
pub fn mandelbrot(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let plane = PlaneMapper::new(
        grid.width(),
        grid.height(),
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let c = plane.pixel_to_point(x, y);
        let mut z = Complex::new(0.0, 0.0);
        let mut iterations = 0;
        while iterations < limit && z.norm_sqr() < 16.0 {
            z = z * z + c;
            iterations += 1;
        }
        let v = f64::from(iterations) / f64::from(limit);
        grid.set(x, y, color::escape_gradient(v));
    }
    Ok(())
}

/// z ← z² + c with the constant fixed from the request and z seeded
/// from the pixel itself.  Escapes at magnitude 2 and colors by the
/// hue wheel; the window corners land exactly on the edge pixels.
pub fn julia(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let c = request.julia;
    let plane = PlaneMapper::new_inclusive(
        grid.width(),
        grid.height(),
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let mut z = plane.pixel_to_point(x, y);
        let mut iterations = 0;
        while iterations < limit && z.norm_sqr() < 4.0 {
            z = z * z + c;
            iterations += 1;
        }
        let hue = if iterations < limit {
            f64::from(iterations) / f64::from(limit)
        } else {
            0.0
        };
        grid.set(x, y, color::from_hue(hue));
    }
    Ok(())
}

/// The Burning Ship: both components are folded to their absolute
/// value before each squaring, which bends the Mandelbrot's wake
/// into rigging and hulls.
pub fn burning_ship(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let plane = PlaneMapper::new(
        grid.width(),
        grid.height(),
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let c = plane.pixel_to_point(x, y);
        let mut z: Complex<f64> = Complex::new(0.0, 0.0);
        let mut iterations = 0;
        while iterations < limit && z.norm_sqr() < 16.0 {
            let folded = Complex::new(z.re.abs(), z.im.abs());
            z = folded * folded + c;
            iterations += 1;
        }
        let v = f64::from(iterations) / f64::from(limit);
        grid.set(x, y, color::escape_gradient(v));
    }
    Ok(())
}

/// Newton's method on z³ − 1, coloring each pixel by how many steps
/// it takes to land within tolerance of one of the three cube roots
/// of unity.  A zero derivative would make the step undefined, so
/// such points are treated as non-convergent instead of divided.
pub fn newton(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    const TOLERANCE: f64 = 1e-6;
    let limit = request.effective_limit();
    let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
    let roots = [
        Complex::new(1.0, 0.0),
        Complex::new(-0.5, half_sqrt3),
        Complex::new(-0.5, -half_sqrt3),
    ];
    let plane = PlaneMapper::new(
        grid.width(),
        grid.height(),
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let mut z = plane.pixel_to_point(x, y);
        let mut iterations = 0;
        while iterations < limit {
            let fz = z * z * z - Complex::new(1.0, 0.0);
            let dfz = z * z * 3.0;
            if dfz.norm_sqr() == 0.0 {
                iterations = limit;
                break;
            }
            z = z - fz / dfz;
            if roots
                .iter()
                .any(|&root| (z - root).norm_sqr() < TOLERANCE * TOLERANCE)
            {
                break;
            }
            iterations += 1;
        }
        let v = f64::from(iterations) / f64::from(limit);
        grid.set(x, y, color::escape_gradient(v));
    }
    Ok(())
}

/// z ← conj(z)² + c over [-2,1]×[-1.5,1.5], escaping at magnitude 2.
/// Colored as a grayscale ramp, with pixels that never escape left
/// pure black.
pub fn tricorn(request: &FractalRequest, grid: &mut PixelGrid) -> Result<(), RenderError> {
    let limit = request.effective_limit();
    let plane = PlaneMapper::new(
        grid.width(),
        grid.height(),
        Complex::new(-2.0, -1.5),
        Complex::new(1.0, 1.5),
    )?;

    for (x, y) in iproduct!(0..grid.width(), 0..grid.height()) {
        let c = plane.pixel_to_point(x, y);
        let mut z = Complex::new(0.0, 0.0);
        let mut iterations = 0;
        while iterations < limit {
            z = z.conj() * z.conj() + c;
            if z.norm_sqr() > 4.0 {
                break;
            }
            iterations += 1;
        }
        let shade = if iterations == limit {
            color::BLACK
        } else {
            color::grayscale(f64::from(iterations) / f64::from(limit))
        };
        grid.set(x, y, shade);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FractalType;
    use grid::Rgb;

    fn request(fractal: FractalType, width: u32, height: u32) -> FractalRequest {
        FractalRequest::new(fractal, width, height).unwrap()
    }

    #[test]
    fn mandelbrot_center_never_escapes() {
        // The image center maps to 0+0i, the canonical in-set point;
        // it must exhaust the full default budget and take the
        // boundary color.
        let request = request(FractalType::Mandelbrot, 200, 200);
        let mut grid = PixelGrid::new(200, 200);
        mandelbrot(&request, &mut grid).unwrap();
        assert_eq!(grid.get(100, 100), Rgb(255, 0, 0));
    }

    #[test]
    fn mandelbrot_far_corner_escapes_immediately() {
        let request = request(FractalType::Mandelbrot, 64, 64);
        let mut grid = PixelGrid::new(64, 64);
        mandelbrot(&request, &mut grid).unwrap();
        // (-2, -2) has |z|² = 8 after one step and 64 > 16 soon
        // after; the pixel sits at the blue end of the ramp.
        let Rgb(r, _, b) = grid.get(0, 0);
        assert!(r < 8 && b > 247);
    }

    #[test]
    fn julia_corner_pixel_gets_the_zero_hue() {
        let mut request = request(FractalType::Julia, 33, 33);
        request.julia = Complex::new(-0.8, 0.156);
        let mut grid = PixelGrid::new(33, 33);
        julia(&request, &mut grid).unwrap();
        // The corner seeds at exactly -2-2i, already past the escape
        // radius, so zero iterations complete and hue 0 applies.
        assert_eq!(grid.get(0, 0), Rgb(255, 255, 0));
    }

    #[test]
    fn newton_converges_instantly_on_a_root() {
        // With a 200-pixel window over [-2,2], x=150 maps to exactly
        // 1+0i: the first Newton step is a no-op and the root test
        // fires with zero completed iterations.
        let request = request(FractalType::Newton, 200, 200);
        let mut grid = PixelGrid::new(200, 200);
        newton(&request, &mut grid).unwrap();
        assert_eq!(grid.get(150, 100), Rgb(0, 0, 255));
    }

    #[test]
    fn tricorn_center_is_in_set() {
        // 300 pixels over a width-3 window puts pixel (200,150) on
        // exactly 0+0i, which never escapes under conjugate squaring.
        let request = request(FractalType::Tricorn, 300, 300);
        let mut grid = PixelGrid::new(300, 300);
        tricorn(&request, &mut grid).unwrap();
        assert_eq!(grid.get(200, 150), Rgb(0, 0, 0));
    }

    #[test]
    fn burning_ship_center_never_escapes() {
        let request = request(FractalType::BurningShip, 200, 200);
        let mut grid = PixelGrid::new(200, 200);
        burning_ship(&request, &mut grid).unwrap();
        assert_eq!(grid.get(100, 100), Rgb(255, 0, 0));
    }
}
