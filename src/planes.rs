//! Coordinate mapping between the integral pixel plane, with its
//! origin at 0,0, and a rectangular window of the complex plane (or
//! of a real parameter plane, treating the real part as the first
//! axis and the imaginary part as the second).  Also holds the small
//! geometric primitives shared by the curve and IFS algorithms.

use num::Complex;

use error::RenderError;

/// Maps pixels to points inside a fixed window of the complex plane.
/// The `origin` corner corresponds to pixel (0,0) and the opposite
/// corner to the far edge of the image.  Two edge conventions exist:
/// [`new`] divides the window by the full pixel count, so the far
/// corner falls just past the last pixel, while [`new_inclusive`]
/// divides by count−1, so the first and last pixels land exactly on
/// the window corners.
///
/// [`new`]: #method.new
/// [`new_inclusive`]: #method.new_inclusive
#[derive(Debug)]
pub struct PlaneMapper {
    origin: Complex<f64>,
    // Window units per pixel along each axis.
    step: (f64, f64),
}

impl PlaneMapper {
    /// Constructor for the exclusive-edge convention.  `origin` is
    /// the window corner under pixel (0,0); `corner` is diagonally
    /// opposite and must exceed it on both axes.
    pub fn new(
        width: u32,
        height: u32,
        origin: Complex<f64>,
        corner: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        Self::build(origin, corner, (f64::from(width), f64::from(height)))
    }

    /// Constructor for the inclusive-edge convention: pixel
    /// (width−1, height−1) maps exactly onto `corner`.
    pub fn new_inclusive(
        width: u32,
        height: u32,
        origin: Complex<f64>,
        corner: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        let divisors = (
            f64::from(width.saturating_sub(1).max(1)),
            f64::from(height.saturating_sub(1).max(1)),
        );
        Self::build(origin, corner, divisors)
    }

    fn build(
        origin: Complex<f64>,
        corner: Complex<f64>,
        divisors: (f64, f64),
    ) -> Result<PlaneMapper, RenderError> {
        if corner.re <= origin.re {
            return Err(RenderError::BadWindow(
                "the origin corner is not to the left of the far corner",
            ));
        }
        if corner.im <= origin.im {
            return Err(RenderError::BadWindow(
                "the origin corner is not below the far corner",
            ));
        }

        Ok(PlaneMapper {
            origin,
            step: (
                (corner.re - origin.re) / divisors.0,
                (corner.im - origin.im) / divisors.1,
            ),
        })
    }

    /// Given the column and row of a pixel, return the complex number
    /// at the equivalent location inside the window.  The mapping is
    /// affine and monotonic on both axes.
    pub fn pixel_to_point(&self, x: u32, y: u32) -> Complex<f64> {
        Complex::new(
            self.origin.re + f64::from(x) * self.step.0,
            self.origin.im + f64::from(y) * self.step.1,
        )
    }
}

/// A point on the continuous image plane, in pixel units.  Used by
/// the curve recursions and the chaos games.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downward as in image space.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: &Point) -> f64 {
        ((self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)).sqrt()
    }
}

/// An ordered pair of endpoints.  Produced transiently by the curve
/// algorithms and consumed immediately by the line rasterizer; never
/// persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Where the segment starts.
    pub start: Point,
    /// Where the segment ends.
    pub end: Point,
}
