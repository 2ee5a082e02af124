#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batch fractal renderer
//!
//! Renders raster images of mathematical fractals from an ordered
//! list of per-image parameter records, one bitmap per record.  The
//! engine covers three families: escape-time sets (Mandelbrot,
//! Julia, Burning Ship, Newton, Tricorn), where a complex recurrence
//! is iterated per pixel until its magnitude escapes a threshold or
//! an iteration budget runs out; stochastic iterated function
//! systems (Sierpinski triangle, Barnsley fern), where a single
//! point is bounced through randomly chosen affine contractions and
//! plotted at every stop; and deterministic curve and membership
//! maps (Koch snowflake, Hilbert curve, Menger sponge, Lyapunov
//! exponent), which are drawn by recursion, index decoding, or a
//! per-pixel ternary test.
//!
//! A render is a pure function from a [`FractalRequest`] to a
//! [`PixelGrid`]; the engine never touches the filesystem.  The
//! stochastic generators are seeded from the request, so rendering
//! the same request twice produces byte-identical grids.  Encoding
//! the grid to a bitmap and walking the batch configuration live in
//! the `fractgen` binary.
//!
//! [`FractalRequest`]: config/struct.FractalRequest.html
//! [`PixelGrid`]: grid/struct.PixelGrid.html

extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod color;
pub mod config;
pub mod curves;
pub mod error;
pub mod escape;
pub mod grid;
pub mod ifs;
pub mod maps;
pub mod planes;
pub mod render;

pub use config::{load_jobs, FractalRequest, FractalType, JobSpec};
pub use error::RenderError;
pub use grid::{PixelGrid, Rgb};
pub use render::render;
