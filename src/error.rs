//! Error types shared by the engine and the batch driver.
//!
//! Every error is local to the request that raised it; the driver
//! reports a failed request and moves on to its siblings.

use failure::Fail;

/// Everything that can go wrong while servicing a single render
/// request.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The request asked for an image with no area.
    #[fail(display = "invalid image dimensions {}x{}", width, height)]
    InvalidDimensions {
        /// Requested width, as it appeared in the configuration.
        width: i64,
        /// Requested height, as it appeared in the configuration.
        height: i64,
    },

    /// The configuration named a fractal code outside 0..=10.
    #[fail(display = "unknown fractal variant code {}", _0)]
    UnknownVariant(i64),

    /// A complex-plane window whose corners are out of order or
    /// coincident.  The engine's windows are fixed per variant, so
    /// seeing this means a caller built its own degenerate mapper.
    #[fail(display = "degenerate complex window: {}", _0)]
    BadWindow(&'static str),
}
