//! The render entrypoint: validate a request, hand a fresh grid to
//! the matching generator, and return the finished image.

use config::{FractalRequest, FractalType};
use curves;
use error::RenderError;
use escape;
use grid::PixelGrid;
use ifs;
use maps;

/// Render one request to a freshly allocated grid.
///
/// The engine performs no I/O and shares no state between requests;
/// ownership of the completed grid transfers to the caller, which
/// may hand it to whatever image sink it likes.  Failures are local
/// to this request.
pub fn render(request: &FractalRequest) -> Result<PixelGrid, RenderError> {
    if request.width == 0 || request.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: i64::from(request.width),
            height: i64::from(request.height),
        });
    }

    let mut grid = PixelGrid::new(request.width, request.height);
    match request.fractal {
        FractalType::Mandelbrot => escape::mandelbrot(request, &mut grid)?,
        FractalType::Julia => escape::julia(request, &mut grid)?,
        FractalType::BurningShip => escape::burning_ship(request, &mut grid)?,
        FractalType::Newton => escape::newton(request, &mut grid)?,
        FractalType::SierpinskiTriangle => ifs::sierpinski(request, &mut grid)?,
        FractalType::KochSnowflake => curves::koch_snowflake(request, &mut grid)?,
        FractalType::BarnsleyFern => ifs::barnsley_fern(request, &mut grid)?,
        FractalType::Lyapunov => maps::lyapunov(request, &mut grid)?,
        FractalType::MengerSponge => maps::menger_sponge(request, &mut grid)?,
        FractalType::HilbertCurve => curves::hilbert_curve(request, &mut grid)?,
        FractalType::Tricorn => escape::tricorn(request, &mut grid)?,
    }
    Ok(grid)
}
