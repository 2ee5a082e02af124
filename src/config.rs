//! The render request model and the batch configuration records
//! that produce it.
//!
//! A batch file is a JSON object with a `FractalConfigurations`
//! array, each entry naming a variant by its numeric code plus the
//! image size, seed, iteration cap, and (for Julia) the complex
//! constant.  Records are deserialized as-is into [`JobSpec`] and
//! validated into [`FractalRequest`] values one at a time, so one
//! malformed record never takes down its siblings.
//!
//! [`JobSpec`]: struct.JobSpec.html
//! [`FractalRequest`]: struct.FractalRequest.html

use std::fs::File;
use std::path::Path;

use failure;
use num::Complex;
use serde::Deserialize;

use error::RenderError;

/// The eleven supported fractal variants.  The discriminants match
/// the numeric codes used by configuration files, 0 through 10.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FractalType {
    /// z ← z² + c from z = 0 over [-2,2]².
    Mandelbrot,
    /// z ← z² + c with c fixed and z seeded from the pixel.
    Julia,
    /// z ← (|Re z| + i|Im z|)² + c.
    BurningShip,
    /// Newton's method on z³ − 1, colored by convergence speed.
    Newton,
    /// The chaos-game Sierpinski triangle.
    SierpinskiTriangle,
    /// The recursive Koch snowflake outline.
    KochSnowflake,
    /// The four-map Barnsley fern attractor.
    BarnsleyFern,
    /// Lyapunov exponent of the alternating logistic map.
    Lyapunov,
    /// The Menger sponge (Sierpinski carpet) membership test.
    MengerSponge,
    /// The space-filling Hilbert curve.
    HilbertCurve,
    /// z ← conj(z)² + c, the Mandelbrot's mirror twin.
    Tricorn,
}

impl FractalType {
    /// Look a variant up by its numeric configuration code.
    pub fn from_code(code: i64) -> Option<FractalType> {
        match code {
            0 => Some(FractalType::Mandelbrot),
            1 => Some(FractalType::Julia),
            2 => Some(FractalType::BurningShip),
            3 => Some(FractalType::Newton),
            4 => Some(FractalType::SierpinskiTriangle),
            5 => Some(FractalType::KochSnowflake),
            6 => Some(FractalType::BarnsleyFern),
            7 => Some(FractalType::Lyapunov),
            8 => Some(FractalType::MengerSponge),
            9 => Some(FractalType::HilbertCurve),
            10 => Some(FractalType::Tricorn),
            _ => None,
        }
    }

    /// A human-readable name for progress lines.
    pub fn name(self) -> &'static str {
        match self {
            FractalType::Mandelbrot => "Mandelbrot",
            FractalType::Julia => "Julia",
            FractalType::BurningShip => "Burning Ship",
            FractalType::Newton => "Newton",
            FractalType::SierpinskiTriangle => "Sierpinski Triangle",
            FractalType::KochSnowflake => "Koch Snowflake",
            FractalType::BarnsleyFern => "Barnsley Fern",
            FractalType::Lyapunov => "Lyapunov",
            FractalType::MengerSponge => "Menger Sponge",
            FractalType::HilbertCurve => "Hilbert Curve",
            FractalType::Tricorn => "Tricorn",
        }
    }

    /// The iteration budget used when a request leaves its limit at
    /// zero.  For the point-iterated variants this is a per-pixel or
    /// per-chain step count; for the curve and sponge variants it is
    /// a recursion depth or order.
    pub fn default_limit(self) -> u32 {
        match self {
            FractalType::Julia => 5000,
            FractalType::SierpinskiTriangle => 100_000,
            FractalType::BarnsleyFern => 50_000,
            FractalType::KochSnowflake | FractalType::HilbertCurve => 5,
            FractalType::MengerSponge => 4,
            _ => 1000,
        }
    }
}

/// One validated, immutable render request.  Construction enforces
/// a non-empty image; everything else has a workable zero default.
#[derive(Copy, Clone, Debug)]
pub struct FractalRequest {
    /// Which generator to run.
    pub fractal: FractalType,
    /// Output width in pixels; never zero.
    pub width: u32,
    /// Output height in pixels; never zero.
    pub height: u32,
    /// Iteration cap, chain length, or recursion depth depending on
    /// the variant.  Zero selects the variant default.
    pub limit: u32,
    /// Seed for the stochastic generators; a request rendered twice
    /// with the same seed produces byte-identical output.
    pub seed: u64,
    /// The Julia constant.  Ignored by every other variant.
    pub julia: Complex<f64>,
}

impl FractalRequest {
    /// Constructor.  Rejects empty images; the remaining fields can
    /// be set directly afterwards.
    pub fn new(fractal: FractalType, width: u32, height: u32) -> Result<FractalRequest, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        Ok(FractalRequest {
            fractal,
            width,
            height,
            limit: 0,
            seed: 0,
            julia: Complex::new(0.0, 0.0),
        })
    }

    /// The iteration budget actually in force: the request's own
    /// limit, or the variant default when the limit is zero.
    pub fn effective_limit(&self) -> u32 {
        if self.limit != 0 {
            self.limit
        } else {
            self.fractal.default_limit()
        }
    }
}

/// One record of the batch configuration file, exactly as it
/// appears on disk.  Field names follow the original schema; any
/// omitted field defaults to zero, which `request` then rejects or
/// resolves as appropriate.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobSpec {
    /// Seed handed to the stochastic generators.
    pub seed: u64,
    /// Image width in pixels.
    pub width: i64,
    /// Image height in pixels.
    pub height: i64,
    /// Numeric variant code, 0 through 10.
    pub fractal: i64,
    /// Real part of the Julia constant.
    pub julia_real: f64,
    /// Imaginary part of the Julia constant.
    pub julia_imag: f64,
    /// Iteration cap; zero selects the variant default.
    pub max_iterations: u32,
}

impl JobSpec {
    /// Validate this record into an engine request.
    pub fn request(&self) -> Result<FractalRequest, RenderError> {
        let fractal =
            FractalType::from_code(self.fractal).ok_or(RenderError::UnknownVariant(self.fractal))?;
        if self.width <= 0 || self.height <= 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let mut request = FractalRequest::new(fractal, self.width as u32, self.height as u32)?;
        request.limit = self.max_iterations;
        request.seed = self.seed;
        request.julia = Complex::new(self.julia_real, self.julia_imag);
        Ok(request)
    }
}

#[derive(Clone, Debug, Deserialize)]
struct Batch {
    #[serde(rename = "FractalConfigurations")]
    fractal_configurations: Vec<JobSpec>,
}

/// Read an ordered batch of job records from a JSON file.  A job's
/// position in the returned vector is its id for output naming.
pub fn load_jobs<P: AsRef<Path>>(path: P) -> Result<Vec<JobSpec>, failure::Error> {
    let file = File::open(path.as_ref())?;
    let batch: Batch = serde_json::from_reader(file)?;
    Ok(batch.fractal_configurations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips() {
        for code in 0..=10 {
            let fractal = FractalType::from_code(code).unwrap();
            assert!(!fractal.name().is_empty());
            assert!(fractal.default_limit() > 0);
        }
        assert_eq!(FractalType::from_code(11), None);
        assert_eq!(FractalType::from_code(-1), None);
    }

    #[test]
    fn empty_images_are_rejected() {
        assert_eq!(
            FractalRequest::new(FractalType::Mandelbrot, 0, 32).unwrap_err(),
            RenderError::InvalidDimensions { width: 0, height: 32 }
        );
        let spec = JobSpec {
            width: -4,
            height: 100,
            ..JobSpec::default()
        };
        assert_eq!(
            spec.request().unwrap_err(),
            RenderError::InvalidDimensions { width: -4, height: 100 }
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let spec = JobSpec {
            width: 10,
            height: 10,
            fractal: 42,
            ..JobSpec::default()
        };
        assert_eq!(spec.request().unwrap_err(), RenderError::UnknownVariant(42));
    }

    #[test]
    fn limit_defaults_per_variant() {
        let mut request = FractalRequest::new(FractalType::Julia, 8, 8).unwrap();
        assert_eq!(request.effective_limit(), 5000);
        request.limit = 77;
        assert_eq!(request.effective_limit(), 77);
    }

    #[test]
    fn records_deserialize_with_defaults() {
        let json = r#"{
            "Seed": 12, "Width": 640, "Height": 480, "Fractal": 1,
            "JuliaReal": -0.8, "JuliaImag": 0.156
        }"#;
        let spec: JobSpec = ::serde_json::from_str(json).unwrap();
        let request = spec.request().unwrap();
        assert_eq!(request.fractal, FractalType::Julia);
        assert_eq!(request.seed, 12);
        assert_eq!(request.julia, Complex::new(-0.8, 0.156));
        assert_eq!(request.limit, 0);
        assert_eq!(request.effective_limit(), 5000);
    }
}
