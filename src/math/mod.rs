pub mod clip;
pub mod polynomial;
pub mod sampling;

pub use clip::clip;
pub use sampling::{sample, SampleDomain};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Below this magnitude a leading coefficient (or slope, or angular
/// frequency) is treated as zero.
pub const LEADING_COEFF_TOLERANCE: f64 = 1e-12;

/// Band around zero inside which a quadratic discriminant counts as zero.
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-10;

/// Maximum imaginary magnitude for a polynomial root to count as real.
pub const ROOT_IMAG_TOLERANCE: f64 = 1e-8;

/// Minimum magnitude of an ellipse semi-axis.
pub const ELLIPSE_AXIS_TOLERANCE: f64 = 1e-9;

/// Focal distance below which an ellipse is drawn without foci.
pub const FOCUS_TOLERANCE: f64 = 1e-6;

/// Width substituted for an empty or inverted sample domain.
pub const DOMAIN_WIDENING: f64 = 1e-6;

/// Magnitude bound applied to values handed to a renderer.
pub const CLIP_LIMIT: f64 = 1e6;
