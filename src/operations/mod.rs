mod analyze;

pub use analyze::{AnalyzeCurve, CurveReport};
