pub mod curve;
pub mod marker;
pub mod property;

pub use curve::{Analyze, Curve, CurveDomain, CurveFamily, FamilyKind};
pub use marker::{MarkedPoint, Orientation, PointKind, ReferenceLine};
pub use property::{PropertyTable, PropertyValue};
