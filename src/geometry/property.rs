//! Named analytic properties, as shown in a property table.

use std::fmt;

use crate::math::Point2;

/// A single property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A real number. May be infinite (e.g. the period of a flat wave).
    Scalar(f64),
    /// A real number that may be undefined.
    Optional(Option<f64>),
    /// A short ordered list of reals (roots, critical points).
    Sequence(Vec<f64>),
    /// A point.
    Point(Point2),
    /// A boolean flag.
    Flag(bool),
    /// Free text (classification, orientation).
    Text(String),
}

impl PropertyValue {
    /// Returns the scalar, if this is a defined scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) | Self::Optional(Some(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns the sequence, if this is one.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[f64]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the flag, if this is one.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

fn write_real(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_infinite() {
        f.write_str(if v > 0.0 { "∞" } else { "-∞" })
    } else {
        write!(f, "{v:.4}")
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) | Self::Optional(Some(v)) => write_real(f, *v),
            Self::Optional(None) => f.write_str("none"),
            Self::Sequence(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_real(f, *v)?;
                }
                f.write_str("]")
            }
            Self::Point(p) => {
                f.write_str("(")?;
                write_real(f, p.x)?;
                f.write_str(", ")?;
                write_real(f, p.y)?;
                f.write_str(")")
            }
            Self::Flag(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Option<f64>> for PropertyValue {
    fn from(v: Option<f64>) -> Self {
        Self::Optional(v)
    }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Sequence(v)
    }
}

impl From<Point2> for PropertyValue {
    fn from(v: Point2) -> Self {
        Self::Point(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

/// Row name used by error-state tables.
pub const ERROR_KEY: &str = "error";

/// An ordered name → value table.
///
/// Row order is insertion order, which is the order a UI should display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    rows: Vec<(&'static str, PropertyValue)>,
}

impl PropertyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that only records an error state.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with(ERROR_KEY, message.into())
    }

    /// Appends a row, replacing an existing row of the same name.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a row, replacing an existing row of the same name.
    pub fn insert(&mut self, name: &'static str, value: impl Into<PropertyValue>) {
        let value = value.into();
        if let Some(row) = self.rows.iter_mut().find(|(n, _)| *n == name) {
            row.1 = value;
        } else {
            self.rows.push((name, value));
        }
    }

    /// Looks up a row by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.rows.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Shorthand for `get(name).and_then(PropertyValue::as_scalar)`.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropertyValue::as_scalar)
    }

    /// Returns whether the table is an error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.get(ERROR_KEY).is_some()
    }

    /// Iterates rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.rows.iter().map(|(n, v)| (*n, v))
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
