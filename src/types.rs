//! Core data types for the scatter editor
//!
//! # Main Types
//!
//! - [`PointId`] - Opaque identifier, unique within a collection
//! - [`Point`] - A labeled 2D coordinate
//! - [`PointFormData`] - The editable fields submitted by the point form

use std::fmt;

/// Opaque point identifier
///
/// Identifiers are compared by value only. Generated ids look like
/// `point-7`, but any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(String);

impl PointId {
    /// Create an identifier from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PointId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A labeled point on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Identifier, immutable for the point's lifetime
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Point {
    /// Create a new point
    pub fn new(id: impl Into<PointId>, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label: label.into(),
        }
    }

    /// Build a point from submitted form data
    pub fn from_form(id: PointId, data: PointFormData) -> Self {
        Self {
            id,
            x: data.x,
            y: data.y,
            label: data.label,
        }
    }

    /// Replace the mutable fields, keeping the identifier
    pub fn apply(&mut self, data: PointFormData) {
        self.x = data.x;
        self.y = data.y;
        self.label = data.label;
    }

    /// Whether both coordinates are plottable numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fields submitted by the point form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointFormData {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl PointFormData {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

impl From<&Point> for PointFormData {
    fn from(point: &Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            label: point.label.clone(),
        }
    }
}
