//! Geometric value types referenced by findings and rendered in reports
//!
//! The geometry kernel itself lives in the external analysis engine; this
//! module only carries the stable identifiers and small display values that
//! survive into the report document.

use serde::{Deserialize, Serialize};

/// Stable identifier of a face or edge in the source part geometry
pub type ShapeRef = u64;

/// The shapes a finding is anchored to, as recorded by the analysis engine.
///
/// Face and edge identifiers are kept separately because report anchoring
/// granularity differs per finding kind: volumetric features reference faces,
/// thin / sheet features reference edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Face identifiers in traversal order
    #[serde(default)]
    pub faces: Vec<ShapeRef>,

    /// Edge identifiers in traversal order
    #[serde(default)]
    pub edges: Vec<ShapeRef>,
}

impl Shape {
    /// Shape anchored to faces only
    pub fn faces(faces: impl Into<Vec<ShapeRef>>) -> Self {
        Self {
            faces: faces.into(),
            edges: Vec::new(),
        }
    }

    /// Shape anchored to edges only
    pub fn edges(edges: impl Into<Vec<ShapeRef>>) -> Self {
        Self {
            faces: Vec::new(),
            edges: edges.into(),
        }
    }
}

/// A 3-D axis direction, emitted as raw components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Direction {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A point in model space, used by wall-thickness probes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A two-component extent, rendered as "L x W" (or "L x R" for turned parts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent2 {
    pub first: f64,
    pub second: f64,
}

impl Extent2 {
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for Extent2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} x {:.2}", self.first, self.second)
    }
}

/// A three-component extent, rendered as "L x W x H"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent3 {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Extent3 {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl std::fmt::Display for Extent3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} x {:.2}",
            self.length, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        let dir = Direction::new(0.0, 0.7071, -0.7071);
        assert_eq!(dir.to_string(), "(0.00, 0.71, -0.71)");
    }

    #[test]
    fn test_extent_display() {
        assert_eq!(Extent2::new(120.0, 45.5).to_string(), "120.00 x 45.50");
        assert_eq!(
            Extent3::new(120.0, 45.5, 3.0).to_string(),
            "120.00 x 45.50 x 3.00"
        );
    }

    #[test]
    fn test_shape_constructors() {
        let shape = Shape::faces(vec![3, 5, 8]);
        assert_eq!(shape.faces, vec![3, 5, 8]);
        assert!(shape.edges.is_empty());

        let shape = Shape::edges(vec![11, 12]);
        assert!(shape.faces.is_empty());
        assert_eq!(shape.edges, vec![11, 12]);
    }
}
