use serde::{Deserialize, Serialize};

/// Convert an angle in degrees to radians.
///
/// Total over all real inputs; arc-drawing primitives take radians while
/// layup data carries degrees.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// A 2D point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `center` along direction `angle_rad`.
    ///
    /// Angle 0 points along positive x; angles increase clockwise in
    /// canvas-style coordinates (y grows downward).
    pub fn on_circle(center: Point, radius: f64, angle_rad: f64) -> Self {
        Self {
            x: center.x + radius * angle_rad.cos(),
            y: center.y + radius * angle_rad.sin(),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
