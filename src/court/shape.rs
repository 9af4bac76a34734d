//! Shape descriptors for court markings
//!
//! A descriptor records geometry and style only. Angles follow canvas
//! conventions: y grows downward, and an arc sweeps from its rotation through
//! its angle in the positive (screen-clockwise) direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{normalize_angle, polar_to_cartesian};

/// Straight RGBA color
pub type Color = [f32; 4];

/// Colors for court markings
pub mod colors {
    use super::Color;

    /// #8FBC8F
    pub const COURT_FLOOR: Color = [143.0 / 255.0, 188.0 / 255.0, 143.0 / 255.0, 1.0];
    /// #228B22
    pub const COURT_BORDER: Color = [34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 1.0];
    pub const LINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const GOAL_AREA: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CLEAR: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Paint attributes of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
    /// On/off lengths in pixels
    pub dash: Option<[f32; 2]>,
}

impl ShapeStyle {
    /// Stroke-only style
    pub fn stroked(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
            dash: None,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub origin: Vec2,
    pub size: Vec2,
}

impl RectShape {
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
}

/// An arc band around `center`
///
/// With equal inner and outer radius the arc is a plain curve and only its
/// stroke is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Sweep in degrees
    pub angle_deg: f32,
    /// Start direction in degrees
    pub rotation_deg: f32,
}

impl ArcShape {
    /// Centerline radius
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Start angle in radians, normalized to [0, 2π)
    #[inline]
    pub fn start_angle(&self) -> f32 {
        normalize_angle(self.rotation_deg.to_radians())
    }

    /// Sweep in radians
    #[inline]
    pub fn angular_span(&self) -> f32 {
        self.angle_deg.to_radians()
    }

    /// Point on the centerline at fraction `t` of the sweep
    pub fn point_at(&self, t: f32) -> Vec2 {
        let theta = self.start_angle() + t * self.angular_span();
        polar_to_cartesian(self.center, self.radius(), theta)
    }

    /// First and last centerline points
    pub fn end_points(&self) -> (Vec2, Vec2) {
        (self.point_at(0.0), self.point_at(1.0))
    }
}

/// Straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
}

/// Geometric primitive of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Rect(RectShape),
    Arc(ArcShape),
    Line(LineShape),
    Circle(CircleShape),
}

/// A drawable court marking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    /// Stable name, used for SVG ids and logging
    pub name: &'static str,
    pub primitive: Primitive,
    pub style: ShapeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_turn(rotation_deg: f32) -> ArcShape {
        ArcShape {
            center: Vec2::new(200.0, 0.0),
            inner_radius: 120.0,
            outer_radius: 120.0,
            angle_deg: 180.0,
            rotation_deg,
        }
    }

    #[test]
    fn test_top_arc_bulges_downward() {
        let arc = half_turn(0.0);
        let mid = arc.point_at(0.5);
        assert!((mid.x - 200.0).abs() < 1e-3);
        assert!((mid.y - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_end_points_lie_on_diameter() {
        let arc = half_turn(0.0);
        let (a, b) = arc.end_points();
        assert!((a - Vec2::new(320.0, 0.0)).length() < 1e-3);
        assert!((b - Vec2::new(80.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_bottom_arc_bulges_upward() {
        let arc = half_turn(180.0);
        let mid = arc.point_at(0.5);
        assert!((mid.x - 200.0).abs() < 1e-3);
        assert!((mid.y + 120.0).abs() < 1e-3);
    }
}
