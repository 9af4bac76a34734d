//! Tessellation of shape descriptors into triangle lists
//!
//! All output is in canvas pixel coordinates. Strokes are centered on the
//! shape outline, fills come before strokes.

use glam::Vec2;

use super::vertex::{Vertex, push_quad};
use crate::court::{ArcShape, CircleShape, CourtGeometry, Primitive, RectShape, Shape};
use crate::consts::MAX_SEGMENTS_PER_RADIAN;
use crate::polar_to_cartesian;

/// Radii closer than this are treated as a plain curve
const BAND_EPSILON: f32 = 1e-4;

/// Tessellate every shape of the court, in painter order
pub fn tessellate(geometry: &CourtGeometry, segments_per_radian: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for shape in &geometry.shapes {
        vertices.extend(shape_vertices(shape, segments_per_radian));
    }
    vertices
}

/// Tessellate one shape (fill, then stroke)
pub fn shape_vertices(shape: &Shape, segments_per_radian: f32) -> Vec<Vertex> {
    let style = &shape.style;
    let mut vertices = Vec::new();

    match &shape.primitive {
        Primitive::Rect(rect) => {
            if let Some(fill) = style.fill {
                vertices.extend(fill_rect(rect, fill));
            }
            if let Some(stroke) = style.stroke {
                vertices.extend(stroke_rect(rect, style.stroke_width, stroke));
            }
        }
        Primitive::Arc(arc) => {
            if let Some(fill) = style.fill {
                vertices.extend(fill_arc(arc, fill, segments_per_radian));
            }
            if let Some(stroke) = style.stroke {
                vertices.extend(stroke_arc(
                    arc,
                    style.stroke_width,
                    stroke,
                    style.dash,
                    segments_per_radian,
                ));
            }
        }
        Primitive::Line(line) => {
            if let Some(stroke) = style.stroke {
                vertices.extend(stroke_line(line.from, line.to, style.stroke_width, stroke));
            }
        }
        Primitive::Circle(circle) => {
            if let Some(fill) = style.fill {
                vertices.extend(fill_circle(circle, fill, segments_per_radian));
            }
            if let Some(stroke) = style.stroke {
                vertices.extend(stroke_circle(circle, style.stroke_width, stroke, segments_per_radian));
            }
        }
    }

    vertices
}

fn segment_count(span: f32, segments_per_radian: f32) -> u32 {
    let density = segments_per_radian.clamp(0.0, MAX_SEGMENTS_PER_RADIAN);
    ((span.abs() * density) as u32).max(4)
}

/// Generate vertices for a filled rectangle
pub fn fill_rect(rect: &RectShape, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (rect.origin, rect.max());
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
        color,
    );
    vertices
}

/// Generate vertices for a rectangle outline
pub fn stroke_rect(rect: &RectShape, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (rect.origin, rect.max());
    // Extend each edge by half the width so the corners are closed
    let h = width / 2.0;
    let edges = [
        (Vec2::new(min.x - h, min.y), Vec2::new(max.x + h, min.y)),
        (Vec2::new(max.x, min.y - h), Vec2::new(max.x, max.y + h)),
        (Vec2::new(max.x + h, max.y), Vec2::new(min.x - h, max.y)),
        (Vec2::new(min.x, max.y + h), Vec2::new(min.x, min.y - h)),
    ];
    edges
        .into_iter()
        .flat_map(|(from, to)| stroke_line(from, to, width, color))
        .collect()
}

/// Generate vertices for a thick line segment
pub fn stroke_line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let offset = dir.perp() * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [from + offset, to + offset, to - offset, from - offset],
        color,
    );
    vertices
}

/// Generate vertices for a partial ring between two radii
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    theta_start: f32,
    span: f32,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let num_segments = segment_count(span, segments_per_radian);
    let mut vertices = Vec::with_capacity((num_segments as usize).saturating_mul(6));
    let edge = |theta: f32| {
        (
            polar_to_cartesian(center, inner_radius, theta),
            polar_to_cartesian(center, outer_radius, theta),
        )
    };

    let (mut inner1, mut outer1) = edge(theta_start);
    for i in 1..=num_segments {
        let theta = theta_start + span * (i as f32 / num_segments as f32);
        let (inner2, outer2) = edge(theta);
        push_quad(&mut vertices, [inner1, outer1, outer2, inner2], color);
        (inner1, outer1) = (inner2, outer2);
    }

    vertices
}

/// Fill the band between the arc's radii; a plain curve has no area
pub fn fill_arc(arc: &ArcShape, color: [f32; 4], segments_per_radian: f32) -> Vec<Vertex> {
    if arc.outer_radius - arc.inner_radius < BAND_EPSILON {
        return Vec::new();
    }
    arc_band(
        arc.center,
        arc.inner_radius,
        arc.outer_radius,
        arc.start_angle(),
        arc.angular_span(),
        color,
        segments_per_radian,
    )
}

/// Stroke an arc outline, optionally dashed along its length
pub fn stroke_arc(
    arc: &ArcShape,
    width: f32,
    color: [f32; 4],
    dash: Option<[f32; 2]>,
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let h = width / 2.0;
    let mut radii = vec![arc.outer_radius];
    if arc.outer_radius - arc.inner_radius >= BAND_EPSILON {
        radii.push(arc.inner_radius);
    }

    let mut vertices = Vec::new();
    for radius in radii {
        for (start, span) in dash_spans(radius, arc.start_angle(), arc.angular_span(), dash) {
            vertices.extend(arc_band(
                arc.center,
                (radius - h).max(0.0),
                radius + h,
                start,
                span,
                color,
                segments_per_radian,
            ));
        }
    }

    // Close a band with its two radial ends
    if arc.outer_radius - arc.inner_radius >= BAND_EPSILON {
        let end = arc.start_angle() + arc.angular_span();
        for theta in [arc.start_angle(), end] {
            vertices.extend(stroke_line(
                polar_to_cartesian(arc.center, arc.inner_radius, theta),
                polar_to_cartesian(arc.center, arc.outer_radius, theta),
                width,
                color,
            ));
        }
    }

    vertices
}

/// Split an arc into the (start, span) pieces that are "on" under a dash
/// pattern measured along a circle of `radius`.
pub fn dash_spans(radius: f32, theta_start: f32, span: f32, dash: Option<[f32; 2]>) -> Vec<(f32, f32)> {
    let Some([on, off]) = dash else {
        return vec![(theta_start, span)];
    };
    if on <= 0.0 || radius <= 0.0 {
        return vec![(theta_start, span)];
    }

    let length = radius * span;
    let period = on + off.max(0.0);
    let mut spans = Vec::new();
    let mut s = 0.0;
    while s < length {
        let end = (s + on).min(length);
        spans.push((theta_start + s / radius, (end - s) / radius));
        s += period;
    }
    spans
}

/// Generate vertices for a filled circle
pub fn fill_circle(circle: &CircleShape, color: [f32; 4], segments_per_radian: f32) -> Vec<Vertex> {
    let segments = segment_count(std::f32::consts::TAU, segments_per_radian);
    let mut vertices = Vec::with_capacity((segments as usize).saturating_mul(3));
    let center = circle.center;

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;
        let p1 = polar_to_cartesian(center, circle.radius, theta1);
        let p2 = polar_to_cartesian(center, circle.radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a circle outline (ring)
pub fn stroke_circle(circle: &CircleShape, width: f32, color: [f32; 4], segments_per_radian: f32) -> Vec<Vertex> {
    let h = width / 2.0;
    arc_band(
        circle.center,
        (circle.radius - h).max(0.0),
        circle.radius + h,
        0.0,
        std::f32::consts::TAU,
        color,
        segments_per_radian,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::{CourtParameters, colors, court_geometry};
    use std::f32::consts::PI;

    fn top_six() -> ArcShape {
        ArcShape {
            center: Vec2::new(200.0, 0.0),
            inner_radius: 120.0,
            outer_radius: 120.0,
            angle_deg: 180.0,
            rotation_deg: 0.0,
        }
    }

    #[test]
    fn test_fill_rect_covers_corners() {
        let rect = RectShape {
            origin: Vec2::ZERO,
            size: Vec2::new(40.0, 20.0),
        };
        let vertices = fill_rect(&rect, colors::COURT_FLOOR);
        assert_eq!(vertices.len(), 6);
        assert!(vertices.iter().any(|v| v.position == [40.0, 20.0]));
        assert!(vertices.iter().any(|v| v.position == [0.0, 0.0]));
    }

    #[test]
    fn test_plain_curve_has_no_fill() {
        assert!(fill_arc(&top_six(), colors::GOAL_AREA, 16.0).is_empty());
    }

    #[test]
    fn test_stroke_arc_stays_near_radius() {
        let arc = top_six();
        let vertices = stroke_arc(&arc, 3.0, colors::LINE, None, 16.0);
        assert!(!vertices.is_empty());
        for v in &vertices {
            let d = (Vec2::from(v.position) - arc.center).length();
            assert!((118.4..=121.6).contains(&d), "vertex at distance {d}");
            assert!(v.position[1] >= -1e-3);
        }
    }

    #[test]
    fn test_dash_spans_alternate() {
        // Half circle of radius 10: length 10π, dash 2 on / 2 off
        let spans = dash_spans(10.0, 0.0, PI, Some([2.0, 2.0]));
        assert_eq!(spans.len(), 8);
        assert!((spans[0].0 - 0.0).abs() < 1e-6);
        assert!((spans[0].1 - 0.2).abs() < 1e-6);
        assert!((spans[1].0 - 0.4).abs() < 1e-6);
        let last = spans.last().unwrap();
        assert!(last.0 + last.1 <= PI + 1e-5);
    }

    #[test]
    fn test_no_dash_is_single_span() {
        assert_eq!(dash_spans(10.0, 1.0, 2.0, None), vec![(1.0, 2.0)]);
        assert_eq!(dash_spans(10.0, 1.0, 2.0, Some([0.0, 1.0])), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_dashed_arc_has_gaps() {
        let arc = top_six();
        let solid = stroke_arc(&arc, 2.0, colors::LINE, None, 16.0);
        let dashed = stroke_arc(&arc, 2.0, colors::LINE, Some([10.0, 10.0]), 16.0);
        // Every dash gets at least four segments, so dashed output is larger
        // but made of many disjoint pieces
        assert!(dashed.len() > solid.len());
        assert_eq!(dashed.len() % 6, 0);
    }

    #[test]
    fn test_segment_count_is_bounded() {
        assert_eq!(segment_count(PI, 0.0), 4);
        assert_eq!(segment_count(PI, f32::NAN), 4);
        let max = segment_count(std::f32::consts::TAU, MAX_SEGMENTS_PER_RADIAN);
        assert_eq!(segment_count(std::f32::consts::TAU, 1e9), max);
        assert_eq!(segment_count(std::f32::consts::TAU, f32::INFINITY), max);
    }

    #[test]
    fn test_huge_density_tessellates() {
        let geometry = court_geometry(&CourtParameters::default());
        let capped = tessellate(&geometry, MAX_SEGMENTS_PER_RADIAN);
        assert_eq!(tessellate(&geometry, 1e9), capped);
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        assert!(stroke_line(Vec2::ONE, Vec2::ONE, 3.0, colors::LINE).is_empty());
    }

    #[test]
    fn test_tessellate_is_deterministic() {
        let geometry = court_geometry(&CourtParameters::default());
        let a = tessellate(&geometry, 16.0);
        let b = tessellate(&geometry, 16.0);
        assert_eq!(a, b);
        // Background fill comes first
        assert_eq!(a[0].color, colors::COURT_FLOOR);
    }

    #[test]
    fn test_circle_ring_width() {
        let circle = CircleShape {
            center: Vec2::new(50.0, 50.0),
            radius: 30.0,
        };
        for v in stroke_circle(&circle, 4.0, colors::LINE, 16.0) {
            let d = (Vec2::from(v.position) - circle.center).length();
            assert!((27.9..=32.1).contains(&d));
        }
        assert_eq!(fill_circle(&circle, colors::LINE, 16.0).len() % 3, 0);
    }
}
