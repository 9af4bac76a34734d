//! SVG export of the court
//!
//! Headless counterpart of the WebGPU stage: writes the same shape
//! descriptors as an SVG document. Used by the native binary and for
//! inspection; it is not a pixel-exact match of the GPU output.

use std::fmt::Write as _;

use crate::court::{ArcShape, CourtGeometry, Primitive, Shape, ShapeStyle};

/// Export the court as an SVG document sized to its canvas
pub fn to_svg(geometry: &CourtGeometry) -> String {
    let width = fmt_f32(geometry.width);
    let height = fmt_f32(geometry.height);

    let mut body = String::new();
    for shape in &geometry.shapes {
        write_shape(&mut body, shape);
    }

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_shape(out: &mut String, shape: &Shape) {
    let style = style_attrs(&shape.style);
    let id = shape.name;
    match &shape.primitive {
        Primitive::Rect(rect) => {
            let _ = writeln!(
                out,
                "<rect id=\"{id}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{style}/>",
                fmt_f32(rect.origin.x),
                fmt_f32(rect.origin.y),
                fmt_f32(rect.size.x),
                fmt_f32(rect.size.y),
            );
        }
        Primitive::Arc(arc) => {
            // A plain curve encloses no area; SVG would otherwise fill the chord
            let style = if arc.outer_radius - arc.inner_radius > f32::EPSILON {
                style
            } else {
                style_attrs(&ShapeStyle {
                    fill: None,
                    ..shape.style
                })
            };
            let _ = writeln!(out, "<path id=\"{id}\" d=\"{}\"{style}/>", arc_path_d(arc));
        }
        Primitive::Line(line) => {
            let _ = writeln!(
                out,
                "<line id=\"{id}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{style}/>",
                fmt_f32(line.from.x),
                fmt_f32(line.from.y),
                fmt_f32(line.to.x),
                fmt_f32(line.to.y),
            );
        }
        Primitive::Circle(circle) => {
            let _ = writeln!(
                out,
                "<circle id=\"{id}\" cx=\"{}\" cy=\"{}\" r=\"{}\"{style}/>",
                fmt_f32(circle.center.x),
                fmt_f32(circle.center.y),
                fmt_f32(circle.radius),
            );
        }
    }
}

/// Path data for an arc band. A plain curve (equal radii) is an open path;
/// a band is closed through the inner radius.
fn arc_path_d(arc: &ArcShape) -> String {
    let mut d = String::new();
    write_arc(&mut d, arc, arc.outer_radius, true);
    if arc.outer_radius - arc.inner_radius > f32::EPSILON {
        let inner = ArcShape {
            inner_radius: arc.inner_radius,
            outer_radius: arc.inner_radius,
            ..*arc
        };
        let (_, end) = inner.end_points();
        let _ = write!(d, " L{} {}", fmt_f32(end.x), fmt_f32(end.y));
        write_arc(&mut d, arc, arc.inner_radius, false);
        d.push_str(" Z");
    }
    d
}

/// Append one circular arc at `radius`, forward or backward along the sweep
fn write_arc(d: &mut String, arc: &ArcShape, radius: f32, forward: bool) {
    let curve = ArcShape {
        inner_radius: radius,
        outer_radius: radius,
        ..*arc
    };
    let (start, end) = curve.end_points();
    let (from, to) = if forward { (start, end) } else { (end, start) };
    let span = arc.angular_span();
    let r = fmt_f32(radius);

    if forward {
        let _ = write!(d, "M{} {}", fmt_f32(from.x), fmt_f32(from.y));
    }
    let sweep = u8::from(forward);
    if span >= std::f32::consts::TAU - 1e-4 {
        // A full turn needs two half arcs
        let mid = curve.point_at(0.5);
        let _ = write!(d, " A{r} {r} 0 0 {sweep} {} {}", fmt_f32(mid.x), fmt_f32(mid.y));
    }
    let large = u8::from(span > std::f32::consts::PI + 1e-4 && span < std::f32::consts::TAU - 1e-4);
    let _ = write!(d, " A{r} {r} 0 {large} {sweep} {} {}", fmt_f32(to.x), fmt_f32(to.y));
}

fn style_attrs(style: &ShapeStyle) -> String {
    let mut attrs = String::new();
    match style.fill {
        Some(color) => {
            let (rgb, a) = color_to_svg(color);
            let _ = write!(attrs, " fill=\"{rgb}\"");
            if a < 1.0 {
                let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_f32(a));
            }
        }
        None => attrs.push_str(" fill=\"none\""),
    }
    if let Some(color) = style.stroke {
        let (rgb, a) = color_to_svg(color);
        let _ = write!(
            attrs,
            " stroke=\"{rgb}\" stroke-width=\"{}\"",
            fmt_f32(style.stroke_width)
        );
        if a < 1.0 {
            let _ = write!(attrs, " stroke-opacity=\"{}\"", fmt_f32(a));
        }
    }
    if let Some([on, off]) = style.dash {
        let _ = write!(attrs, " stroke-dasharray=\"{} {}\"", fmt_f32(on), fmt_f32(off));
    }
    attrs
}

fn color_to_svg(color: [f32; 4]) -> (String, f32) {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    let byte = |c: f32| (c * 255.0).round() as u8;
    (format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b)), a)
}

fn fmt_f32(v: f32) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let i = v as i32;
    let diff = (i as f32) - v;
    if diff > -1e-4 && diff < 1e-4 {
        return format!("{i}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::{CourtParameters, court_geometry};

    #[test]
    fn test_svg_document_for_default_court() {
        let svg = to_svg(&court_geometry(&CourtParameters::default()));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"400\" height=\"600\""));
        assert!(svg.contains("<rect id=\"court\" x=\"0\" y=\"0\" width=\"400\" height=\"600\" fill=\"#8fbc8f\" stroke=\"#228b22\" stroke-width=\"3\"/>"));
        assert!(svg.contains("<circle id=\"center_circle\" cx=\"200\" cy=\"300\" r=\"60\" fill=\"none\""));
        assert!(svg.contains("<line id=\"center_line\" x1=\"0\" y1=\"300\" x2=\"400\" y2=\"300\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_zone_arcs() {
        let svg = to_svg(&court_geometry(&CourtParameters::default()));
        // Top 6m: from (320, 0) sweeping through the court to (80, 0)
        assert!(svg.contains("<path id=\"top_six_meter\" d=\"M320 0 A120 120 0 0 1 80 0\""));
        // Bottom 9m: from (20, 600) to (380, 600), dashed
        assert!(svg.contains("<path id=\"bottom_nine_meter\" d=\"M20 600 A180 180 0 0 1 380 600\""));
        assert!(svg.contains("stroke-dasharray=\"10 10\""));
        assert!(svg.contains("80 0\" fill=\"none\" stroke=\"#000000\" stroke-width=\"3\"/>"));
    }

    #[test]
    fn test_fmt_f32() {
        assert_eq!(fmt_f32(3.0), "3");
        assert_eq!(fmt_f32(0.5), "0.5");
        assert_eq!(fmt_f32(1.23456), "1.235");
    }

    #[test]
    fn test_color_to_svg() {
        assert_eq!(color_to_svg([0.0, 0.0, 0.0, 1.0]), ("#000000".to_string(), 1.0));
        assert_eq!(color_to_svg([1.0, 1.0, 1.0, 0.5]).0, "#ffffff");
    }
}
