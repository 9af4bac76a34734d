//! Court geometry calculator
//!
//! Maps [`CourtParameters`] to the fixed, ordered list of court markings:
//! background, top goal zone (6m solid, 9m dashed), bottom goal zone, center
//! line and center circle.

use glam::Vec2;
use serde::Serialize;

use super::params::CourtParameters;
use super::shape::{ArcShape, CircleShape, LineShape, Primitive, RectShape, Shape, ShapeStyle, colors};
use crate::consts::*;

/// Derived, read-only court drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtGeometry {
    pub params: CourtParameters,
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Shapes in painter order
    pub shapes: Vec<Shape>,
}

impl CourtGeometry {
    pub const SHAPE_COUNT: usize = 7;

    pub const BACKGROUND: usize = 0;
    pub const TOP_SIX_METER: usize = 1;
    pub const TOP_NINE_METER: usize = 2;
    pub const BOTTOM_SIX_METER: usize = 3;
    pub const BOTTOM_NINE_METER: usize = 4;
    pub const CENTER_LINE: usize = 5;
    pub const CENTER_CIRCLE: usize = 6;

    pub fn background(&self) -> &Shape {
        &self.shapes[Self::BACKGROUND]
    }

    /// (6-meter, 9-meter) arcs of the top goal zone
    pub fn top_zone(&self) -> (&Shape, &Shape) {
        (
            &self.shapes[Self::TOP_SIX_METER],
            &self.shapes[Self::TOP_NINE_METER],
        )
    }

    /// (6-meter, 9-meter) arcs of the bottom goal zone
    pub fn bottom_zone(&self) -> (&Shape, &Shape) {
        (
            &self.shapes[Self::BOTTOM_SIX_METER],
            &self.shapes[Self::BOTTOM_NINE_METER],
        )
    }

    pub fn center_line(&self) -> &Shape {
        &self.shapes[Self::CENTER_LINE]
    }

    pub fn center_circle(&self) -> &Shape {
        &self.shapes[Self::CENTER_CIRCLE]
    }

    /// Canvas size rounded to whole pixels (at least 1x1)
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}

/// Compute the court for the given parameters.
///
/// Total over the slider domain; calling it twice with equal parameters
/// yields equal geometry.
pub fn court_geometry(params: &CourtParameters) -> CourtGeometry {
    let width = params.canvas_width();
    let height = params.canvas_height();
    let mut shapes = Vec::with_capacity(CourtGeometry::SHAPE_COUNT);

    shapes.push(Shape {
        name: "court",
        primitive: Primitive::Rect(RectShape {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        }),
        style: ShapeStyle::stroked(colors::COURT_BORDER, COURT_STROKE_WIDTH)
            .with_fill(colors::COURT_FLOOR),
    });

    let zone_center = width / 2.0;
    push_goal_zone(&mut shapes, params, Vec2::new(zone_center, 0.0), false);
    push_goal_zone(&mut shapes, params, Vec2::new(zone_center, height), true);
    push_middle(&mut shapes, params, width, height);

    CourtGeometry {
        params: *params,
        width,
        height,
        shapes,
    }
}

/// 6-meter and 9-meter zones around a goal; the bottom zone is the top one
/// turned by half a turn.
fn push_goal_zone(shapes: &mut Vec<Shape>, params: &CourtParameters, center: Vec2, is_bottom: bool) {
    let six_meter_radius = params.px(GOAL_AREA_RADIUS_M);
    let nine_meter_radius = params.px(FREE_THROW_RADIUS_M);
    let rotation_deg = if is_bottom { 180.0 } else { 0.0 };
    let dash = params.px(FREE_THROW_DASH_M);

    let zone = |radius: f32| ArcShape {
        center,
        inner_radius: radius,
        outer_radius: radius,
        angle_deg: ZONE_ANGLE_DEG,
        rotation_deg,
    };

    shapes.push(Shape {
        name: if is_bottom { "bottom_six_meter" } else { "top_six_meter" },
        primitive: Primitive::Arc(zone(six_meter_radius)),
        style: ShapeStyle::stroked(colors::LINE, COURT_STROKE_WIDTH).with_fill(colors::GOAL_AREA),
    });

    shapes.push(Shape {
        name: if is_bottom { "bottom_nine_meter" } else { "top_nine_meter" },
        primitive: Primitive::Arc(zone(nine_meter_radius)),
        style: ShapeStyle::stroked(colors::LINE, FREE_THROW_STROKE_WIDTH).with_dash(dash, dash),
    });
}

fn push_middle(shapes: &mut Vec<Shape>, params: &CourtParameters, width: f32, height: f32) {
    shapes.push(Shape {
        name: "center_line",
        primitive: Primitive::Line(LineShape {
            from: Vec2::new(0.0, height / 2.0),
            to: Vec2::new(width, height / 2.0),
        }),
        style: ShapeStyle::stroked(colors::LINE, LINE_STROKE_WIDTH),
    });

    shapes.push(Shape {
        name: "center_circle",
        primitive: Primitive::Circle(CircleShape {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: params.px(CENTER_CIRCLE_RADIUS_M),
        }),
        style: ShapeStyle::stroked(colors::LINE, LINE_STROKE_WIDTH),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arc(shape: &Shape) -> ArcShape {
        match shape.primitive {
            Primitive::Arc(arc) => arc,
            ref other => panic!("{} is not an arc: {other:?}", shape.name),
        }
    }

    #[test]
    fn test_shape_order() {
        let geometry = court_geometry(&CourtParameters::default());
        let names: Vec<_> = geometry.shapes.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "court",
                "top_six_meter",
                "top_nine_meter",
                "bottom_six_meter",
                "bottom_nine_meter",
                "center_line",
                "center_circle",
            ]
        );
    }

    #[test]
    fn test_default_court() {
        let geometry = court_geometry(&CourtParameters::default());
        assert_eq!(geometry.canvas_size(), (400, 600));

        let Primitive::Rect(rect) = geometry.background().primitive else {
            panic!("background must be a rect");
        };
        assert_eq!(rect.origin, Vec2::ZERO);
        assert_eq!(rect.size, Vec2::new(400.0, 600.0));
        assert_eq!(geometry.background().style.fill, Some(colors::COURT_FLOOR));
        assert_eq!(geometry.background().style.stroke, Some(colors::COURT_BORDER));

        let (six, nine) = geometry.top_zone();
        assert_eq!(arc(six).center, Vec2::new(200.0, 0.0));
        assert_eq!(arc(six).radius(), 120.0);
        assert_eq!(arc(nine).radius(), 180.0);
        assert_eq!(nine.style.dash, Some([10.0, 10.0]));
        assert_eq!(nine.style.fill, None);
        assert_eq!(six.style.fill, Some(colors::GOAL_AREA));

        let (six, _) = geometry.bottom_zone();
        assert_eq!(arc(six).center, Vec2::new(200.0, 600.0));

        let Primitive::Line(line) = geometry.center_line().primitive else {
            panic!("center line must be a line");
        };
        assert_eq!(line.from, Vec2::new(0.0, 300.0));
        assert_eq!(line.to, Vec2::new(400.0, 300.0));

        let Primitive::Circle(circle) = geometry.center_circle().primitive else {
            panic!("center circle must be a circle");
        };
        assert_eq!(circle.center, Vec2::new(200.0, 300.0));
        assert_eq!(circle.radius, 60.0);
        assert_eq!(geometry.center_circle().style.fill, None);
    }

    #[test]
    fn test_zones_point_into_court() {
        let geometry = court_geometry(&CourtParameters::default());
        let top = arc(geometry.top_zone().0);
        let bottom = arc(geometry.bottom_zone().0);
        assert!(top.point_at(0.5).y > 0.0);
        assert!(bottom.point_at(0.5).y < geometry.height);
    }

    fn params() -> impl Strategy<Value = CourtParameters> {
        (1u8..=40, 1u8..=40, 1u8..=40).prop_map(|(p, h, w)| {
            CourtParameters::new(f32::from(p), f32::from(h), f32::from(w))
        })
    }

    proptest! {
        #[test]
        fn prop_background_spans_canvas(params in params()) {
            let geometry = court_geometry(&params);
            let Primitive::Rect(rect) = geometry.background().primitive else {
                panic!("background must be a rect");
            };
            prop_assert_eq!(rect.size.x, params.width_meters * params.pixels_per_meter);
            prop_assert_eq!(rect.size.y, params.height_meters * params.pixels_per_meter);
        }

        #[test]
        fn prop_radii_scale_with_pixels_per_meter(params in params()) {
            let geometry = court_geometry(&params);
            let p = params.pixels_per_meter;
            for (six, nine) in [geometry.top_zone(), geometry.bottom_zone()] {
                prop_assert_eq!(arc(six).inner_radius, 6.0 * p);
                prop_assert_eq!(arc(six).outer_radius, 6.0 * p);
                prop_assert_eq!(arc(nine).inner_radius, 9.0 * p);
                prop_assert_eq!(arc(nine).outer_radius, 9.0 * p);
                prop_assert_eq!(nine.style.dash, Some([0.5 * p, 0.5 * p]));
            }
            let Primitive::Circle(circle) = geometry.center_circle().primitive else {
                panic!("center circle must be a circle");
            };
            prop_assert_eq!(circle.radius, 3.0 * p);
        }

        #[test]
        fn prop_bottom_zone_is_top_turned_half(params in params()) {
            let geometry = court_geometry(&params);
            let (top_six, top_nine) = geometry.top_zone();
            let (bottom_six, bottom_nine) = geometry.bottom_zone();
            for (top, bottom) in [(top_six, bottom_six), (top_nine, bottom_nine)] {
                let (t, b) = (arc(top), arc(bottom));
                prop_assert_eq!(b.rotation_deg - t.rotation_deg, 180.0);
                prop_assert_eq!(t.radius(), b.radius());
                prop_assert_eq!(t.angle_deg, b.angle_deg);
                prop_assert_eq!(t.center.x, b.center.x);
                prop_assert_eq!(top.style, bottom.style);
            }
        }

        #[test]
        fn prop_recompute_is_idempotent(params in params()) {
            prop_assert_eq!(court_geometry(&params), court_geometry(&params));
        }
    }
}
