//! Mati - movie store and handball tactical board demo
//!
//! Core modules:
//! - `court`: Pure court geometry (shape descriptors from slider values)
//! - `movies`: In-memory movie store with derived count and sorted view
//! - `renderer`: Tessellation, WebGPU pipeline, drawing stage, SVG export
//! - `router`: Client-side routes and redirects
//! - `ui`: HTML builders for the views
//! - `settings`: JSON configuration

pub mod court;
pub mod error;
pub mod movies;
pub mod renderer;
pub mod router;
pub mod settings;
pub mod ui;

pub use court::{CourtGeometry, CourtParameters, Shape, court_geometry};
pub use error::{Error, Result};
pub use movies::{FilterState, Movie, MovieStore, SortOrder};
pub use router::Route;
pub use settings::Settings;

/// Court configuration constants
pub mod consts {
    /// Slider bounds shared by all three court parameters
    pub const PARAM_MIN: f32 = 1.0;
    pub const PARAM_MAX: f32 = 40.0;
    pub const PARAM_STEP: f32 = 1.0;

    /// Board defaults
    pub const DEFAULT_PIXELS_PER_METER: f32 = 20.0;
    pub const DEFAULT_HEIGHT_METERS: f32 = 30.0;
    pub const DEFAULT_WIDTH_METERS: f32 = 20.0;

    /// Handball court markings (meters)
    pub const GOAL_AREA_RADIUS_M: f32 = 6.0;
    pub const FREE_THROW_RADIUS_M: f32 = 9.0;
    pub const CENTER_CIRCLE_RADIUS_M: f32 = 3.0;
    /// Free throw line dash, on and off length (meters)
    pub const FREE_THROW_DASH_M: f32 = 0.5;

    /// Goal zones sweep half a turn
    pub const ZONE_ANGLE_DEG: f32 = 180.0;

    /// Stroke widths (pixels)
    pub const COURT_STROKE_WIDTH: f32 = 3.0;
    pub const LINE_STROKE_WIDTH: f32 = 3.0;
    pub const FREE_THROW_STROKE_WIDTH: f32 = 2.0;

    /// Tessellation density for arcs and circles
    pub const SEGMENTS_PER_RADIAN: f32 = 16.0;
    /// Upper bound on the configurable density
    pub const MAX_SEGMENTS_PER_RADIAN: f32 = 256.0;
}

/// Convert polar (r, theta) around `center` to cartesian canvas coordinates
#[inline]
pub fn polar_to_cartesian(center: glam::Vec2, r: f32, theta: f32) -> glam::Vec2 {
    center + glam::Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
