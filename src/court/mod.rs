//! Handball court geometry
//!
//! Everything here is pure: the court is a function of three slider values
//! and is recomputed from scratch on every change. Rendering lives in
//! `renderer` and only ever reads these descriptors.

pub mod geometry;
pub mod params;
pub mod shape;

pub use geometry::{CourtGeometry, court_geometry};
pub use params::CourtParameters;
pub use shape::{ArcShape, CircleShape, LineShape, Primitive, RectShape, Shape, ShapeStyle, colors};
