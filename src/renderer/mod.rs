//! Court rendering
//!
//! Shapes are tessellated into flat-colored triangles and drawn with WebGPU.
//! The same descriptors can be exported as SVG for headless use.

pub mod pipeline;
pub mod shapes;
pub mod stage;
pub mod svg;
pub mod vertex;

pub use pipeline::RenderState;
pub use stage::Stage;
pub use svg::to_svg;
pub use vertex::Vertex;
