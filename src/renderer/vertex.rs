//! Vertex type shared by tessellation and the GPU pipeline

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::court::shape::Color;

/// Flat-colored 2D vertex; position in canvas pixels until uploaded
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(point: Vec2, color: Color) -> Self {
        Self::new(point.x, point.y, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Append `quad` (a, b, c, d in winding order) as two triangles
pub fn push_quad(out: &mut Vec<Vertex>, quad: [Vec2; 4], color: Color) {
    let [a, b, c, d] = quad;
    out.extend([a, b, d, d, b, c].map(|p| Vertex::at(p, color)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 8);
    }

    #[test]
    fn test_push_quad_emits_two_triangles() {
        let mut out = Vec::new();
        push_quad(
            &mut out,
            [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
            [1.0; 4],
        );
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].position, [0.0, 0.0]);
        assert_eq!(out[5].position, [1.0, 1.0]);
    }
}
