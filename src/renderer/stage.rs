//! Drawing stage owned by the tactical board view
//!
//! The stage holds the current layer (one vertex list, rebuilt from scratch on
//! every draw) and, once the browser surface is ready, the GPU render state.
//! Dropping the stage releases the GPU resources, so tearing the view down on
//! any path frees them.

use super::pipeline::RenderState;
use super::shapes::tessellate;
use super::vertex::Vertex;
use crate::court::CourtGeometry;

pub struct Stage {
    size: (u32, u32),
    segments_per_radian: f32,
    layer: Vec<Vertex>,
    render_state: Option<RenderState>,
}

impl Stage {
    pub fn new(width: u32, height: u32, segments_per_radian: f32) -> Self {
        log::info!("Stage created ({}x{})", width, height);
        Self {
            size: (width, height),
            segments_per_radian,
            layer: Vec::new(),
            render_state: None,
        }
    }

    /// Stage sized for a court, with the court already drawn into its layer
    pub fn for_geometry(geometry: &CourtGeometry, segments_per_radian: f32) -> Self {
        let (width, height) = geometry.canvas_size();
        let mut stage = Self::new(width, height, segments_per_radian);
        stage.draw(geometry);
        stage
    }

    /// Hand the GPU surface to the stage
    pub fn attach(&mut self, mut render_state: RenderState) {
        render_state.resize(self.size.0, self.size.1);
        if let Some(old) = self.render_state.replace(render_state) {
            old.destroy();
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Current layer contents in canvas pixels
    pub fn layer(&self) -> &[Vertex] {
        &self.layer
    }

    /// Replace the layer with the given court and match its canvas size
    pub fn draw(&mut self, geometry: &CourtGeometry) {
        let (width, height) = geometry.canvas_size();
        if (width, height) != self.size {
            self.size = (width, height);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(width, height);
            }
        }
        self.layer = tessellate(geometry, self.segments_per_radian);
        log::debug!(
            "Stage redrawn: {} shapes, {} vertices",
            geometry.shapes.len(),
            self.layer.len()
        );
    }

    /// Push the layer to the screen; without a surface this is a no-op
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        match self.render_state.as_mut() {
            Some(render_state) => render_state.render(&self.layer),
            None => Ok(()),
        }
    }

    /// Release the stage explicitly
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        if let Some(render_state) = self.render_state.take() {
            render_state.destroy();
        }
        log::info!("Stage destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::{CourtParameters, court_geometry};

    #[test]
    fn test_stage_sized_for_court() {
        let geometry = court_geometry(&CourtParameters::default());
        let mut stage = Stage::for_geometry(&geometry, 16.0);
        assert_eq!(stage.size(), (400, 600));
        assert!(!stage.layer().is_empty());
        assert!(stage.present().is_ok());
    }

    #[test]
    fn test_redraw_replaces_layer() {
        let geometry = court_geometry(&CourtParameters::default());
        let mut stage = Stage::for_geometry(&geometry, 16.0);
        let first = stage.layer().len();
        stage.draw(&geometry);
        stage.draw(&geometry);
        assert_eq!(stage.layer().len(), first);
    }

    #[test]
    fn test_redraw_follows_parameters() {
        let params = CourtParameters::default();
        let mut stage = Stage::for_geometry(&court_geometry(&params), 16.0);
        stage.draw(&court_geometry(&params.with_width_meters(10.0)));
        assert_eq!(stage.size(), (200, 600));
    }

    #[test]
    fn test_present_without_surface_is_noop() {
        let mut stage = Stage::new(10, 10, 16.0);
        assert!(stage.present().is_ok());
        stage.destroy();
    }
}
