//! Court parameters driven by the board sliders

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The three numeric inputs controlling tactical board scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourtParameters {
    /// Conversion factor from meters to canvas pixels
    pub pixels_per_meter: f32,
    /// Court length along the canvas y axis (meters)
    pub height_meters: f32,
    /// Court width along the canvas x axis (meters)
    pub width_meters: f32,
}

impl Default for CourtParameters {
    fn default() -> Self {
        Self {
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            height_meters: DEFAULT_HEIGHT_METERS,
            width_meters: DEFAULT_WIDTH_METERS,
        }
    }
}

impl CourtParameters {
    /// Build parameters, clamping each value into the slider range.
    ///
    /// Non-finite values fall back to the default for that field.
    pub fn new(pixels_per_meter: f32, height_meters: f32, width_meters: f32) -> Self {
        Self {
            pixels_per_meter: clamp_param(pixels_per_meter, DEFAULT_PIXELS_PER_METER),
            height_meters: clamp_param(height_meters, DEFAULT_HEIGHT_METERS),
            width_meters: clamp_param(width_meters, DEFAULT_WIDTH_METERS),
        }
    }

    /// Same parameters with a different scale
    pub fn with_pixels_per_meter(self, value: f32) -> Self {
        Self::new(value, self.height_meters, self.width_meters)
    }

    /// Same parameters with a different court height
    pub fn with_height_meters(self, value: f32) -> Self {
        Self::new(self.pixels_per_meter, value, self.width_meters)
    }

    /// Same parameters with a different court width
    pub fn with_width_meters(self, value: f32) -> Self {
        Self::new(self.pixels_per_meter, self.height_meters, value)
    }

    /// Canvas width in pixels
    #[inline]
    pub fn canvas_width(&self) -> f32 {
        self.width_meters * self.pixels_per_meter
    }

    /// Canvas height in pixels
    #[inline]
    pub fn canvas_height(&self) -> f32 {
        self.height_meters * self.pixels_per_meter
    }

    /// Meters to pixels
    #[inline]
    pub fn px(&self, meters: f32) -> f32 {
        meters * self.pixels_per_meter
    }
}

fn clamp_param(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(PARAM_MIN, PARAM_MAX)
    } else {
        fallback
    }
}
