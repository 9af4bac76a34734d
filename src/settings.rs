//! Board settings
//!
//! Loaded from JSON: an inline `<script id="mati-settings">` element in the
//! browser, or a file on native. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::court::CourtParameters;
use crate::error::{Error, Result};

/// Slider bounds for the court inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: PARAM_MIN,
            max: PARAM_MAX,
            step: PARAM_STEP,
        }
    }
}

impl SliderRange {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Court shown when the board opens
    pub court: CourtParameters,
    /// Bounds of the three sliders
    pub slider: SliderRange,
    /// Tessellation density for arcs and circles
    pub segments_per_radian: f32,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court: CourtParameters::default(),
            slider: SliderRange::default(),
            segments_per_radian: SEGMENTS_PER_RADIAN,
            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Inline settings element id (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "mati-settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject slider ranges outside the court domain and defaults outside the
    /// slider range
    pub fn validate(&self) -> Result<()> {
        let SliderRange { min, max, step } = self.slider;
        if !(min.is_finite() && max.is_finite() && step.is_finite())
            || step <= 0.0
            || min < PARAM_MIN
            || max > PARAM_MAX
            || min > max
        {
            return Err(Error::InvalidSlider { min, max, step });
        }

        let fields = [
            ("pixelsPerMeter", self.court.pixels_per_meter),
            ("heightMeters", self.court.height_meters),
            ("widthMeters", self.court.width_meters),
        ];
        for (field, value) in fields {
            if !self.slider.contains(value) {
                return Err(Error::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }

        let density = self.segments_per_radian;
        if !(density.is_finite() && density > 0.0 && density <= MAX_SEGMENTS_PER_RADIAN) {
            return Err(Error::InvalidTessellation {
                value: density,
                max: MAX_SEGMENTS_PER_RADIAN,
            });
        }
        Ok(())
    }

    /// Tessellation density, falling back to the default when unusable
    pub fn segments_per_radian(&self) -> f32 {
        if self.segments_per_radian.is_finite() && self.segments_per_radian > 0.0 {
            self.segments_per_radian.min(MAX_SEGMENTS_PER_RADIAN)
        } else {
            SEGMENTS_PER_RADIAN
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID));

        match element.and_then(|e| e.text_content()) {
            Some(json) if !json.trim().is_empty() => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from page");
                Ok(settings)
            }
            _ => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from an optional file path (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
