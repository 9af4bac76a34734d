//! Crate error type
//!
//! Geometry and sorting are total; errors only come from configuration and
//! from setting up the browser surface.

/// Errors raised by configuration loading and renderer setup
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{field} = {value} is outside the slider range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("invalid slider range: min {min}, max {max}, step {step}")]
    InvalidSlider { min: f32, max: f32, step: f32 },
    #[error("segments per radian must be in (0, {max}], got {value}")]
    InvalidTessellation { value: f32, max: f32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("gpu error: {0}")]
    Gpu(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
