//! Early-reflection simulation for rectangular 2D rooms, using the
//! image-source method.
//!
//! The real source is mirrored across the four walls, recursively, to an
//! arbitrary reflection order. Each resulting image source stands for one
//! reflected path; its straight-line distance to the receiver gives the
//! path's delay and inverse-distance gain. Quantizing all paths onto a
//! sample grid yields a room impulse response usable as a convolution
//! reverb kernel.
//!
//! Plotting, audio export and configuration loading live outside this
//! crate; it only consumes a room description and produces path lists and
//! sample buffers.

mod coverage;
mod image;
mod path;
mod rir;
mod room;

pub use coverage::*;
pub use image::*;
pub use path::*;
pub use rir::*;
pub use room::*;

pub use nalgebra;

use nalgebra::SVector;

pub type Float = f64;

/// A position in the room's plane. Coordinates are in whatever length
/// unit the room is described in (the default constants assume feet).
pub type Point = SVector<Float, 2>;

/// A caller-supplied value rejected at the boundary, before any
/// computation runs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("room width must be positive and finite, got {0}")]
    InvalidWidth(Float),
    #[error("room height must be positive and finite, got {0}")]
    InvalidHeight(Float),
    #[error("sample rate must be non-zero")]
    ZeroSampleRate,
    #[error("impulse response length must be positive and finite, got {0} s")]
    InvalidLength(Float),
}
