// SPDX: CC0-1.0

use thiserror::Error;

/// Failures reported to the host. Sampling problems never show up here:
/// non-finite function values are skipped while plotting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    #[error("drawing surface is unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("drawing surface has no area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("drawing surface is too large ({width}x{height}, at most {max} per side)")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },

    #[error("drawing backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected 'rgb(r,g,b)' or '#rrggbb', found '{0}'")]
    Syntax(String),

    #[error("invalid color component '{0}'")]
    Component(String),
}
