// SPDX: CC0-1.0

pub mod axis;
pub mod config;
pub mod coords;
pub mod error;
pub mod frame;
pub mod grid;
pub mod plotter;
pub mod record;
pub mod shell;
pub mod stdlib;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;
pub mod zoom;

use core::fmt;

pub use crate::{
    config::PlotConfig,
    coords::{CoordinateSystem, ViewState},
    error::PlotError,
    frame::PlotSurface,
    surface::DrawingContext,
    zoom::{Subscription, ZoomController},
};

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
