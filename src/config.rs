// SPDX: CC0-1.0

use crate::{
    surface::{Color, Font, Stroke},
    Number, Size,
};
use core::fmt;

pub const DEFAULT_SIZE: Size = Size::new(750, 750);
/// Largest accepted width or height, in pixels.
pub const MAX_SIDE: u32 = 8192;
pub const DEFAULT_BASE_SCALE: Number = 80.0;
pub const DEFAULT_SAMPLE_STRIDE: Number = 4.0;
pub const GRID_COLOR: Color = Color::rgb(100, 100, 100);
pub const AXES_COLOR: Color = Color::rgb(255, 128, 128);
pub const FUNCTION_COLOR: Color = Color::rgb(66, 44, 255);

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub size: Size,
    /// Pixels per unit at zoom tick 0.
    pub base_scale: Number,
    pub include_negative_x: bool,
    /// Pixel distance between function samples.
    pub sample_stride: Number,
    pub grid_color: Color,
    pub axes_color: Color,
    pub label_font: Font,
    pub function: Stroke,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            base_scale: DEFAULT_BASE_SCALE,
            include_negative_x: true,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            grid_color: GRID_COLOR,
            axes_color: AXES_COLOR,
            label_font: Font::monospace(20.0),
            function: Stroke::new(FUNCTION_COLOR, 1.0),
        }
    }
}

impl fmt::Display for PlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotConfig")
            .field("size", &format_args!("{}", self.size))
            .field("base scale", &self.base_scale)
            .field("negative x", &self.include_negative_x)
            .field("sample stride", &self.sample_stride)
            .field("function color", &format_args!("{}", self.function.color))
            .field("function width", &self.function.width)
            .finish()
    }
}
