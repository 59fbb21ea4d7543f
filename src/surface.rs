// SPDX: CC0-1.0

use crate::{error::ParseColorError, Number, PlotError, Point, Size};
use core::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ParseColorError::Syntax(s.to_string()));
            }
            let channel = |at: usize| {
                u8::from_str_radix(&hex[at..at + 2], 16)
                    .map_err(|_| ParseColorError::Component(hex[at..at + 2].to_string()))
            };
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseColorError::Syntax(s.to_string()))?;
        let mut parts = inner.split(',').map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| ParseColorError::Component(part.to_string()))
        });
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(g), Some(b), None) => Ok(Self::rgb(r?, g?, b?)),
            _ => Err(ParseColorError::Syntax(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size_px: Number,
    pub family: String,
}

impl Font {
    pub fn monospace(size_px: Number) -> Self {
        Self {
            size_px,
            family: String::from("monospace"),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Colour and width for a stroked line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: Number,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Color, width: Number) -> Self {
        Self { color, width }
    }
}

/// A 2D immediate-mode drawing surface, modelled on the HTML canvas context.
///
/// State set through the `set_*` methods persists until changed or until a
/// matching [`restore`](DrawingContext::restore) pops it.
pub trait DrawingContext {
    /// Resizes the surface, clearing its content and resetting all state.
    fn reset(&mut self, size: Size) -> Result<(), PlotError>;
    fn size(&self) -> Size;

    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point<Number>);
    fn line_to(&mut self, p: Point<Number>);
    fn close_path(&mut self);
    fn stroke(&mut self);

    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: Number);
    fn set_global_alpha(&mut self, alpha: Number);
    fn set_fill_style(&mut self, color: Color);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, at: Point<Number>) -> Result<(), PlotError>;
}

/// Runs `f` between a `save` and a `restore`, so any style it sets does not
/// leak into later drawing.
pub fn scoped<C, T>(ctx: &mut C, f: impl FnOnce(&mut C) -> T) -> T
where
    C: DrawingContext + ?Sized,
{
    ctx.save();
    let ret = f(ctx);
    ctx.restore();
    ret
}
