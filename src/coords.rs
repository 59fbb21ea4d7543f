// SPDX: CC0-1.0

use crate::{Number, Point, Size};

/// Zoom ticks per scale cycle. Tick labels move one 1-2-5 step per cycle.
pub const ZOOM_PERIOD: i64 = 8;
/// Pixels added to the scale per zoom tick within a cycle.
pub const SCALE_STEP: Number = 3.0;
/// Lower bound on pixels per unit.
pub const MIN_SCALE: Number = 1.0;

/// The view parameters a frame is rendered from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewState {
    zoom_ticks: i64,
}

impl ViewState {
    #[inline]
    pub const fn new(zoom_ticks: i64) -> Self {
        Self { zoom_ticks }
    }

    #[inline]
    pub const fn zoom_ticks(&self) -> i64 {
        self.zoom_ticks
    }

    pub(crate) const fn zoomed(self, by: i64) -> Self {
        Self::new(self.zoom_ticks.saturating_add(by))
    }
}

/// Pixels per unit for `zoom_ticks`, never below [`MIN_SCALE`].
pub fn scale_for(base_scale: Number, zoom_ticks: i64) -> Number {
    let step = zoom_ticks.rem_euclid(ZOOM_PERIOD) as Number * SCALE_STEP;
    let scale = base_scale + step;
    if scale.is_finite() && scale >= MIN_SCALE {
        scale
    } else {
        MIN_SCALE
    }
}

/// Mapping between surface pixels and mathematical coordinates for one frame.
///
/// Math Y grows upward while pixel Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSystem {
    origin: Point<Number>,
    scale: Number,
    include_negative_x: bool,
    size: Size,
}

impl CoordinateSystem {
    pub fn new(size: Size, view: &ViewState, base_scale: Number, include_negative_x: bool) -> Self {
        let width = Number::from(size.width);
        let height = Number::from(size.height);
        Self {
            origin: Point::new(0.5 + 0.5 * width, 0.5 + 0.5 * height),
            scale: scale_for(base_scale, view.zoom_ticks()),
            include_negative_x,
            size,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Point<Number> {
        self.origin
    }

    #[inline]
    pub const fn scale(&self) -> Number {
        self.scale
    }

    #[inline]
    pub const fn include_negative_x(&self) -> bool {
        self.include_negative_x
    }

    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> Number {
        Number::from(self.size.width)
    }

    pub fn height(&self) -> Number {
        Number::from(self.size.height)
    }

    /// Leftmost pixel column that belongs to the plot.
    pub fn x_min(&self) -> Number {
        if self.include_negative_x {
            0.0
        } else {
            self.origin.x
        }
    }

    pub fn pixel_to_math(&self, p: Point<Number>) -> Point<Number> {
        Point::new(
            (p.x - self.origin.x) / self.scale,
            (self.origin.y - p.y) / self.scale,
        )
    }

    pub fn math_to_pixel(&self, p: Point<Number>) -> Point<Number> {
        Point::new(
            self.origin.x + p.x * self.scale,
            self.origin.y - p.y * self.scale,
        )
    }
}
