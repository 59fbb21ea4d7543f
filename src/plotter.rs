// SPDX: CC0-1.0

use crate::{
    coords::CoordinateSystem,
    surface::{scoped, DrawingContext, Stroke},
    Number, Point,
};

/// Smallest sampling stride, in pixels.
pub const MIN_STRIDE: Number = 0.25;

fn effective_stride(stride: Number) -> Number {
    if stride.is_finite() && stride >= MIN_STRIDE {
        stride
    } else {
        MIN_STRIDE
    }
}

/// Rounds half-way cases toward positive infinity, so `-93.5` becomes `-93`.
fn round_half_up(x: Number) -> i64 {
    (x + 0.5).floor() as i64
}

/// Range of sample indices covering the visible part of the X axis.
pub fn sample_range(coords: &CoordinateSystem, stride: Number) -> core::ops::RangeInclusive<i64> {
    let stride = effective_stride(stride);
    let origin_x = coords.origin().x;
    let i_max = round_half_up((coords.width() - origin_x) / stride);
    let i_min = if coords.include_negative_x() {
        round_half_up(-origin_x / stride)
    } else {
        0
    };
    i_min..=i_max
}

/// Pixel positions of `f` sampled every `stride` pixels along X, from left
/// to right. Samples where `f` is not finite come out as `None`.
pub fn samples<F>(
    coords: &CoordinateSystem,
    stride: Number,
    mut f: F,
) -> impl Iterator<Item = Option<Point<Number>>>
where
    F: FnMut(Number) -> Number,
{
    let stride = effective_stride(stride);
    let origin = coords.origin();
    let scale = coords.scale();
    sample_range(coords, stride).map(move |i| {
        let xx = stride * i as Number;
        let yy = scale * f(xx / scale);
        let p = Point::new(origin.x + xx, origin.y - yy);
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    })
}

/// Strokes a function as a polyline.
#[derive(Clone, Copy, Debug)]
pub struct FunctionPlotter {
    pub stroke: Stroke,
    pub stride: Number,
}

impl FunctionPlotter {
    pub const fn new(stroke: Stroke, stride: Number) -> Self {
        Self { stroke, stride }
    }

    /// Plots `f` and returns how many samples were drawn. A non-finite
    /// sample breaks the line; drawing resumes at the next finite one.
    pub fn plot<C, F>(&self, ctx: &mut C, coords: &CoordinateSystem, f: F) -> usize
    where
        C: DrawingContext + ?Sized,
        F: FnMut(Number) -> Number,
    {
        scoped(ctx, |ctx| {
            ctx.begin_path();
            ctx.set_line_width(self.stroke.width);
            ctx.set_stroke_style(self.stroke.color);

            let mut drawn = 0;
            let mut pen_down = false;
            for sample in samples(coords, self.stride, f) {
                match sample {
                    Some(p) if pen_down => ctx.line_to(p),
                    Some(p) => {
                        ctx.move_to(p);
                        pen_down = true;
                    }
                    None => {
                        pen_down = false;
                        continue;
                    }
                }
                drawn += 1;
            }
            ctx.stroke();

            tracing::trace!(drawn, "plotted function");
            drawn
        })
    }
}
