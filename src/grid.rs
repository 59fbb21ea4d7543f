// SPDX: CC0-1.0

use crate::{
    coords::CoordinateSystem,
    surface::{scoped, Color, DrawingContext},
    Number, Point,
};

pub const MAJOR_LINES: u32 = 10;
pub const MINOR_LINES: u32 = 50;
pub const MINOR_DIVISIONS: Number = 5.0;
pub const MINOR_ALPHA: Number = 0.2;

/// Background grid: unit lines, then faint fifth-of-a-unit subdivisions.
#[derive(Clone, Copy, Debug)]
pub struct GridRenderer {
    pub color: Color,
}

impl GridRenderer {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn draw<C>(&self, ctx: &mut C, coords: &CoordinateSystem)
    where
        C: DrawingContext + ?Sized,
    {
        scoped(ctx, |ctx| {
            ctx.set_stroke_style(self.color);
            ctx.set_line_width(1.0);

            ctx.set_global_alpha(1.0);
            pass(ctx, coords, coords.scale(), MAJOR_LINES);

            ctx.set_global_alpha(MINOR_ALPHA);
            pass(ctx, coords, coords.scale() / MINOR_DIVISIONS, MINOR_LINES);

            ctx.set_global_alpha(1.0);
        });
    }
}

/// Strokes `lines` gridlines on every side of the origin, `spacing` pixels
/// apart, as a single path.
fn pass<C>(ctx: &mut C, coords: &CoordinateSystem, spacing: Number, lines: u32)
where
    C: DrawingContext + ?Sized,
{
    let origin = coords.origin();
    let (width, height) = (coords.width(), coords.height());

    ctx.begin_path();
    for i in (1..=lines).rev() {
        let offset = Number::from(i) * spacing;

        ctx.move_to(Point::new(0.0, origin.y - offset));
        ctx.line_to(Point::new(width, origin.y - offset));
        ctx.move_to(Point::new(0.0, origin.y + offset));
        ctx.line_to(Point::new(width, origin.y + offset));

        ctx.move_to(Point::new(origin.x - offset, 0.0));
        ctx.line_to(Point::new(origin.x - offset, height));
        ctx.move_to(Point::new(origin.x + offset, 0.0));
        ctx.line_to(Point::new(origin.x + offset, height));
    }
    ctx.stroke();
    ctx.close_path();
}
