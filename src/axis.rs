// SPDX: CC0-1.0

//! Axis lines and their numeric tick labels.
//!
//! Label magnitudes follow a 1-2-5 decade sequence: every [`ZOOM_PERIOD`]
//! ticks of zooming out moves one step along `1, 2, 5, 10, 20, 50, ...`, so
//! three periods make a full decade.

use crate::{
    coords::{CoordinateSystem, ViewState, ZOOM_PERIOD},
    surface::{scoped, Color, DrawingContext, Font, TextAlign},
    Number, PlotError, Point,
};

/// Labelled grid steps on each side of the origin.
pub const LABEL_COUNT: u32 = 10;
/// Offsets of a label's anchor from its gridline intersection, in pixels.
pub const X_LABEL_OFFSET: Point<Number> = Point::new(-5.0, 17.0);
pub const Y_LABEL_OFFSET: Point<Number> = Point::new(0.0, 5.0);

const TEN: Number = 10.0;

/// Value of one major grid step, `mantissa * 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickStep {
    pub mantissa: u8,
    pub exponent: i64,
}

impl TickStep {
    pub fn for_zoom(zoom_ticks: i64) -> Self {
        // non-negative when zoomed out
        let inx = -zoom_ticks.div_euclid(ZOOM_PERIOD);
        let mantissa = match inx.rem_euclid(3) {
            0 => 1,
            1 => 2,
            _ => 5,
        };
        Self {
            mantissa,
            exponent: inx.div_euclid(3),
        }
    }

    /// Value labelled at the `i`th gridline from the origin.
    ///
    /// Finite and nonzero within roughly 7,000 zoom ticks of the default
    /// view. Past that the power of ten overflows to `inf` or underflows to
    /// `0`.
    pub fn value(&self, i: u32) -> Number {
        let digits = Number::from(self.mantissa) * Number::from(i);
        // powi is exact for the decades that matter, and dividing keeps
        // 0.1-style values free of binary noise
        let exponent = self.exponent.clamp(-400, 400) as i32;
        if exponent >= 0 {
            digits * TEN.powi(exponent)
        } else {
            digits / TEN.powi(-exponent)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub at: Point<Number>,
}

/// Labels for every major gridline, outermost first. Each step yields four
/// labels: right and left on the X axis, then below and above on the Y axis.
pub fn tick_labels(coords: &CoordinateSystem, view: &ViewState) -> Vec<TickLabel> {
    let step = TickStep::for_zoom(view.zoom_ticks());
    let origin = coords.origin();
    let scale = coords.scale();

    let mut labels = Vec::with_capacity(4 * LABEL_COUNT as usize);
    for i in (1..=LABEL_COUNT).rev() {
        let num = step.value(i);
        let offset = Number::from(i) * scale;
        let (pos, neg) = (format!("{num}"), format!("{}", -num));

        labels.push(TickLabel {
            text: pos.clone(),
            at: Point::new(origin.x + offset + X_LABEL_OFFSET.x, origin.y + X_LABEL_OFFSET.y),
        });
        labels.push(TickLabel {
            text: neg.clone(),
            at: Point::new(origin.x - offset + X_LABEL_OFFSET.x, origin.y + X_LABEL_OFFSET.y),
        });
        labels.push(TickLabel {
            text: neg,
            at: Point::new(origin.x + Y_LABEL_OFFSET.x, origin.y + offset + Y_LABEL_OFFSET.y),
        });
        labels.push(TickLabel {
            text: pos,
            at: Point::new(origin.x + Y_LABEL_OFFSET.x, origin.y - offset + Y_LABEL_OFFSET.y),
        });
    }
    labels
}

#[derive(Clone, Debug)]
pub struct AxisRenderer {
    pub color: Color,
    pub font: Font,
}

impl AxisRenderer {
    pub const fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    pub fn draw<C>(
        &self,
        ctx: &mut C,
        coords: &CoordinateSystem,
        view: &ViewState,
    ) -> Result<(), PlotError>
    where
        C: DrawingContext + ?Sized,
    {
        let origin = coords.origin();

        scoped(ctx, |ctx| {
            ctx.begin_path();
            ctx.set_stroke_style(self.color);
            ctx.set_line_width(1.0);
            ctx.move_to(Point::new(coords.x_min(), origin.y));
            ctx.line_to(Point::new(coords.width(), origin.y));
            ctx.move_to(Point::new(origin.x, 0.0));
            ctx.line_to(Point::new(origin.x, coords.height()));
            ctx.stroke();

            ctx.set_fill_style(self.color);
            ctx.set_font(&self.font);
            ctx.set_text_align(TextAlign::End);
            for label in tick_labels(coords, view) {
                ctx.fill_text(&label.text, label.at)?;
            }
            ctx.close_path();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{DrawOp, RecordingCanvas},
        Size,
    };

    fn first_label(ticks: i64) -> Number {
        TickStep::for_zoom(ticks).value(1)
    }

    #[test]
    fn default_view_labels_integers() {
        let step = TickStep::for_zoom(0);
        assert_eq!(step, TickStep { mantissa: 1, exponent: 0 });
        assert_eq!(step.value(10), 10.0);
    }

    #[test]
    fn zooming_out_walks_one_two_five() {
        let seen: Vec<Number> = (0..7).map(|n| first_label(-8 * n)).collect();
        assert_eq!(seen, [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0]);
    }

    #[test]
    fn step_is_constant_within_a_period() {
        for ticks in -8..0 {
            assert_eq!(first_label(ticks), 2.0, "ticks {ticks}");
        }
        for ticks in 0..8 {
            assert_eq!(first_label(ticks), 1.0, "ticks {ticks}");
        }
    }

    #[test]
    fn three_periods_make_a_decade() {
        for ticks in [-50, -9, 0, 3, 17, 64] {
            let ratio = first_label(ticks - 3 * ZOOM_PERIOD) / first_label(ticks);
            assert!((ratio - 10.0).abs() < 1e-9, "ticks {ticks} ratio {ratio}");
        }
    }

    #[test]
    fn zooming_in_gives_clean_fractions() {
        assert_eq!(first_label(8), 0.5);
        assert_eq!(first_label(16), 0.2);
        assert_eq!(first_label(24), 0.1);
        assert_eq!(first_label(48), 0.01);
        assert_eq!(format!("{}", TickStep::for_zoom(8).value(3)), "1.5");
        assert_eq!(format!("{}", TickStep::for_zoom(40).value(7)), "0.14");
    }

    #[test]
    fn far_zoom_stays_finite_then_saturates() {
        // 300 decades out and in
        let out = first_label(-3 * ZOOM_PERIOD * 300);
        assert!(out.is_finite() && (out / 1e300 - 1.0).abs() < 1e-9, "{out}");
        let inward = first_label(3 * ZOOM_PERIOD * 300);
        assert!(inward > 0.0 && (inward * 1e300 - 1.0).abs() < 1e-9, "{inward}");

        assert!(first_label(-1_000_000).is_infinite());
        assert_eq!(first_label(1_000_000), 0.0);
        assert!(first_label(i64::MIN).is_infinite());
    }

    #[test]
    fn labels_are_placed_around_the_origin() {
        let coords = CoordinateSystem::new(Size::new(750, 750), &ViewState::new(0), 80.0, true);
        let labels = tick_labels(&coords, &ViewState::new(0));
        assert_eq!(labels.len(), 40);

        // last group is i = 1
        let group = &labels[36..];
        assert_eq!(group[0].text, "1");
        assert_eq!(group[0].at, Point::new(450.5, 392.5));
        assert_eq!(group[1].text, "-1");
        assert_eq!(group[1].at, Point::new(290.5, 392.5));
        assert_eq!(group[2].text, "-1");
        assert_eq!(group[2].at, Point::new(375.5, 460.5));
        assert_eq!(group[3].text, "1");
        assert_eq!(group[3].at, Point::new(375.5, 300.5));
        assert_eq!(labels[0].text, "10");
    }

    #[test]
    fn draw_restores_canvas_state() {
        let coords = CoordinateSystem::new(Size::new(750, 750), &ViewState::new(0), 80.0, false);
        let mut canvas = RecordingCanvas::new(Size::new(750, 750));
        AxisRenderer::new(Color::rgb(255, 128, 128), Font::monospace(20.0))
            .draw(&mut canvas, &coords, &ViewState::new(0))
            .unwrap();

        let ops = canvas.ops();
        assert_eq!(ops.first(), Some(&DrawOp::Save));
        assert_eq!(ops.last(), Some(&DrawOp::Restore));
        assert!(ops.contains(&DrawOp::MoveTo(Point::new(375.5, 375.5))));
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, DrawOp::FillText { .. }))
                .count(),
            40
        );
        assert_eq!(canvas.state().text_align, TextAlign::Start);
    }
}
