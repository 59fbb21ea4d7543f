// SPDX: CC0-1.0

use function_grapher::{
    config::{AXES_COLOR, FUNCTION_COLOR, GRID_COLOR},
    record::{DrawOp, RecordingCanvas},
    stdlib,
    surface::{Color, DrawingContext, Font, TextAlign},
    Number, PlotConfig, PlotError, PlotSurface, Point, Size, ViewState, ZoomController,
};
use std::{cell::RefCell, rc::Rc};

/// Stroke colour in effect at each `stroke` call.
fn stroke_colors(ops: &[DrawOp]) -> Vec<Color> {
    // save/restore pairs in the renderers always wrap their own styling, so
    // tracking the last colour set is enough here
    let mut current = Color::default();
    let mut ret = Vec::new();
    for op in ops {
        match op {
            DrawOp::SetStrokeStyle(c) => current = *c,
            DrawOp::Stroke => ret.push(current),
            _ => {}
        }
    }
    ret
}

fn function_points(ops: &[DrawOp]) -> Vec<Point<Number>> {
    let start = ops
        .iter()
        .rposition(|op| *op == DrawOp::SetStrokeStyle(FUNCTION_COLOR))
        .unwrap();
    ops[start..]
        .iter()
        .filter_map(|op| match op {
            DrawOp::MoveTo(p) | DrawOp::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn layers_are_drawn_grid_axes_function() {
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    PlotSurface::default()
        .render_frame(&mut canvas, &ViewState::default(), stdlib::shifted)
        .unwrap();

    assert_eq!(
        stroke_colors(canvas.ops()),
        [GRID_COLOR, GRID_COLOR, AXES_COLOR, FUNCTION_COLOR]
    );
    // every layer cleans up after itself
    assert_eq!(canvas.state().global_alpha, 1.0);
    assert_eq!(canvas.state().text_align, TextAlign::Start);
}

#[test]
fn shifted_line_golden_sample() {
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    let coords = PlotSurface::default()
        .render_frame(&mut canvas, &ViewState::default(), |x| x - 1.0)
        .unwrap();
    assert_eq!(coords.scale(), 80.0);
    assert_eq!(coords.origin(), Point::new(375.5, 375.5));

    let points = function_points(canvas.ops());
    assert_eq!(points.len(), 189);

    let first = points[0];
    assert!((first.x - -0.5).abs() < 1e-9, "{first:?}");
    assert!((first.y - 831.5).abs() < 1e-9, "{first:?}");
    let math = coords.pixel_to_math(first);
    assert!((math.x - -4.7).abs() < 1e-9);
    assert!((math.y - -5.7).abs() < 1e-9);

    let last = points[points.len() - 1];
    assert!((last.x - 751.5).abs() < 1e-9, "{last:?}");
}

#[test]
fn right_half_only_when_negative_x_is_off() {
    let config = PlotConfig {
        include_negative_x: false,
        ..PlotConfig::default()
    };
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    PlotSurface::new(config)
        .render_frame(&mut canvas, &ViewState::default(), |x| x)
        .unwrap();

    let points = function_points(canvas.ops());
    assert_eq!(points[0], Point::new(375.5, 375.5));
    assert!(points.iter().all(|p| p.x >= 375.5));
    // x axis starts at the origin too
    assert!(canvas.ops().windows(2).any(|pair| pair
        == [
            DrawOp::MoveTo(Point::new(375.5, 375.5)),
            DrawOp::LineTo(Point::new(750.0, 375.5)),
        ]));
}

#[test]
fn custom_size_moves_the_origin() {
    let config = PlotConfig {
        size: Size::new(400, 300),
        ..PlotConfig::default()
    };
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    let coords = PlotSurface::new(config)
        .render_frame(&mut canvas, &ViewState::default(), |x| x)
        .unwrap();
    assert_eq!(coords.origin(), Point::new(200.5, 150.5));
    assert_eq!(canvas.size(), Size::new(400, 300));
}

#[test]
fn wheel_events_redraw_in_registration_order() {
    let canvas = Rc::new(RefCell::new(RecordingCanvas::new(Size::new(1, 1))));
    let order = Rc::new(RefCell::new(Vec::new()));
    let surface = PlotSurface::default();

    let mut zoom = ZoomController::new();
    let _frame = {
        let canvas = Rc::clone(&canvas);
        let order = Rc::clone(&order);
        zoom.subscribe(move |view| {
            order.borrow_mut().push("frame");
            surface
                .render_frame(&mut *canvas.borrow_mut(), view, stdlib::shifted)
                .map(|_| ())
        })
    };
    let _status = {
        let order = Rc::clone(&order);
        zoom.subscribe(move |_| {
            order.borrow_mut().push("status");
            Ok(())
        })
    };

    for delta in [-100.0, -0.5, -3.0] {
        zoom.on_scroll(delta).unwrap();
    }
    assert_eq!(zoom.view(), ViewState::new(3));
    assert_eq!(
        *order.borrow(),
        ["frame", "status", "frame", "status", "frame", "status"]
    );

    // the canvas holds only the latest frame
    let canvas = canvas.borrow();
    let labels: Vec<&str> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 40);
    assert_eq!(labels[36..], ["1", "-1", "-1", "1"]);
    assert!(canvas
        .ops()
        .contains(&DrawOp::MoveTo(Point::new(375.5 + 89.0, 0.0))));
}

#[test]
fn zooming_out_three_periods_relabels_by_a_decade() {
    let mut zoom = ZoomController::<()>::new();
    for _ in 0..24 {
        zoom.on_scroll(1.0).unwrap();
    }
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    let coords = PlotSurface::default()
        .render_frame(&mut canvas, &zoom.view(), stdlib::shifted)
        .unwrap();
    assert_eq!(coords.scale(), 80.0);
    assert!(canvas.ops().contains(&DrawOp::FillText {
        text: String::from("100"),
        at: Point::new(375.5 + 800.0 - 5.0, 375.5 + 17.0),
    }));
}

#[test]
fn scale_stays_positive_under_any_scrolling() {
    let mut zoom = ZoomController::<()>::new();
    let config = PlotConfig {
        base_scale: -50.0,
        ..PlotConfig::default()
    };
    let surface = PlotSurface::new(config);
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    for delta in (0..40).map(|n| if n % 3 == 0 { 1.0 } else { -1.0 }) {
        let view = zoom.on_scroll(delta).unwrap();
        let coords = surface
            .render_frame(&mut canvas, &view, stdlib::shifted)
            .unwrap();
        assert!(coords.scale() > 0.0);
    }
}

#[test]
fn svg_export_of_a_full_frame() {
    let mut canvas = RecordingCanvas::new(Size::new(1, 1));
    PlotSurface::default()
        .render_frame(&mut canvas, &ViewState::default(), stdlib::shifted)
        .unwrap();
    let svg = canvas.to_svg().unwrap();

    // 40 major and 200 minor gridlines, two axes, one unbroken curve
    assert_eq!(svg.matches("<polyline").count(), 243);
    assert_eq!(svg.matches(r#"opacity="0.2""#).count(), 200);
    assert_eq!(
        svg.to_ascii_uppercase().matches(r##"STROKE="#422CFF""##).count(),
        1
    );
    assert_eq!(svg.matches("<text").count(), 40);
    assert!(svg.contains(r#"font-family="monospace""#));
}

/// A surface whose host element has gone away.
struct Detached;

impl DrawingContext for Detached {
    fn reset(&mut self, _: Size) -> Result<(), PlotError> {
        Err(PlotError::SurfaceUnavailable(String::from("detached")))
    }
    fn size(&self) -> Size {
        Size::new(0, 0)
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _: Point<Number>) {}
    fn line_to(&mut self, _: Point<Number>) {}
    fn close_path(&mut self) {}
    fn stroke(&mut self) {}
    fn set_stroke_style(&mut self, _: Color) {}
    fn set_line_width(&mut self, _: Number) {}
    fn set_global_alpha(&mut self, _: Number) {}
    fn set_fill_style(&mut self, _: Color) {}
    fn set_font(&mut self, _: &Font) {}
    fn set_text_align(&mut self, _: TextAlign) {}
    fn fill_text(&mut self, _: &str, _: Point<Number>) -> Result<(), PlotError> {
        Ok(())
    }
}

#[test]
fn unavailable_surface_is_reported_through_zoom() {
    let surface = PlotSurface::default();
    let mut detached = Detached;
    let mut zoom = ZoomController::new();
    let _frame = zoom.subscribe(|view| {
        surface
            .render_frame(&mut detached, view, stdlib::shifted)
            .map(|_| ())
    });
    assert_eq!(
        zoom.on_scroll(1.0),
        Err(PlotError::SurfaceUnavailable(String::from("detached")))
    );
}
