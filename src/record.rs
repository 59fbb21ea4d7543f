// SPDX: CC0-1.0

//! An in-memory drawing surface that records every call, and can replay the
//! recording as an SVG document.

use crate::{
    surface::{Color, DrawingContext, Font, TextAlign},
    Number, PlotError, Point, Size,
};
use core::fmt;
use plotters::{
    prelude::{DrawingBackend, IntoFont, RGBAColor, SVGBackend, ShapeStyle, WHITE},
    style::text_anchor::{HPos, Pos, VPos},
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    BeginPath,
    MoveTo(Point<Number>),
    LineTo(Point<Number>),
    ClosePath,
    Stroke,
    SetStrokeStyle(Color),
    SetLineWidth(Number),
    SetGlobalAlpha(Number),
    SetFillStyle(Color),
    SetFont(Font),
    SetTextAlign(TextAlign),
    FillText { text: String, at: Point<Number> },
}

/// The part of the canvas state that `save`/`restore` manage.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasState {
    pub stroke_style: Color,
    pub line_width: Number,
    pub global_alpha: Number,
    pub fill_style: Color,
    pub font: Font,
    pub text_align: TextAlign,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            stroke_style: Color::default(),
            line_width: 1.0,
            global_alpha: 1.0,
            fill_style: Color::default(),
            font: Font {
                size_px: 10.0,
                family: String::from("sans-serif"),
            },
            text_align: TextAlign::Start,
        }
    }
}

impl CanvasState {
    fn apply(&mut self, op: &DrawOp) {
        match op {
            DrawOp::SetStrokeStyle(c) => self.stroke_style = *c,
            DrawOp::SetLineWidth(w) => self.line_width = *w,
            DrawOp::SetGlobalAlpha(a) => self.global_alpha = *a,
            DrawOp::SetFillStyle(c) => self.fill_style = *c,
            DrawOp::SetFont(f) => self.font = f.clone(),
            DrawOp::SetTextAlign(a) => self.text_align = *a,
            _ => {}
        }
    }
}

#[derive(Clone, Debug, Default)]
struct StateStack {
    current: CanvasState,
    saved: Vec<CanvasState>,
}

impl StateStack {
    fn step(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Save => self.saved.push(self.current.clone()),
            // restoring with nothing saved does nothing, as on a canvas
            DrawOp::Restore => {
                if let Some(state) = self.saved.pop() {
                    self.current = state;
                }
            }
            op => self.current.apply(op),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    size: Size,
    ops: Vec<DrawOp>,
    state: StateStack,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            state: StateStack::default(),
        }
    }

    /// Everything drawn since the last reset, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn state(&self) -> &CanvasState {
        &self.state.current
    }

    fn record(&mut self, op: DrawOp) {
        self.state.step(&op);
        self.ops.push(op);
    }

    /// Replays the recording through plotters' SVG backend. Each stroked
    /// subpath becomes one polyline, snapped to whole pixels.
    pub fn to_svg(&self) -> Result<String, PlotError> {
        let Size { width, height } = self.size;
        let mut buf = String::new();
        {
            let mut backend = SVGBackend::with_string(&mut buf, (width, height));
            backend
                .draw_rect((0, 0), (pixel_coord(width), pixel_coord(height)), &WHITE, true)
                .map_err(backend_error)?;

            let mut state = StateStack::default();
            let mut subpaths: Vec<Vec<BackendCoord>> = Vec::new();
            for op in &self.ops {
                match op {
                    DrawOp::BeginPath => subpaths.clear(),
                    DrawOp::MoveTo(p) => subpaths.push(vec![pixel(*p)]),
                    // a line with no current point starts a new subpath
                    DrawOp::LineTo(p) => match subpaths.last_mut() {
                        Some(sub) => sub.push(pixel(*p)),
                        None => subpaths.push(vec![pixel(*p)]),
                    },
                    DrawOp::ClosePath => {
                        if let Some(&start) = subpaths.last().and_then(|sub| sub.first()) {
                            if let Some(sub) = subpaths.last_mut() {
                                sub.push(start);
                            }
                            subpaths.push(vec![start]);
                        }
                    }
                    DrawOp::Stroke => {
                        let s = &state.current;
                        let style = ShapeStyle {
                            color: rgba(s.stroke_style, s.global_alpha),
                            filled: false,
                            stroke_width: s.line_width.round().max(1.0) as u32,
                        };
                        for sub in subpaths.iter().filter(|sub| sub.len() > 1) {
                            backend
                                .draw_path(sub.iter().copied(), &style)
                                .map_err(backend_error)?;
                        }
                    }
                    DrawOp::FillText { text, at } => {
                        let s = &state.current;
                        let color = rgba(s.fill_style, s.global_alpha);
                        let style = (s.font.family.as_str(), s.font.size_px)
                            .into_font()
                            .color(&color)
                            .pos(Pos::new(h_pos(s.text_align), VPos::Bottom));
                        backend
                            .draw_text(text, &style, pixel(*at))
                            .map_err(backend_error)?;
                    }
                    op => state.step(op),
                }
            }
            backend.present().map_err(backend_error)?;
        }
        Ok(buf)
    }
}

type BackendCoord = (i32, i32);

fn pixel_coord(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn pixel(p: Point<Number>) -> BackendCoord {
    // float to int casts saturate
    (p.x.round() as i32, p.y.round() as i32)
}

fn rgba(color: Color, alpha: Number) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, alpha.clamp(0.0, 1.0))
}

fn h_pos(align: TextAlign) -> HPos {
    match align {
        TextAlign::Start => HPos::Left,
        TextAlign::Center => HPos::Center,
        TextAlign::End => HPos::Right,
    }
}

fn backend_error(err: impl fmt::Display) -> PlotError {
    PlotError::Backend(format!("svg: {err}"))
}

impl DrawingContext for RecordingCanvas {
    fn reset(&mut self, size: Size) -> Result<(), PlotError> {
        self.size = size;
        self.ops.clear();
        self.state = StateStack::default();
        Ok(())
    }

    fn size(&self) -> Size {
        self.size
    }

    fn save(&mut self) {
        self.record(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.record(DrawOp::Restore);
    }

    fn begin_path(&mut self) {
        self.record(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Point<Number>) {
        self.record(DrawOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point<Number>) {
        self.record(DrawOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.record(DrawOp::ClosePath);
    }

    fn stroke(&mut self) {
        self.record(DrawOp::Stroke);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.record(DrawOp::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: Number) {
        self.record(DrawOp::SetLineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: Number) {
        self.record(DrawOp::SetGlobalAlpha(alpha));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.record(DrawOp::SetFillStyle(color));
    }

    fn set_font(&mut self, font: &Font) {
        self.record(DrawOp::SetFont(font.clone()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.record(DrawOp::SetTextAlign(align));
    }

    fn fill_text(&mut self, text: &str, at: Point<Number>) -> Result<(), PlotError> {
        self.record(DrawOp::FillText {
            text: text.to_string(),
            at,
        });
        Ok(())
    }
}
