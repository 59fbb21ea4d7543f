// SPDX: CC0-1.0

//! Browser host: an HTML canvas as the drawing surface, and wheel events as
//! the zoom input.

use crate::{
    surface::{Color, DrawingContext, Font, TextAlign},
    Number, PlotError, Point, Size, ZoomController,
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, WheelEvent};

fn js_error(err: JsValue) -> PlotError {
    PlotError::Backend(format!("{err:?}"))
}

pub struct WebCanvas {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, PlotError> {
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| PlotError::SurfaceUnavailable(String::from("no 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                PlotError::SurfaceUnavailable(String::from("2d context has the wrong type"))
            })?;
        Ok(Self { canvas, context })
    }

    pub fn from_element_id(id: &str) -> Result<Self, PlotError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PlotError::SurfaceUnavailable(String::from("no document")))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| PlotError::SurfaceUnavailable(format!("no element with id '{id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PlotError::SurfaceUnavailable(format!("element '{id}' is not a canvas")))?;
        Self::new(canvas)
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingContext for WebCanvas {
    fn reset(&mut self, size: Size) -> Result<(), PlotError> {
        if !self.canvas.is_connected() {
            return Err(PlotError::SurfaceUnavailable(String::from(
                "canvas is not attached to the document",
            )));
        }
        // assigning the size clears the canvas and its state, even when unchanged
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        Ok(())
    }

    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, p: Point<Number>) {
        self.context.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point<Number>) {
        self.context.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.context.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: Number) {
        self.context.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: Number) {
        self.context.set_global_alpha(alpha);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.context.set_fill_style_str(&color.to_string());
    }

    fn set_font(&mut self, font: &Font) {
        self.context.set_font(&font.to_string());
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.name());
    }

    fn fill_text(&mut self, text: &str, at: Point<Number>) -> Result<(), PlotError> {
        self.context.fill_text(text, at.x, at.y).map_err(js_error)
    }
}

/// Forwards wheel events on `canvas` to `zoom`, suppressing page scrolling.
///
/// The returned closure must be kept alive (or leaked with `forget`) for the
/// listener to keep working. A wheel event that arrives while the controller
/// is already busy is dropped.
pub fn attach_wheel_zoom(
    canvas: &HtmlCanvasElement,
    zoom: Rc<RefCell<ZoomController<'static>>>,
) -> Result<Closure<dyn FnMut(WheelEvent)>, PlotError> {
    let handler = Closure::wrap(Box::new(move |event: WheelEvent| {
        event.prevent_default();
        let Ok(mut zoom) = zoom.try_borrow_mut() else {
            tracing::warn!("dropping wheel event received during a redraw");
            return;
        };
        if let Err(err) = zoom.on_scroll(event.delta_y()) {
            tracing::error!(%err, "redraw after zoom failed");
        }
    }) as Box<dyn FnMut(WheelEvent)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            handler.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_error)?;
    Ok(handler)
}
