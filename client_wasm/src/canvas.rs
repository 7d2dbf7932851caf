//! `Surface` implementation over a 2D canvas context

use game_core::{Rgb, Surface};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn gradient(
        &self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Rgb,
        outer: Rgb,
    ) -> Result<web_sys::CanvasGradient, JsValue> {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = self.ctx.create_radial_gradient(
            x,
            y,
            inner_radius as f64,
            x,
            y,
            outer_radius as f64,
        )?;
        gradient.add_color_stop(0.0, &inner.to_css())?;
        gradient.add_color_stop(1.0, &outer.to_css())?;
        Ok(gradient)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Rgb,
        outer: Rgb,
    ) {
        match self.gradient(center, inner_radius, outer_radius, inner, outer) {
            Ok(gradient) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            Err(e) => {
                log::warn!("Falling back to flat ball colour: {:?}", e);
                self.ctx.set_fill_style_str(&outer.to_css());
            }
        }

        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                outer_radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
