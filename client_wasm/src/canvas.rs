//! 2D canvas implementation of the render surface

use game_core::render::{Color, Surface, TextAlign, TextBaseline, TextStyle};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::ClientError;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ClientError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext)?;
        Ok(Self { ctx })
    }
}

fn align_name(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

fn baseline_name(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "top",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        // arc only fails on a negative radius
        if self
            .ctx
            .arc(cx as f64, cy as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(align_name(style.align));
        self.ctx.set_text_baseline(baseline_name(style.baseline));
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
        self.ctx.restore();
    }
}
