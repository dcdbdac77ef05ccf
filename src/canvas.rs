use folio_core::{Bounds, DrawSurface, Ink};
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`DrawSurface`] over a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    // every dot in a frame shares one fill; skip re-setting it
    last_fill: Option<Ink>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            last_fill: None,
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
        // resizing the canvas resets context state, including fill style
        self.last_fill = None;
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, ink: Ink) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        if self.last_fill != Some(ink) {
            self.ctx.set_fill_style_str(&ink.css());
            self.last_fill = Some(ink);
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, ink: Ink) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&ink.css());
        self.ctx.stroke();
    }
}
