use crate::constants::BACKGROUND_CSS;
use std::collections::BTreeMap;
use triswap_core::{Layout, ShapeKey, ShapeSpec, ShapeSurface, Triangle};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Retained shape table painted onto a 2D canvas. Shapes are drawn in key
/// order, so higher indices sit on top (matching `triswap_core::hit_test`).
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    layout: Layout,
    shapes: BTreeMap<ShapeKey, ShapeSpec>,
    dirty: bool,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, layout: Layout) -> Self {
        Self {
            ctx,
            layout,
            shapes: BTreeMap::new(),
            dirty: true,
        }
    }

    /// Repaint only when the shape table changed since the last paint.
    pub fn paint_if_dirty(&mut self) {
        if self.dirty {
            self.paint();
            self.dirty = false;
        }
    }

    #[allow(deprecated)]
    fn paint(&self) {
        let ctx = &self.ctx;
        ctx.set_fill_style(&JsValue::from_str(BACKGROUND_CSS));
        ctx.fill_rect(0.0, 0.0, self.layout.width as f64, self.layout.height as f64);

        ctx.save();
        let origin = self.layout.origin();
        if let Err(e) = ctx.translate(origin.x as f64, origin.y as f64) {
            log::error!("canvas translate error: {:?}", e);
        }
        ctx.set_line_join("round");
        for spec in self.shapes.values() {
            trace_triangle(ctx, &spec.triangle);
            ctx.set_fill_style(&JsValue::from_str(&spec.fill.to_css()));
            ctx.fill();
            ctx.set_stroke_style(&JsValue::from_str(&spec.stroke.css()));
            ctx.set_line_width(spec.stroke.width() as f64);
            ctx.stroke();
        }
        ctx.restore();
    }
}

fn trace_triangle(ctx: &web::CanvasRenderingContext2d, tri: &Triangle) {
    ctx.begin_path();
    ctx.move_to(tri.apex.x as f64, tri.apex.y as f64);
    ctx.line_to(tri.left.x as f64, tri.left.y as f64);
    ctx.line_to(tri.right.x as f64, tri.right.y as f64);
    ctx.close_path();
}

impl ShapeSurface for CanvasSurface {
    fn create(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        log::debug!("[canvas] create shape {}", key);
        self.shapes.insert(key, *spec);
        self.dirty = true;
    }

    fn update(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        self.shapes.insert(key, *spec);
        self.dirty = true;
    }

    fn remove(&mut self, key: ShapeKey) {
        if self.shapes.remove(&key).is_some() {
            log::debug!("[canvas] remove shape {}", key);
            self.dirty = true;
        }
    }
}
