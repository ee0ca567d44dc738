use crate::gpu::Vertex;
use glam::Vec2;
use std::collections::BTreeMap;
use triswap_core::{Layout, ShapeKey, ShapeSpec, ShapeSurface};

/// Retained shape table flattened into a triangle list for the GPU.
pub struct MeshSurface {
    layout: Layout,
    shapes: BTreeMap<ShapeKey, ShapeSpec>,
    dirty: bool,
}

impl MeshSurface {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            shapes: BTreeMap::new(),
            dirty: true,
        }
    }

    /// True once after any change to the shape table.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Fill then outline per shape, in key order.
    pub fn vertices(&self) -> Vec<Vertex> {
        let origin = self.layout.origin();
        let mut out = Vec::with_capacity(self.shapes.len() * 21);
        for spec in self.shapes.values() {
            let tri = spec.triangle.translated(origin);
            let [r, g, b] = spec.fill.to_rgb();
            let fill = [r, g, b, 1.0];
            for p in tri.points() {
                out.push(Vertex {
                    pos: p.to_array(),
                    color: fill,
                });
            }
            let [r, g, b] = spec.stroke.rgb();
            let stroke = [r, g, b, 1.0];
            let [a, l, rt] = tri.points();
            for (p0, p1) in [(a, l), (l, rt), (rt, a)] {
                push_segment(&mut out, p0, p1, spec.stroke.width(), stroke);
            }
        }
        out
    }
}

// Thick line segment as two triangles centered on the edge
fn push_segment(out: &mut Vec<Vertex>, p0: Vec2, p1: Vec2, width: f32, color: [f32; 4]) {
    let n = (p1 - p0).normalize_or_zero().perp() * (width * 0.5);
    if n == Vec2::ZERO {
        return;
    }
    for p in [p0 + n, p0 - n, p1 + n, p1 + n, p0 - n, p1 - n] {
        out.push(Vertex {
            pos: p.to_array(),
            color,
        });
    }
}

impl ShapeSurface for MeshSurface {
    fn create(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        log::debug!("[mesh] create shape {}", key);
        self.shapes.insert(key, *spec);
        self.dirty = true;
    }

    fn update(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        self.shapes.insert(key, *spec);
        self.dirty = true;
    }

    fn remove(&mut self, key: ShapeKey) {
        if self.shapes.remove(&key).is_some() {
            self.dirty = true;
        }
    }
}
