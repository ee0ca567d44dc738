use crate::constants::{FILL_LIGHTNESS, FILL_SATURATION, HOVER_SATURATION};
use crate::data::DataItem;
use crate::scale::Scales;
use glam::Vec2;

/// Downward-pointing isosceles triangle in plot space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub apex: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

impl Triangle {
    #[inline]
    pub fn points(&self) -> [Vec2; 3] {
        [self.apex, self.left, self.right]
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            apex: self.apex + offset,
            left: self.left + offset,
            right: self.right + offset,
        }
    }

    pub fn lerp(&self, other: &Triangle, t: f32) -> Self {
        Self {
            apex: self.apex.lerp(other.apex, t),
            left: self.left.lerp(other.left, t),
            right: self.right.lerp(other.right, t),
        }
    }

    /// Point-in-triangle by edge signs; points on an edge count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        #[inline]
        fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
            (b - a).perp_dot(p - a)
        }
        let d0 = edge(self.apex, self.left, p);
        let d1 = edge(self.left, self.right, p);
        let d2 = edge(self.right, self.apex, p);
        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_neg && has_pos)
    }
}

pub fn build_triangle(item: &DataItem, scales: &Scales) -> Triangle {
    let apex = Vec2::new(scales.x.apply(item.x) as f32, scales.y.apply(item.y) as f32);
    let half_base = (scales.base.apply(item.base) / 2.0) as f32;
    let height = scales.height.apply(item.height) as f32;
    Triangle {
        apex,
        left: Vec2::new(apex.x - half_base, apex.y + height),
        right: Vec2::new(apex.x + half_base, apex.y + height),
    }
}

/// Hue in degrees, saturation and lightness in 0..=1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({:.1}, {:.0}%, {:.0}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }

    /// sRGB components in 0..=1.
    pub fn to_rgb(&self) -> [f32; 3] {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        if s == 0.0 {
            return [l, l, l];
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        fn channel(p: f32, q: f32, mut t: f32) -> f32 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }
        [
            channel(p, q, h + 1.0 / 3.0),
            channel(p, q, h),
            channel(p, q, h - 1.0 / 3.0),
        ]
    }

    /// Interpolate along the shorter hue arc.
    pub fn lerp(&self, other: &Hsl, t: f32) -> Self {
        let mut dh = other.h - self.h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        Self {
            h: (self.h + dh * t).rem_euclid(360.0),
            s: self.s + (other.s - self.s) * t,
            l: self.l + (other.l - self.l) * t,
        }
    }
}

pub fn fill_for(item: &DataItem, scales: &Scales, hovered: bool) -> Hsl {
    let saturation = if hovered {
        HOVER_SATURATION
    } else {
        FILL_SATURATION
    };
    Hsl::new(scales.hue.apply(item.hue) as f32, saturation, FILL_LIGHTNESS)
}
