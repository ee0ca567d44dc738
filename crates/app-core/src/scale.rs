//! Linear normalization from raw attribute domains onto render ranges.
//!
//! Domains are derived once from the full dataset. Later swaps change
//! `base`/`height` values but never the scales, so positions and sizes stay
//! comparable across swaps.

use crate::constants::{HUE_RANGE, SIZE_RANGE};
use crate::data::DataItem;
use crate::layout::Layout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain: (domain_min, domain_max),
            range: (range_min, range_max),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// An empty domain maps every input to the start of the range.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return r0;
        }
        let t = (value - d0) / (d1 - d0);
        // a*(1-t) + b*t lands exactly on both ends of the range
        r0 * (1.0 - t) + r1 * t
    }
}

/// Closure form of [`LinearScale`].
pub fn build_scale(
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> impl Fn(f64) -> f64 {
    let scale = LinearScale::new(domain_min, domain_max, range_min, range_max);
    move |value| scale.apply(value)
}

/// The five attribute scales of one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub base: LinearScale,
    pub height: LinearScale,
    pub hue: LinearScale,
}

impl Scales {
    pub fn from_data(items: &[DataItem], layout: &Layout) -> Self {
        let (x_min, x_max) = extent(items, |d| d.x);
        let (y_min, y_max) = extent(items, |d| d.y);
        let (_, base_max) = extent(items, |d| d.base);
        let (_, height_max) = extent(items, |d| d.height);
        let (_, hue_max) = extent(items, |d| d.hue);

        let half_base = base_max / 2.0;
        Self {
            x: LinearScale::new(
                x_min - half_base,
                x_max + half_base,
                0.0,
                layout.inner_width() as f64,
            ),
            y: LinearScale::new(
                y_min,
                y_max + height_max,
                0.0,
                layout.inner_height() as f64,
            ),
            base: LinearScale::new(0.0, base_max, SIZE_RANGE.0, SIZE_RANGE.1),
            height: LinearScale::new(0.0, height_max, SIZE_RANGE.0, SIZE_RANGE.1),
            hue: LinearScale::new(0.0, hue_max, HUE_RANGE.0, HUE_RANGE.1),
        }
    }
}

// (min, max) of one attribute; (0, 0) for an empty slice
fn extent(items: &[DataItem], field: impl Fn(&DataItem) -> f64) -> (f64, f64) {
    let mut iter = items.iter().map(field);
    match iter.next() {
        Some(first) => iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))),
        None => (0.0, 0.0),
    }
}
