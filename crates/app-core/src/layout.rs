//! Drawing-surface layout and front-end parameters.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: MARGIN_TOP,
            right: MARGIN_RIGHT,
            bottom: MARGIN_BOTTOM,
            left: MARGIN_LEFT,
        }
    }
}

/// Fixed-size surface. Shapes live in plot space, which is the surface minus
/// margins with its origin at (left, top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub margin: Margins,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin: Margins::default(),
        }
    }
}

impl Layout {
    pub fn inner_width(&self) -> f32 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f32 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.margin.left, self.margin.top)
    }

    /// Surface pixel -> plot space.
    #[inline]
    pub fn to_plot(&self, canvas_px: Vec2) -> Vec2 {
        canvas_px - self.origin()
    }

    /// Plot space -> surface pixel.
    #[inline]
    pub fn to_canvas(&self, plot: Vec2) -> Vec2 {
        plot + self.origin()
    }
}

#[derive(Clone, Debug)]
pub struct VizParams {
    pub layout: Layout,
    pub transition_ms: f64,
    /// URL (web) or file path (native) of the dataset.
    pub data_source: String,
}

impl Default for VizParams {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            transition_ms: TRANSITION_MS,
            data_source: "data.json".to_string(),
        }
    }
}
