// Shared visual/audio tuning constants used by both web and native frontends.

// Dataset
pub const DATASET_LEN: usize = 10; // records expected in the data file

// Surface layout (pixels)
pub const CANVAS_WIDTH: f32 = 1600.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const MARGIN_TOP: f32 = 20.0;
pub const MARGIN_RIGHT: f32 = 20.0;
pub const MARGIN_BOTTOM: f32 = 30.0;
pub const MARGIN_LEFT: f32 = 40.0;

// Output ranges for the size and color scales
pub const SIZE_RANGE: (f64, f64) = (10.0, 150.0); // base and height, pixels
pub const HUE_RANGE: (f64, f64) = (0.0, 360.0); // degrees

// Fill color
pub const FILL_SATURATION: f32 = 0.9;
pub const HOVER_SATURATION: f32 = 0.4; // while the pointer is over a shape
pub const FILL_LIGHTNESS: f32 = 0.5;

// Stroke
pub const STROKE_DEFAULT_WIDTH: f32 = 1.0;
pub const STROKE_HIGHLIGHT_WIDTH: f32 = 4.0;
pub const STROKE_DEFAULT_RGB: [f32; 3] = [0.2, 0.2, 0.2];
pub const STROKE_HIGHLIGHT_RGB: [f32; 3] = [0.0, 0.0, 0.0];

// Animation
pub const TRANSITION_MS: f64 = 1000.0;

// Audio cues: (start Hz, end Hz, seconds, peak gain)
pub const SELECT_CUE: (f32, f32, f32, f32) = (880.0, 1320.0, 0.12, 0.30);
pub const TRANSITION_CUE: (f32, f32, f32, f32) = (220.0, 660.0, 0.60, 0.25);
pub const CUE_ATTACK_SEC: f32 = 0.01;
