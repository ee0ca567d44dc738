// Web front-end wiring constants. Shared tuning lives in `triswap_core::constants`.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Dataset fetched once at startup, relative to the page
pub const DATA_URL: &str = "data.json";

// Canvas paint
pub const BACKGROUND_CSS: &str = "#ffffff";

// Master level for all cues
pub const CUE_MASTER_GAIN: f32 = 0.8;
// Floor for exponential gain ramps (WebAudio rejects 0)
pub const CUE_GAIN_FLOOR: f32 = 0.0001;
