pub mod model;
pub mod view;

pub use model::{PointerOffset, SlideRole, SliderState};

pub const SLIDE_WIDTH: i32 = 640;
pub const SLIDE_HEIGHT: i32 = 400;
pub const CONTROL_SIZE: i32 = 48;
// The picture is oversized by this margin on every edge so the parallax
// shift never exposes the wrapper behind it.
pub const IMAGE_BLEED: f64 = 24.0;
pub const PARALLAX_FACTOR: f64 = 0.06;
