use std::time::Duration;

pub use dotmatrix::renderer::{SCREEN_HEIGHT, SCREEN_WIDTH};

// --- Timing ---
// One frame is 154 scanlines of 456 T-cycles at 4.194304 MHz: ~59.7 Hz.
pub const TARGET_FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

// --- Screen & Scaling ---
pub const SCALE_FACTOR: u32 = 4;
pub const WINDOW_WIDTH: u32 = SCREEN_WIDTH as u32 * SCALE_FACTOR;
pub const WINDOW_HEIGHT: u32 = SCREEN_HEIGHT as u32 * SCALE_FACTOR;

// --- Input ---
pub const BOOST_MULTIPLIER: u32 = 10; // held Space
