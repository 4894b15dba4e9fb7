//! Scroll-driven motion for the decorative background.

pub mod frame_loop;
pub mod parallax;

pub use frame_loop::{BrowserFrames, FrameError, FrameLoop, FrameScheduler};
pub use parallax::{layout, shape_offset, Offset, PaintState, SHAPE_COUNT, SHAPE_ORIGINS};
