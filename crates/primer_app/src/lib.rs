//! Primer App
//!
//! Hosts one sample per process: creates the window in the requested
//! [`ScreenMode`](primer_core::settings::ScreenMode), builds the GPU context,
//! pumps events and renders one frame per idle tick.

pub mod app;
pub mod dialog;
pub mod time;
pub mod window;

pub use app::{App, Sample, Window};
pub use time::{FrameClock, FrameState};
