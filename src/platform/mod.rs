//! Platform abstraction layer
//!
//! Host-facing pieces the simulation stays ignorant of:
//! - Tick pacing against a monotonic clock
//! - Keyboard and swipe input resolved into one direction

pub mod clock;
pub mod input;

pub use clock::TickClock;
pub use input::{InputState, SWIPE_THRESHOLD_PX, SwipeTracker};
