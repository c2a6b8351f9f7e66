//! Platform abstraction layer
//!
//! The simulation only ever talks to these collaborators:
//! - Time: monotonic millisecond clock
//! - Input: one activation button, sampled once per tick
//! - Random: uniform integers, seeded once at startup

pub mod input;
pub mod random;
pub mod time;

pub use input::{ActivationInput, ButtonEdge};
pub use random::{RandomSource, seeded_rng};
pub use time::{Clock, ManualClock, Millis, SystemClock};
