//! Arm Motion Controller
//!
//! Two mutually exclusive ways to move the arm:
//! - commanded easing toward IK target angles (exponential decay, 12% per tick)
//! - direct drag, where the pointer angle sets a joint immediately
//!
//! Slider input behaves like drag: current and target angle move together.

mod drag;
mod easing;
mod state;

pub use state::{ArmState, Joint};
