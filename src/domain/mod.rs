//! Domain types: configuration, boxes and errors

pub mod boxes;
pub mod config;
pub mod errors;

pub use boxes::{default_boxes, BoxId, CargoBox};
pub use config::{AngleRange, ArmConfig, ClawConfig, MotionConfig, PhysicsConfig, StackConfig, WorldConfig};
pub use errors::{ArmError, ConfigError};
