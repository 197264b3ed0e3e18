//! BoxPhysicsSystem - discrete-time dynamics for the movable boxes
//!
//! Per tick:
//! - free boxes: gravity, explicit Euler step, floor and wall clamping
//! - the held box: slaved under the claw with zero velocity
//! - pairwise AABB overlap resolved along the axis of least penetration
//!
//! No rotation, no friction torque, no continuous collision detection.
//! Pairs are resolved in index order, so a tall stack can lag one tick.

mod collision;
mod integrate;
mod system;

pub use system::BoxPhysicsSystem;
