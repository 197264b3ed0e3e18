//! Engine systems, leaves first
//!
//! - kinematics:  forward / inverse solver for the 2-link arm
//! - arm_motion:  easing, drag and slider control of the joints
//! - box_physics: gravity, floor / wall contact, box-box contact, carry
//! - stack:       tallest column of boxes
//! - claw:        grab / release protocol

pub mod arm_motion;
pub mod box_physics;
pub mod claw;
pub mod kinematics;
pub mod stack;
