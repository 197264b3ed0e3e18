//! Kinematics - 2-link planar arm solver
//!
//! Angles are in degrees. Screen space has y growing downward, so a positive
//! joint angle rotates the link counter-clockwise as seen on screen.
//!
//! - forward: joint angles -> elbow / claw pivot positions
//! - inverse: claw pivot target -> joint angles (elbow-down branch only)

mod forward;
mod inverse;

pub use forward::{solve_forward, ArmPose};
pub use inverse::{solve_inverse, JointAngles};
