use serde::Serialize;

use crate::domain::ArmConfig;
use crate::geometry::Vec2;

/// Positions derived from a pair of joint angles
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArmPose {
    pub elbow: Vec2,
    /// Claw pivot (end effector)
    pub end: Vec2,
    /// Direction of the lower link in screen radians
    pub claw_angle: f32,
}

/// Forward kinematics for the configured arm.
pub fn solve_forward(arm: &ArmConfig, joint1: f32, joint2: f32) -> ArmPose {
    let r1 = joint1.to_radians();
    let r2 = (joint1 + joint2).to_radians();

    let elbow = arm.base() + Vec2::from_angle(-r1) * arm.upper_len;
    let end = elbow + Vec2::from_angle(-r2) * arm.lower_len;

    ArmPose {
        elbow,
        end,
        claw_angle: -r2,
    }
}
