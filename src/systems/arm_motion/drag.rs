use crate::domain::ArmConfig;
use crate::geometry::Vec2;
use crate::systems::kinematics::ArmPose;

use super::Joint;

/// Which joint handle (if any) lies under the pointer. The base wins ties.
pub(super) fn hit_test(arm: &ArmConfig, pose: &ArmPose, p: Vec2) -> Option<Joint> {
    if p.distance(arm.base()) < arm.base_grab_radius {
        return Some(Joint::Joint1);
    }
    if p.distance(pose.elbow) < arm.elbow_grab_radius {
        return Some(Joint::Joint2);
    }
    None
}

/// Shoulder angle that points the upper link at the cursor.
pub(super) fn shoulder_angle(arm: &ArmConfig, cursor: Vec2) -> f32 {
    arm.joint1_range.clamp((cursor - arm.base()).screen_angle_deg())
}

/// Elbow angle that points the lower link at the cursor, relative to the shoulder.
pub(super) fn elbow_angle(arm: &ArmConfig, elbow: Vec2, joint1: f32, cursor: Vec2) -> f32 {
    arm.joint2_range.clamp((cursor - elbow).screen_angle_deg() - joint1)
}
