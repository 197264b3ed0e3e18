use serde::Serialize;

use crate::domain::ArmConfig;

/// Joint angles in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointAngles {
    pub joint1: f32,
    pub joint2: f32,
}

/// Inverse kinematics: joint angles that put the claw pivot on `(tx, ty)`.
///
/// Returns `None` when the target is outside the reachable annulus (with the
/// configured safety margin on both edges) or sits exactly on the base.
/// Of the two solutions the elbow-down one (`joint2 <= 0`) is always chosen.
pub fn solve_inverse(arm: &ArmConfig, tx: f32, ty: f32) -> Option<JointAngles> {
    let l1 = arm.upper_len;
    let l2 = arm.lower_len;

    // Flip to math-up.
    let dx = tx - arm.base_x;
    let dy = arm.base_y - ty;
    let d = dx.hypot(dy);

    if d == 0.0 || d > arm.max_reach() || d < arm.min_reach() {
        return None;
    }

    let cos_elbow = ((d * d - l1 * l1 - l2 * l2) / (2.0 * l1 * l2)).clamp(-1.0, 1.0);
    let t2 = -cos_elbow.acos();

    let alpha = dy.atan2(dx);
    let cos_beta = ((l1 * l1 + d * d - l2 * l2) / (2.0 * l1 * d)).clamp(-1.0, 1.0);
    let t1 = alpha + cos_beta.acos();

    Some(JointAngles {
        joint1: t1.to_degrees(),
        joint2: t2.to_degrees(),
    })
}
