use crate::domain::MotionConfig;

/// Move `joint` a fixed fraction of the way to `target`, snapping when close.
///
/// Returns true once the joint sits exactly on its target.
#[inline]
pub(super) fn ease_joint(joint: &mut f32, target: f32, motion: &MotionConfig) -> bool {
    let delta = target - *joint;
    if delta.abs() > motion.snap_threshold {
        *joint += delta * motion.ease_factor;
        false
    } else {
        *joint = target;
        true
    }
}
