use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{ArmConfig, ArmError, MotionConfig};
use crate::geometry::Vec2;
use crate::systems::kinematics::{solve_forward, solve_inverse, ArmPose, JointAngles};

use super::{drag, easing};

/// Arm joint selector (shoulder = `Joint1`, elbow = `Joint2`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    Joint1,
    Joint2,
}

/// Mutable arm state owned by the simulation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmState {
    pub joint1: f32,
    pub joint2: f32,
    pub target_joint1: f32,
    pub target_joint2: f32,
    /// Easing toward the target angles is in progress
    pub animating: bool,
    /// Joint currently dragged by the pointer, if any
    pub drag_mode: Option<Joint>,
    /// Cartesian point of the last accepted target, cleared when easing ends
    pub target_point: Option<Vec2>,
}

impl ArmState {
    pub fn new(arm: &ArmConfig) -> Self {
        Self {
            joint1: arm.initial_joint1,
            joint2: arm.initial_joint2,
            target_joint1: arm.initial_joint1,
            target_joint2: arm.initial_joint2,
            animating: false,
            drag_mode: None,
            target_point: None,
        }
    }

    #[inline]
    pub fn pose(&self, arm: &ArmConfig) -> ArmPose {
        solve_forward(arm, self.joint1, self.joint2)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_mode.is_some()
    }

    /// Command the claw pivot toward `(x, y)`.
    ///
    /// On success the arm starts easing; on failure nothing changes.
    /// Points on a drag handle are left to `pointer_down`.
    pub fn set_target(&mut self, arm: &ArmConfig, x: f32, y: f32) -> Result<JointAngles, ArmError> {
        if self.is_dragging() {
            return Err(ArmError::DragActive);
        }
        if drag::hit_test(arm, &self.pose(arm), Vec2::new(x, y)).is_some() {
            return Err(ArmError::OnHandle);
        }
        let Some(angles) = solve_inverse(arm, x, y) else {
            debug!(x, y, "target out of reach");
            return Err(ArmError::Unreachable { x, y });
        };

        self.target_joint1 = angles.joint1;
        self.target_joint2 = angles.joint2;
        self.target_point = Some(Vec2::new(x, y));
        self.animating = true;
        debug!(joint1 = angles.joint1, joint2 = angles.joint2, "arm target set");
        Ok(angles)
    }

    /// Start dragging a joint. Suspends any easing in the same call.
    pub fn begin_drag(&mut self, joint: Joint) {
        self.drag_mode = Some(joint);
        self.animating = false;
    }

    /// Begin a drag if `(x, y)` is on the base or elbow handle.
    pub fn pointer_down(&mut self, arm: &ArmConfig, x: f32, y: f32) -> Option<Joint> {
        let joint = drag::hit_test(arm, &self.pose(arm), Vec2::new(x, y))?;
        self.begin_drag(joint);
        Some(joint)
    }

    pub fn drag_to(&mut self, arm: &ArmConfig, x: f32, y: f32) {
        let Some(joint) = self.drag_mode else {
            return;
        };
        let cursor = Vec2::new(x, y);
        match joint {
            Joint::Joint1 => {
                self.joint1 = drag::shoulder_angle(arm, cursor);
                self.target_joint1 = self.joint1;
            }
            Joint::Joint2 => {
                let elbow = self.pose(arm).elbow;
                self.joint2 = drag::elbow_angle(arm, elbow, self.joint1, cursor);
                self.target_joint2 = self.joint2;
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_mode = None;
    }

    /// Slider input: set one joint immediately (clamped to its range).
    pub fn set_joint_direct(&mut self, arm: &ArmConfig, joint: Joint, angle: f32) {
        match joint {
            Joint::Joint1 => {
                self.joint1 = arm.joint1_range.clamp(angle);
                self.target_joint1 = self.joint1;
            }
            Joint::Joint2 => {
                self.joint2 = arm.joint2_range.clamp(angle);
                self.target_joint2 = self.joint2;
            }
        }
        self.animating = false;
    }

    /// Advance easing by one tick. Returns true on the tick the motion completes.
    pub fn step(&mut self, motion: &MotionConfig) -> bool {
        if !self.animating || self.is_dragging() {
            return false;
        }

        let done1 = easing::ease_joint(&mut self.joint1, self.target_joint1, motion);
        let done2 = easing::ease_joint(&mut self.joint2, self.target_joint2, motion);

        if done1 && done2 {
            self.animating = false;
            self.target_point = None;
            return true;
        }
        false
    }
}
