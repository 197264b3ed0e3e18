use serde::Serialize;

use crate::domain::{BoxId, CargoBox};
use crate::geometry::Vec2;
use crate::systems::arm_motion::Joint;

use super::notices::Notice;
use super::SimulationCore;

/// Everything the claw renderer needs
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClawSnapshot {
    pub closed: bool,
    /// Screen angle of the lower link (radians)
    pub angle: f32,
    /// Finger half-angle (radians)
    pub spread: f32,
    pub finger_length: f32,
}

/// Per-frame snapshot handed to the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationState {
    pub frame: u64,
    pub joint1: f32,
    pub joint2: f32,
    pub target_joint1: f32,
    pub target_joint2: f32,
    pub animating: bool,
    pub drag_mode: Option<Joint>,
    pub base: Vec2,
    pub elbow: Vec2,
    pub end: Vec2,
    pub claw: ClawSnapshot,
    pub boxes: Vec<CargoBox>,
    pub held_box: Option<BoxId>,
    pub target_point: Option<Vec2>,
    pub stack_height: u32,
    pub notice: Option<Notice>,
}

impl SimulationState {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn box_by_id(&self, id: BoxId) -> Option<&CargoBox> {
        self.boxes.iter().find(|b| b.id == id)
    }
}

pub(super) fn extract_state(world: &SimulationCore) -> SimulationState {
    let arm_cfg = &world.config.arm;
    let pose = world.arm.pose(arm_cfg);

    SimulationState {
        frame: world.frame,
        joint1: world.arm.joint1,
        joint2: world.arm.joint2,
        target_joint1: world.arm.target_joint1,
        target_joint2: world.arm.target_joint2,
        animating: world.arm.animating,
        drag_mode: world.arm.drag_mode,
        base: arm_cfg.base(),
        elbow: pose.elbow,
        end: pose.end,
        claw: ClawSnapshot {
            closed: world.claw.closed,
            angle: pose.claw_angle,
            spread: world.claw.spread(&world.config.claw),
            finger_length: world.config.claw.finger_length,
        },
        boxes: world.boxes.boxes().to_vec(),
        held_box: world.claw.held_box,
        target_point: world.arm.target_point,
        stack_height: world.stack_height,
        notice: world.notice.clone(),
    }
}
