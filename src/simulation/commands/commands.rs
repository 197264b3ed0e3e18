use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ArmError;
use crate::systems::arm_motion::Joint;
use crate::systems::claw::{ClawResult, ClawState};
use crate::systems::stack::stack_height;

use super::notices::Notice;
use super::SimulationCore;

/// Input from the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    SetTarget { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    BeginDrag { joint: Joint },
    DragTo { x: f32, y: f32 },
    EndDrag,
    SetJointDirect { joint: Joint, angle: f32 },
    ToggleClaw,
    Reset,
}

/// What a command did
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome")]
pub enum CommandOutcome {
    Applied,
    Rejected { error: ArmError },
    /// Result of a pointer press; `None` when it missed both handles
    Pointer { joint: Option<Joint> },
    Claw { result: ClawResult },
}

pub(super) fn apply(world: &mut SimulationCore, command: Command) -> CommandOutcome {
    debug!(?command, "apply command");
    match command {
        Command::SetTarget { x, y } => match set_target(world, x, y) {
            Ok(()) => CommandOutcome::Applied,
            Err(error) => CommandOutcome::Rejected { error },
        },
        Command::PointerDown { x, y } => CommandOutcome::Pointer {
            joint: pointer_down(world, x, y),
        },
        Command::BeginDrag { joint } => {
            begin_drag(world, joint);
            CommandOutcome::Applied
        }
        Command::DragTo { x, y } => {
            drag_to(world, x, y);
            CommandOutcome::Applied
        }
        Command::EndDrag => {
            end_drag(world);
            CommandOutcome::Applied
        }
        Command::SetJointDirect { joint, angle } => {
            set_joint_direct(world, joint, angle);
            CommandOutcome::Applied
        }
        Command::ToggleClaw => CommandOutcome::Claw {
            result: toggle_claw(world),
        },
        Command::Reset => {
            reset(world);
            CommandOutcome::Applied
        }
    }
}

pub(super) fn set_target(world: &mut SimulationCore, x: f32, y: f32) -> Result<(), ArmError> {
    match world.arm.set_target(&world.config.arm, x, y) {
        Ok(_) => Ok(()),
        Err(err) => {
            if let ArmError::Unreachable { .. } = err {
                world.notice = Some(Notice::error("Out of reach!", world.config.notice_ticks));
            }
            Err(err)
        }
    }
}

pub(super) fn pointer_down(world: &mut SimulationCore, x: f32, y: f32) -> Option<Joint> {
    world.arm.pointer_down(&world.config.arm, x, y)
}

pub(super) fn begin_drag(world: &mut SimulationCore, joint: Joint) {
    world.arm.begin_drag(joint);
}

pub(super) fn drag_to(world: &mut SimulationCore, x: f32, y: f32) {
    world.arm.drag_to(&world.config.arm, x, y);
}

pub(super) fn end_drag(world: &mut SimulationCore) {
    world.arm.end_drag();
}

pub(super) fn set_joint_direct(world: &mut SimulationCore, joint: Joint, angle: f32) {
    world.arm.set_joint_direct(&world.config.arm, joint, angle);
}

pub(super) fn toggle_claw(world: &mut SimulationCore) -> ClawResult {
    let end = world.arm.pose(&world.config.arm).end;
    let result = world.claw.toggle(&world.config.claw, &world.boxes, end);

    let ticks = world.config.notice_ticks;
    match result {
        ClawResult::Grabbed(_) => world.notice = Some(Notice::success("Grabbed box!", ticks)),
        ClawResult::NoBoxNearby => world.notice = Some(Notice::error("No box nearby", ticks)),
        ClawResult::Released(Some(_)) => world.notice = Some(Notice::success("Dropped box!", ticks)),
        ClawResult::Released(None) => {}
    }
    result
}

/// Swap in a fresh box set and open the claw in one step, so no id from the
/// old set can stay held.
pub(super) fn reset(world: &mut SimulationCore) {
    world.boxes.reset(world.config.boxes.clone());
    world.claw = ClawState::new();
    world.stack_height = stack_height(world.boxes.boxes(), None, &world.config.stack);
    world.notice = Some(Notice::success("Reset complete!", world.config.notice_ticks));
    info!(boxes = world.boxes.box_count(), "simulation reset");
}
