use crate::domain::WorldConfig;
use crate::systems::arm_motion::ArmState;
use crate::systems::box_physics::BoxPhysicsSystem;
use crate::systems::claw::ClawState;
use crate::systems::stack::stack_height;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_core(config: WorldConfig) -> SimulationCore {
    let boxes = BoxPhysicsSystem::new(config.boxes.clone());
    let stack = stack_height(boxes.boxes(), None, &config.stack);

    SimulationCore {
        arm: ArmState::new(&config.arm),
        claw: ClawState::new(),
        boxes,
        stack_height: stack,
        notice: None,
        frame: 0,
        last_outcomes: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
