//! Simulation - one owned model, advanced one fixed step per `tick`
//!
//! The embedder (render loop, game loop, test) owns the clock. Per tick:
//!   queued commands -> box physics -> arm easing -> stack height -> snapshot
//!
//! SimulationCore only orchestrates; the work lives in systems/:
//! - kinematics and easing in systems::kinematics / systems::arm_motion
//! - box dynamics in systems::box_physics
//! - grab / release in systems::claw
//! - stack height in systems::stack

use crate::domain::{ArmError, BoxId, ConfigError, WorldConfig};
use crate::systems::arm_motion::{ArmState, Joint};
use crate::systems::box_physics::BoxPhysicsSystem;
use crate::systems::claw::{ClawResult, ClawState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/queue.rs"]
mod queue;
#[path = "notices/notices.rs"]
mod notices;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::{Command, CommandOutcome};
pub use facade::Simulation;
pub use notices::{Notice, NoticeKind};
pub use perf_stats::PerfStats;
pub use queue::CommandQueue;
pub use render_extract::{ClawSnapshot, SimulationState};

use perf_timer::PerfTimer;

/// The whole mutable model: arm, claw and boxes
pub struct SimulationCore {
    config: WorldConfig,
    arm: ArmState,
    claw: ClawState,
    boxes: BoxPhysicsSystem,

    // Derived every tick
    stack_height: u32,
    notice: Option<Notice>,
    frame: u64,
    last_outcomes: Vec<CommandOutcome>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Reference layout: 400x340 world, four boxes on the floor
    pub fn new() -> Self {
        init::create_core(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        init::create_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        Ok(init::create_core(WorldConfig::from_json(json)?))
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stack_height(&self) -> u32 {
        self.stack_height
    }

    pub fn held_box(&self) -> Option<BoxId> {
        self.claw.held_box
    }

    pub fn is_animating(&self) -> bool {
        self.arm.animating
    }

    pub fn box_count(&self) -> usize {
        self.boxes.box_count()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Apply one command right away and report what happened.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        commands::apply(self, command)
    }

    /// Move the claw toward `(x, y)`. Rejected mid-drag or when out of reach.
    pub fn set_target(&mut self, x: f32, y: f32) -> Result<(), ArmError> {
        commands::set_target(self, x, y)
    }

    /// Start a drag if the pointer is on the base or elbow handle.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<Joint> {
        commands::pointer_down(self, x, y)
    }

    pub fn begin_drag(&mut self, joint: Joint) {
        commands::begin_drag(self, joint)
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        commands::drag_to(self, x, y)
    }

    pub fn end_drag(&mut self) {
        commands::end_drag(self)
    }

    /// Slider input: set a joint angle immediately
    pub fn set_joint_direct(&mut self, joint: Joint, angle: f32) {
        commands::set_joint_direct(self, joint, angle)
    }

    pub fn toggle_claw(&mut self) -> ClawResult {
        commands::toggle_claw(self)
    }

    /// Restore the configured boxes and open the claw
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === CLOCK ===

    /// Drain `queue`, then advance one step and return the new snapshot.
    pub fn tick(&mut self, queue: &mut CommandQueue) -> SimulationState {
        self.last_outcomes.clear();
        for command in queue.drain() {
            let outcome = commands::apply(self, command);
            self.last_outcomes.push(outcome);
        }
        let applied = self.last_outcomes.len() as u32;
        step::step(self, applied);
        self.current_state()
    }

    /// Advance one step with no new input
    pub fn step(&mut self) {
        step::step(self, 0);
    }

    /// Outcomes of the commands drained by the last `tick`, in order
    pub fn last_outcomes(&self) -> &[CommandOutcome] {
        &self.last_outcomes
    }

    /// Read-only snapshot for rendering
    pub fn current_state(&self) -> SimulationState {
        render_extract::extract_state(self)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
