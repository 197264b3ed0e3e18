//! Armstack Engine - 2-link robot arm and box stacking simulation in WASM
//!
//! Architecture:
//! - geometry/   - Vec2 value type
//! - domain/     - configuration, boxes, errors
//! - systems/    - kinematics, arm motion, box physics, stack analysis, claw
//! - simulation/ - orchestration only (commands, tick, snapshot, wasm facade)
//!
//! The engine never draws and never reads a clock: the embedder calls `tick`
//! once per frame and renders the returned `SimulationState`.

pub mod geometry;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Armstack engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ArmConfig, ArmError, BoxId, CargoBox, ConfigError, WorldConfig};
pub use geometry::Vec2;
pub use simulation::{
    Command, CommandOutcome, CommandQueue, Notice, NoticeKind, PerfStats, Simulation, SimulationCore,
    SimulationState,
};
pub use systems::arm_motion::Joint;
pub use systems::claw::ClawResult;
pub use systems::kinematics::{solve_forward, solve_inverse, ArmPose, JointAngles};
