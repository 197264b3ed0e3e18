use wasm_bindgen::prelude::*;

use crate::systems::arm_motion::Joint;

use super::perf_stats::PerfStats;
use super::queue::CommandQueue;
use super::SimulationCore;

/// JS joint codes: 0 = none, 1 = shoulder, 2 = elbow
fn joint_from_code(code: u8) -> Option<Joint> {
    match code {
        1 => Some(Joint::Joint1),
        2 => Some(Joint::Joint2),
        _ => None,
    }
}

fn joint_code(joint: Option<Joint>) -> u8 {
    match joint {
        None => 0,
        Some(Joint::Joint1) => 1,
        Some(Joint::Joint2) => 2,
    }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
    queue: CommandQueue,
}

#[wasm_bindgen]
impl Simulation {
    /// Reference layout with the default four boxes
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
            queue: CommandQueue::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core,
            queue: CommandQueue::new(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn stack_height(&self) -> u32 { self.core.stack_height() }

    #[wasm_bindgen(getter)]
    pub fn held_box(&self) -> Option<u32> { self.core.held_box() }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool { self.core.is_animating() }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Queue a JSON array of commands for the next tick. Returns how many were queued.
    pub fn enqueue_json(&mut self, json: String) -> Result<usize, JsValue> {
        self.queue
            .push_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply queued commands and advance one step
    pub fn tick(&mut self) {
        self.core.tick(&mut self.queue);
    }

    /// Click-to-target. Returns false when rejected (out of reach or mid-drag).
    pub fn set_target(&mut self, x: f32, y: f32) -> bool {
        self.core.set_target(x, y).is_ok()
    }

    /// Returns the joint code of the handle under the pointer (0 if none)
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u8 {
        joint_code(self.core.pointer_down(x, y))
    }

    pub fn begin_drag(&mut self, joint: u8) {
        if let Some(joint) = joint_from_code(joint) {
            self.core.begin_drag(joint);
        }
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.core.drag_to(x, y);
    }

    pub fn end_drag(&mut self) {
        self.core.end_drag();
    }

    /// Slider input
    pub fn set_joint(&mut self, joint: u8, angle: f32) {
        if let Some(joint) = joint_from_code(joint) {
            self.core.set_joint_direct(joint, angle);
        }
    }

    /// Returns the claw outcome as JSON, e.g. `{"kind":"Grabbed","box_id":1}`
    pub fn toggle_claw(&mut self) -> String {
        let result = self.core.toggle_claw();
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn state_json(&self) -> String {
        self.core.current_state().to_json()
    }

    pub fn last_outcomes_json(&self) -> String {
        serde_json::to_string(self.core.last_outcomes()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
