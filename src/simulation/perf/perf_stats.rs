use wasm_bindgen::prelude::*;

/// Per-tick timing breakdown, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) arm_ms: f64,
    pub(super) stack_ms: f64,
    pub(super) commands_applied: u32,
    pub(super) box_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn arm_ms(&self) -> f64 { self.arm_ms }
    #[wasm_bindgen(getter)]
    pub fn stack_ms(&self) -> f64 { self.stack_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_applied(&self) -> u32 { self.commands_applied }
    #[wasm_bindgen(getter)]
    pub fn box_count(&self) -> u32 { self.box_count }
}
