use crate::systems::stack::stack_height;

use super::{PerfTimer, SimulationCore};

/// Advance one fixed step. `commands_applied` is the number of commands drained
/// just before this step (0 for a bare step).
pub(super) fn step(world: &mut SimulationCore, commands_applied: u32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.commands_applied = commands_applied;
        world.perf_stats.box_count = world.boxes.box_count() as u32;
    }
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // === BOX PHYSICS ===
    // Carry uses the claw position from before this tick's arm motion.
    let end = world.arm.pose(&world.config.arm).end;
    let held = world.claw.held_box;
    world.boxes.update(&world.config, held, end);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.physics_ms = t.lap_ms();
    }

    // === ARM MOTION ===
    world.arm.step(&world.config.motion);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.arm_ms = t.lap_ms();
    }

    // === DERIVED METRICS ===
    world.stack_height = stack_height(world.boxes.boxes(), held, &world.config.stack);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.stack_ms = t.lap_ms();
    }

    if let Some(notice) = world.notice.as_mut() {
        if !notice.tick() {
            world.notice = None;
        }
    }

    if let Some(t) = timer {
        world.perf_stats.step_ms = t.elapsed_ms();
    }

    world.frame += 1;
}
