use tracing::trace;

use crate::domain::{BoxId, CargoBox, WorldConfig};
use crate::geometry::Vec2;

use super::collision::resolve_box_collisions;
use super::integrate::{carry_box, integrate_box};

/// Owns every box in the world
pub struct BoxPhysicsSystem {
    boxes: Vec<CargoBox>,
}

impl BoxPhysicsSystem {
    pub fn new(boxes: Vec<CargoBox>) -> Self {
        Self { boxes }
    }

    /// Replace the whole box set at once.
    pub fn reset(&mut self, boxes: Vec<CargoBox>) {
        self.boxes = boxes;
    }

    pub fn boxes(&self) -> &[CargoBox] {
        &self.boxes
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn get(&self, id: BoxId) -> Option<&CargoBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut CargoBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    /// First box (in storage order) whose center is closer than `radius` to `point`.
    pub fn find_near(&self, point: Vec2, radius: f32) -> Option<BoxId> {
        self.boxes
            .iter()
            .find(|b| b.center().distance(point) < radius)
            .map(|b| b.id)
    }

    /// Advance all boxes one tick.
    ///
    /// `claw_end` is the current end effector; the held box (if any) is
    /// placed under it instead of being integrated.
    pub fn update(&mut self, config: &WorldConfig, held: Option<BoxId>, claw_end: Vec2) {
        for b in self.boxes.iter_mut() {
            if Some(b.id) == held {
                carry_box(b, claw_end, config.claw.carry_offset);
                continue;
            }
            integrate_box(b, &config.physics, config.floor_y, config.world_width);
        }

        resolve_box_collisions(&mut self.boxes, held, &config.physics);
        trace!(boxes = self.boxes.len(), "box physics step");
    }
}

impl Default for BoxPhysicsSystem {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
