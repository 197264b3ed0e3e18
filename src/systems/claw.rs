//! Claw / grab protocol
//!
//! Closing only succeeds with a box in range; a failed close leaves the claw
//! open. Opening always clears the held box.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{BoxId, ClawConfig};
use crate::geometry::Vec2;
use crate::systems::box_physics::BoxPhysicsSystem;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClawState {
    pub closed: bool,
    /// Only `Some` while `closed`
    pub held_box: Option<BoxId>,
}

/// Outcome of a claw toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "box_id")]
pub enum ClawResult {
    Grabbed(BoxId),
    NoBoxNearby,
    /// Claw opened; carries the box that was dropped, if any
    Released(Option<BoxId>),
}

impl ClawState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, config: &ClawConfig, boxes: &BoxPhysicsSystem, end: Vec2) -> ClawResult {
        if self.closed {
            let dropped = self.held_box.take();
            self.closed = false;
            if let Some(id) = dropped {
                info!(box_id = id, "box released");
            }
            return ClawResult::Released(dropped);
        }

        match boxes.find_near(end, config.grab_radius) {
            Some(id) => {
                self.closed = true;
                self.held_box = Some(id);
                info!(box_id = id, "box grabbed");
                ClawResult::Grabbed(id)
            }
            None => {
                debug!(x = end.x, y = end.y, "no box within claw reach");
                ClawResult::NoBoxNearby
            }
        }
    }

    /// Finger half-angle used by the renderer
    pub fn spread(&self, config: &ClawConfig) -> f32 {
        if self.closed {
            config.spread_closed
        } else {
            config.spread_open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_boxes;

    #[test]
    fn grab_then_release() {
        let config = ClawConfig::default();
        let boxes = BoxPhysicsSystem::new(default_boxes());
        let mut claw = ClawState::new();

        assert_eq!(claw.toggle(&config, &boxes, Vec2::new(140.0, 270.0)), ClawResult::Grabbed(3));
        assert!(claw.closed);
        assert_eq!(claw.held_box, Some(3));
        assert_eq!(claw.spread(&config), config.spread_closed);

        assert_eq!(claw.toggle(&config, &boxes, Vec2::new(0.0, 0.0)), ClawResult::Released(Some(3)));
        assert_eq!(claw, ClawState::new());
    }

    #[test]
    fn empty_close_keeps_claw_open() {
        let config = ClawConfig::default();
        let boxes = BoxPhysicsSystem::new(default_boxes());
        let mut claw = ClawState::new();

        assert_eq!(claw.toggle(&config, &boxes, Vec2::new(200.0, 100.0)), ClawResult::NoBoxNearby);
        assert_eq!(claw, ClawState::new());
    }

    #[test]
    fn first_box_in_order_wins() {
        let config = ClawConfig::default();
        // Between box 1 (x=80) and box 3 (x=140), both within 40.
        let boxes = BoxPhysicsSystem::new(default_boxes());
        let mut claw = ClawState::new();
        assert_eq!(claw.toggle(&config, &boxes, Vec2::new(110.0, 290.0)), ClawResult::Grabbed(1));
    }
}
