use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

pub type BoxId = u32;

/// A movable square box
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoBox {
    pub id: BoxId,
    /// Center position
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    /// Side length
    pub size: f32,
    /// CSS color, only used by the renderer
    pub color: String,
}

impl CargoBox {
    pub fn new(id: BoxId, x: f32, y: f32, size: f32, color: &str) -> Self {
        Self {
            id,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size,
            color: color.to_string(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn half(&self) -> f32 {
        self.size * 0.5
    }
}

pub const DEFAULT_BOX_SIZE: f32 = 26.0;

/// The four boxes resting on the floor at startup
pub fn default_boxes() -> Vec<CargoBox> {
    vec![
        CargoBox::new(1, 80.0, 294.0, DEFAULT_BOX_SIZE, "#ef4444"),
        CargoBox::new(2, 320.0, 294.0, DEFAULT_BOX_SIZE, "#3b82f6"),
        CargoBox::new(3, 140.0, 294.0, DEFAULT_BOX_SIZE, "#22c55e"),
        CargoBox::new(4, 260.0, 294.0, DEFAULT_BOX_SIZE, "#a855f7"),
    ]
}
