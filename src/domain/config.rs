//! World configuration
//!
//! Every geometry and physics constant the engine uses lives here. The
//! defaults reproduce the reference 400x340 layout; an embedder can override
//! any subset of them with a JSON bundle (missing fields keep their default).

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::boxes::{default_boxes, CargoBox};
use super::errors::ConfigError;
use crate::geometry::Vec2;

/// Inclusive angle range in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, deg: f32) -> f32 {
        deg.clamp(self.min, self.max)
    }
}

/// Immutable arm geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    pub base_x: f32,
    pub base_y: f32,
    /// Upper arm (shoulder to elbow)
    pub upper_len: f32,
    /// Lower arm (elbow to claw pivot)
    pub lower_len: f32,
    pub joint1_range: AngleRange,
    pub joint2_range: AngleRange,
    /// Keeps IK targets this far inside the reachable annulus
    pub reach_margin: f32,
    pub initial_joint1: f32,
    pub initial_joint2: f32,
    /// Pointer radius around the base that starts a shoulder drag
    pub base_grab_radius: f32,
    /// Pointer radius around the elbow that starts an elbow drag
    pub elbow_grab_radius: f32,
}

impl ArmConfig {
    #[inline]
    pub fn base(&self) -> Vec2 {
        Vec2::new(self.base_x, self.base_y)
    }

    pub fn max_reach(&self) -> f32 {
        self.upper_len + self.lower_len - self.reach_margin
    }

    pub fn min_reach(&self) -> f32 {
        (self.upper_len - self.lower_len).abs() + self.reach_margin
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            base_x: 200.0,
            base_y: 300.0,
            upper_len: 100.0,
            lower_len: 80.0,
            joint1_range: AngleRange::new(-180.0, 180.0),
            joint2_range: AngleRange::new(-150.0, 150.0),
            reach_margin: 5.0,
            initial_joint1: 45.0,
            initial_joint2: -30.0,
            base_grab_radius: 15.0,
            elbow_grab_radius: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vy every tick
    pub gravity: f32,
    /// Horizontal velocity multiplier on floor and stacking contact
    pub friction: f32,
    /// Restitution for floor, wall and box contacts
    pub bounce: f32,
    /// |vy| below this after a floor bounce is zeroed
    pub rest_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.8,
            bounce: 0.3,
            rest_threshold: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the remaining joint delta covered per tick
    pub ease_factor: f32,
    /// Joints closer than this (degrees) snap to their target
    pub snap_threshold: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            ease_factor: 0.12,
            snap_threshold: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClawConfig {
    /// Max distance from the claw pivot to a box center for a grab
    pub grab_radius: f32,
    /// Held box center sits this far below the claw pivot
    pub carry_offset: f32,
    pub finger_length: f32,
    /// Finger half-angle in radians
    pub spread_open: f32,
    pub spread_closed: f32,
}

impl Default for ClawConfig {
    fn default() -> Self {
        Self {
            grab_radius: 40.0,
            carry_offset: 18.0,
            finger_length: 18.0,
            spread_open: 0.45,
            spread_closed: 0.12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// A box counts as stacked on another only if it is higher by more than this
    pub min_rise: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self { min_rise: 20.0 }
    }
}

/// Complete engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub floor_y: f32,
    pub arm: ArmConfig,
    pub physics: PhysicsConfig,
    pub motion: MotionConfig,
    pub claw: ClawConfig,
    pub stack: StackConfig,
    /// Notice lifetime in ticks (2 s at 60 Hz)
    pub notice_ticks: u32,
    /// Box set created at startup and restored by reset
    pub boxes: Vec<CargoBox>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 340.0,
            floor_y: 307.0,
            arm: ArmConfig::default(),
            physics: PhysicsConfig::default(),
            motion: MotionConfig::default(),
            claw: ClawConfig::default(),
            stack: StackConfig::default(),
            notice_ticks: 120,
            boxes: default_boxes(),
        }
    }
}

impl WorldConfig {
    /// Parse a (possibly partial) JSON bundle and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.world_width) || !positive(self.world_height) {
            return Err(ConfigError::InvalidGeometry(format!(
                "world must have positive size, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if !positive(self.arm.upper_len) || !positive(self.arm.lower_len) {
            return Err(ConfigError::InvalidGeometry(format!(
                "arm links must be positive, got {} and {}",
                self.arm.upper_len, self.arm.lower_len
            )));
        }
        if self.arm.min_reach() >= self.arm.max_reach() {
            return Err(ConfigError::InvalidGeometry(
                "arm reach annulus is empty after the safety margin".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.boxes.len());
        for b in &self.boxes {
            if !positive(b.size) {
                return Err(ConfigError::InvalidGeometry(format!(
                    "box {} must have a positive size, got {}",
                    b.id, b.size
                )));
            }
            if !seen.insert(b.id) {
                return Err(ConfigError::DuplicateBoxId(b.id));
            }
        }
        Ok(())
    }
}

/// Strictly positive; NaN is not.
fn positive(v: f32) -> bool {
    v.partial_cmp(&0.0) == Some(Ordering::Greater)
}
