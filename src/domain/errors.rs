//! Error types for engine commands and configuration.

use serde::Serialize;
use thiserror::Error;

/// A rejected arm command. The simulation state is untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
pub enum ArmError {
    /// Target lies outside the arm's reachable annulus.
    #[error("target ({x:.1}, {y:.1}) is out of reach")]
    Unreachable {
        /// Requested x
        x: f32,
        /// Requested y
        y: f32,
    },

    /// A joint is being dragged; targets are ignored until the drag ends.
    #[error("a joint drag is in progress")]
    DragActive,

    /// The point lies on the base or elbow handle, which belongs to drag input.
    #[error("target is on a joint handle")]
    OnHandle,
}

/// Errors from loading a configuration bundle.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bundle is not valid JSON for `WorldConfig`.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size or length is non-positive, or the reach annulus is empty.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Two boxes share an id.
    #[error("duplicate box id {0}")]
    DuplicateBoxId(u32),
}
