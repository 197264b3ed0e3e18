//! Geometry value types shared by every system

mod vec2;

pub use vec2::Vec2;
