use aimtrainer_shared::projection::{ScreenPos, Viewport};
use bevy::prelude::Vec3;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Canvas pixel coordinates (origin top-left, Y-down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxPos {
    pub x: f32,
    pub y: f32,
}

impl PxPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<ScreenPos> for PxPos {
    fn from(pos: ScreenPos) -> Self {
        Self::new(pos.x as f32, pos.y as f32)
    }
}

/// The viewport the engine projects into.
pub fn canvas_viewport() -> Viewport {
    Viewport::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64)
}

/// Convert canvas pixel coordinates (Y-down) to Bevy world coordinates (Y-up).
pub fn px_to_world(px: PxPos, z: f32) -> Vec3 {
    let wx = px.x - CANVAS_WIDTH * 0.5;
    let wy = (CANVAS_HEIGHT - px.y) - CANVAS_HEIGHT * 0.5;
    Vec3::new(wx, wy, z)
}
