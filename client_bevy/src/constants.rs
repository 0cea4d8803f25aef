/// Fixed logical canvas. Targets are projected into this pixel space and the
/// camera is scaled so it always fits the window.
pub const CANVAS_WIDTH: f32 = 1280.0;
pub const CANVAS_HEIGHT: f32 = 720.0;

/// Half-size of a drawn target square (pixels).
pub const TARGET_HALF_SIZE: f32 = 20.0;
/// Gridshot under challenge mode draws targets at this fraction of full size.
pub const CHALLENGE_TARGET_SCALE: f32 = 0.5;

/// Upper bound on simultaneously drawn targets.
pub const MAX_TARGET_MARKERS: usize = 9;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x000000;
    pub const GRID_TARGET: u32 = 0xc83232;
    pub const TRACKING_TARGET: u32 = 0xc832c8;
    pub const TEXT: u32 = 0xffffff;
    pub const MENU_ACCENT: u32 = 0x64c8c8;
    pub const CHALLENGE: u32 = 0xffaa00;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

pub fn color_from_rgb(r: u8, g: u8, b: u8) -> bevy::prelude::Color {
    color_from_hex(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
}
