use bevy::prelude::*;

use crate::constants::{color_from_rgb, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::coord::{px_to_world, PxPos};

use super::core::{ActiveSession, SettingsStore};
use super::UpdateSet;

pub struct CrosshairPlugin;

impl Plugin for CrosshairPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_crosshair.in_set(UpdateSet::Visuals));
    }
}

/// Four arms around `center`, each running from `gap` to `len` px out.
/// `None` when `len` does not reach past the gap.
fn crosshair_segments(center: Vec2, gap: f32, len: f32) -> Option<[(Vec2, Vec2); 4]> {
    if len <= gap {
        return None;
    }
    let inner = gap;
    let outer = len;
    Some([
        (center + Vec2::new(inner, 0.0), center + Vec2::new(outer, 0.0)),
        (center - Vec2::new(inner, 0.0), center - Vec2::new(outer, 0.0)),
        (center + Vec2::new(0.0, inner), center + Vec2::new(0.0, outer)),
        (center - Vec2::new(0.0, inner), center - Vec2::new(0.0, outer)),
    ])
}

fn draw_crosshair(mut gizmos: Gizmos, active: Res<ActiveSession>, settings: Res<SettingsStore>) {
    let Some(session) = active.session.as_ref() else {
        return;
    };
    if !session.mode().is_active() {
        return;
    }

    let data = &settings.data;
    let (r, g, b) = data.crosshair_rgb();
    let color = color_from_rgb(r, g, b);
    let center = px_to_world(PxPos::new(CANVAS_WIDTH * 0.5, CANVAS_HEIGHT * 0.5), 0.0).truncate();

    let Some(segments) =
        crosshair_segments(center, data.cross_gap as f32, data.cross_len as f32)
    else {
        return;
    };
    for (start, end) in segments {
        gizmos.line_2d(start, end, color);
    }
}
