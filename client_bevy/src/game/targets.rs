use aimtrainer_shared::session::ModeKind;
use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;

use crate::constants::{
    color_from_hex, Colors, CHALLENGE_TARGET_SCALE, MAX_TARGET_MARKERS, TARGET_HALF_SIZE,
};
use crate::coord::{px_to_world, PxPos};

use super::core::ActiveSession;
use super::UpdateSet;

pub struct TargetsPlugin;

/// One pooled square; `index` selects the projected target it shows.
#[derive(Component)]
struct TargetMarker {
    index: usize,
}

impl Plugin for TargetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_target_markers)
            .add_systems(Update, update_target_markers.in_set(UpdateSet::Visuals));
    }
}

/// Fill colour and scale of a target for the given mode.
fn marker_style(kind: ModeKind, challenge_mode: bool) -> (u32, f32) {
    match kind {
        ModeKind::Gridshot if challenge_mode => (Colors::GRID_TARGET, CHALLENGE_TARGET_SCALE),
        ModeKind::Gridshot => (Colors::GRID_TARGET, 1.0),
        ModeKind::Tracking => (Colors::TRACKING_TARGET, 1.0),
    }
}

fn spawn_target_markers(mut commands: Commands) {
    let square = shapes::Rectangle {
        extents: Vec2::splat(TARGET_HALF_SIZE * 2.0),
        origin: shapes::RectangleOrigin::Center,
        radii: None,
    };

    for index in 0..MAX_TARGET_MARKERS {
        commands.spawn((
            ShapeBuilder::with(&square)
                .fill(color_from_hex(Colors::GRID_TARGET))
                .build(),
            Transform::from_xyz(0.0, 0.0, 1.0),
            Visibility::Hidden,
            TargetMarker { index },
        ));
    }
}

fn update_target_markers(
    active: Res<ActiveSession>,
    mut q_markers: Query<(&TargetMarker, &mut Transform, &mut Visibility, &mut Shape)>,
) {
    for (_marker, _tf, mut vis, _shape) in &mut q_markers {
        *vis = Visibility::Hidden;
    }

    let Some(session) = active.session.as_ref() else {
        return;
    };
    if !session.mode().is_active() {
        return;
    }

    let targets = session.visible_targets();
    let (color, scale) = marker_style(session.kind(), session.mode().challenge_mode());

    for (marker, mut tf, mut vis, mut shape) in &mut q_markers {
        let Some(pos) = targets.get(marker.index) else {
            continue;
        };
        let world = px_to_world(PxPos::from(*pos), 1.0);
        tf.translation = world;
        tf.scale = Vec3::new(scale, scale, 1.0);
        *vis = Visibility::Visible;
        if let Some(fill) = shape.fill.as_mut() {
            fill.color = color_from_hex(color);
        }
    }
}
