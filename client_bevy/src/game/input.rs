use bevy::ecs::message::MessageReader;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use super::core::{ActiveSession, Screen};
use super::UpdateSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Playing), grab_cursor)
            .add_systems(OnExit(Screen::Playing), release_cursor)
            .add_systems(
                Update,
                (abandon_on_escape, mouse_look, fire)
                    .chain()
                    .in_set(UpdateSet::Input),
            );
    }
}

fn grab_cursor(
    mut cursor: Single<&mut CursorOptions>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
    let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
    window.set_cursor_position(Some(center));
}

fn release_cursor(mut cursor: Single<&mut CursorOptions>) {
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
}

fn abandon_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    screen: Res<State<Screen>>,
    mut active: ResMut<ActiveSession>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if *screen.get() != Screen::Playing || !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    if let Some(session) = active.session.take() {
        info!("abandoned {} session", session.kind().name());
    }
    next_screen.set(Screen::Menu);
}

/// Raw motion always drains so a new session never sees stale deltas.
fn mouse_look(mut motion: MessageReader<MouseMotion>, mut active: ResMut<ActiveSession>) {
    let mut delta = Vec2::ZERO;
    for event in motion.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }
    let Some(session) = active.session.as_mut() else {
        return;
    };
    session.apply_motion(delta.x as f64, delta.y as f64);
}

fn fire(mouse: Res<ButtonInput<MouseButton>>, mut active: ResMut<ActiveSession>) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if let Some(session) = active.session.as_mut() {
        session.click();
    }
}
