use aimtrainer_shared::session::{ModeKind, SessionResult};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};
use crate::store::SavedData;

use super::core::{ActiveSession, RunSeed, Screen, SettingsStore};
use super::UpdateSet;

pub struct MenuPlugin;

#[derive(Component)]
struct MenuRoot;

#[derive(Component)]
struct MenuBodyText;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_menu)
            .add_systems(OnEnter(Screen::Menu), show_menu)
            .add_systems(OnExit(Screen::Menu), hide_menu)
            .add_systems(
                Update,
                menu_input
                    .in_set(UpdateSet::Input)
                    .run_if(in_state(Screen::Menu)),
            )
            .add_systems(
                Update,
                update_menu_text
                    .in_set(UpdateSet::Visuals)
                    .run_if(in_state(Screen::Menu)),
            );
    }
}

fn best_label(data: &SavedData, kind: ModeKind) -> String {
    match data.history.best(kind) {
        Some(best) => format!("Best: {best:.0}"),
        None => "Best: -".to_string(),
    }
}

fn last_result_label(result: &SessionResult) -> String {
    match result.kind {
        ModeKind::Gridshot => format!("Last: Gridshot {:.0}", result.score.as_f64()),
        ModeKind::Tracking => format!("Last: Tracking {:.1}s", result.score.as_f64()),
    }
}

fn menu_text(data: &SavedData, last: Option<&SessionResult>) -> String {
    let mut lines = vec![
        format!("1  Gridshot   {}", best_label(data, ModeKind::Gridshot)),
        format!("2  Tracking   {}", best_label(data, ModeKind::Tracking)),
        String::new(),
        format!("[ ]  Sensitivity: {:.3}", data.sensitivity),
        format!("- =  FOV: {:.0}", data.fov),
        format!(
            "C    Challenge: {}",
            if data.challenge_mode { "ON" } else { "OFF" }
        ),
        String::new(),
        "Esc  Quit".to_string(),
    ];
    if let Some(result) = last {
        lines.insert(0, last_result_label(result));
        lines.insert(1, String::new());
    }
    lines.join("\n")
}

fn spawn_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("AIM TRAINER"),
                TextFont::from_font_size(48.0),
                TextColor(color_from_hex(Colors::MENU_ACCENT)),
            ));
            parent.spawn((
                Text::new(""),
                TextFont::from_font_size(22.0),
                TextColor(color_from_hex(Colors::TEXT)),
                MenuBodyText,
            ));
        });
}

fn show_menu(mut q_root: Query<&mut Visibility, With<MenuRoot>>) {
    for mut vis in &mut q_root {
        *vis = Visibility::Visible;
    }
}

fn hide_menu(mut q_root: Query<&mut Visibility, With<MenuRoot>>) {
    for mut vis in &mut q_root {
        *vis = Visibility::Hidden;
    }
}

fn menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<SettingsStore>,
    mut seed: ResMut<RunSeed>,
    mut active: ResMut<ActiveSession>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
        return;
    }

    let kind = if keys.any_just_pressed([KeyCode::Digit1, KeyCode::Numpad1]) {
        Some(ModeKind::Gridshot)
    } else if keys.any_just_pressed([KeyCode::Digit2, KeyCode::Numpad2]) {
        Some(ModeKind::Tracking)
    } else {
        None
    };
    if let Some(kind) = kind {
        active.begin(kind, &settings, &mut seed);
        next_screen.set(Screen::Playing);
        return;
    }

    let mut changed = false;
    if keys.just_pressed(KeyCode::KeyC) {
        settings.data.toggle_challenge();
        changed = true;
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        settings.data.step_sensitivity(false);
        changed = true;
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        settings.data.step_sensitivity(true);
        changed = true;
    }
    if keys.just_pressed(KeyCode::Minus) {
        settings.data.step_fov(false);
        changed = true;
    }
    if keys.just_pressed(KeyCode::Equal) {
        settings.data.step_fov(true);
        changed = true;
    }
    if changed {
        settings.save();
    }
}

fn update_menu_text(
    settings: Res<SettingsStore>,
    active: Res<ActiveSession>,
    mut q_body: Query<&mut Text, With<MenuBodyText>>,
) {
    let Ok(mut text) = q_body.single_mut() else {
        return;
    };
    let body = menu_text(&settings.data, active.last_result.as_ref());
    if text.0 != body {
        text.0 = body;
    }
}
