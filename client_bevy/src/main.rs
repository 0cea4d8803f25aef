mod constants;
mod coord;
mod game;
mod store;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_prototype_lyon::prelude::ShapePlugin;

use game::core::seed_from_env_or_clock;
use game::{
    CorePlugin, CrosshairPlugin, HudPlugin, InputPlugin, MenuPlugin, SessionPlugin,
    TargetsPlugin,
};

fn main() {
    let data_file = store::data_file_from_env();
    let seed = seed_from_env_or_clock();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Aim Trainer".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ShapePlugin)
        .add_plugins(CorePlugin { data_file, seed })
        .add_plugins(MenuPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(SessionPlugin)
        .add_plugins(TargetsPlugin)
        .add_plugins(CrosshairPlugin)
        .add_plugins(HudPlugin)
        .run();
}
