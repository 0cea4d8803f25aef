use bevy::prelude::*;

use super::core::{ActiveSession, FrameClock, Screen, SettingsStore};
use super::UpdateSet;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Playing), reset_clock)
            .add_systems(
                Update,
                advance_session
                    .in_set(UpdateSet::Simulate)
                    .run_if(in_state(Screen::Playing)),
            );
    }
}

fn reset_clock(mut clock: ResMut<FrameClock>) {
    clock.reset();
}

fn advance_session(
    time: Res<Time>,
    mut clock: ResMut<FrameClock>,
    mut active: ResMut<ActiveSession>,
    mut settings: ResMut<SettingsStore>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let delta_ms = clock.take(time.delta_secs_f64());
    let Some(session) = active.session.as_mut() else {
        next_screen.set(Screen::Menu);
        return;
    };
    let Some(result) = session.advance(delta_ms) else {
        return;
    };

    info!(
        "{} finished with score {:.1}",
        result.kind.name(),
        result.score.as_f64()
    );
    settings.data.record(&result);
    settings.save();

    active.session = None;
    active.last_result = Some(result);
    next_screen.set(Screen::Menu);
}
