use bevy::prelude::*;

use crate::game::core::ActiveSession;

use super::types::{countdown_label, stats_line, HudChallengeText, HudCountdownText, HudStatsText};

type StatsTextQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut Text, &'static mut Visibility),
    (With<HudStatsText>, Without<HudChallengeText>),
>;
type ChallengeTextQuery<'w, 's> =
    Query<'w, 's, &'static mut Visibility, (With<HudChallengeText>, Without<HudStatsText>)>;

pub(super) fn update_stats_ui(
    active: Res<ActiveSession>,
    mut q_stats: StatsTextQuery,
    mut q_challenge: ChallengeTextQuery,
) {
    let hud = active
        .session
        .as_ref()
        .filter(|s| s.mode().is_active())
        .map(|s| s.hud());

    if let Ok((mut text, mut vis)) = q_stats.single_mut() {
        match &hud {
            Some(hud) => {
                let line = stats_line(hud);
                if text.0 != line {
                    text.0 = line;
                }
                *vis = Visibility::Visible;
            }
            None => *vis = Visibility::Hidden,
        }
    }

    if let Ok(mut vis) = q_challenge.single_mut() {
        *vis = if hud.as_ref().is_some_and(|h| h.challenge_mode) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(super) fn update_countdown_ui(
    active: Res<ActiveSession>,
    mut q_countdown: Query<(&mut Text, &mut Visibility), With<HudCountdownText>>,
) {
    let Ok((mut text, mut vis)) = q_countdown.single_mut() else {
        return;
    };

    let Some(session) = active
        .session
        .as_ref()
        .filter(|s| s.mode().is_in_countdown())
    else {
        *vis = Visibility::Hidden;
        return;
    };

    let label = countdown_label(&session.hud());
    if text.0 != label {
        text.0 = label;
    }
    *vis = Visibility::Visible;
}
