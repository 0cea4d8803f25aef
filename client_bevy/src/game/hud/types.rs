use aimtrainer_shared::session::{HudSnapshot, Score};
use bevy::prelude::*;

pub(super) const HUD_LEFT: f32 = 10.0;
pub(super) const HUD_TOP: f32 = 10.0;
pub(super) const CHALLENGE_TOP: f32 = 36.0;
pub(super) const HUD_FONT_SIZE: f32 = 20.0;
pub(super) const COUNTDOWN_FONT_SIZE: f32 = 96.0;

#[derive(Component)]
pub(super) struct HudStatsText;

#[derive(Component)]
pub(super) struct HudChallengeText;

#[derive(Component)]
pub(super) struct HudCountdownText;

/// The single status line shown while a session is active.
pub(super) fn stats_line(hud: &HudSnapshot) -> String {
    let time_secs = hud.time_remaining_ms / 1000;
    match hud.score {
        Score::Hits(hits) => format!(
            "Score:{hits} Streak:{} Time:{time_secs}s",
            hud.streak as u32
        ),
        Score::Seconds(on_target) => format!(
            "OnTarget:{on_target:.1}s Best:{:.1}s Time:{time_secs}s",
            hud.best_streak.unwrap_or(hud.streak)
        ),
    }
}

pub(super) fn countdown_label(hud: &HudSnapshot) -> String {
    hud.countdown_display_seconds.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimtrainer_shared::session::ModeKind;

    fn snapshot(kind: ModeKind, score: Score) -> HudSnapshot {
        HudSnapshot {
            kind,
            score,
            streak: 0.0,
            best_streak: None,
            time_remaining_ms: 0,
            countdown_remaining_ms: 0,
            countdown_display_seconds: 0,
            challenge_mode: false,
        }
    }

    #[test]
    fn gridshot_line() {
        let hud = HudSnapshot {
            streak: 4.0,
            time_remaining_ms: 42_999,
            ..snapshot(ModeKind::Gridshot, Score::Hits(17))
        };
        assert_eq!(stats_line(&hud), "Score:17 Streak:4 Time:42s");
    }

    #[test]
    fn tracking_line() {
        let hud = HudSnapshot {
            streak: 0.4,
            best_streak: Some(2.26),
            time_remaining_ms: 60_000,
            ..snapshot(ModeKind::Tracking, Score::Seconds(3.14))
        };
        assert_eq!(stats_line(&hud), "OnTarget:3.1s Best:2.3s Time:60s");
    }

    #[test]
    fn countdown_shows_rounded_seconds() {
        let hud = HudSnapshot {
            countdown_remaining_ms: 2_400,
            countdown_display_seconds: 2,
            ..snapshot(ModeKind::Gridshot, Score::Hits(0))
        };
        assert_eq!(countdown_label(&hud), "2");
    }
}
