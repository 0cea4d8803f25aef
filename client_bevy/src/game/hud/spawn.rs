use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::types::{
    HudChallengeText, HudCountdownText, HudStatsText, CHALLENGE_TOP, COUNTDOWN_FONT_SIZE,
    HUD_FONT_SIZE, HUD_LEFT, HUD_TOP,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    let font = TextFont::from_font_size(HUD_FONT_SIZE);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_LEFT),
            top: Val::Px(HUD_TOP),
            ..default()
        },
        Text::new(""),
        font.clone(),
        TextColor(color_from_hex(Colors::TEXT)),
        Visibility::Hidden,
        HudStatsText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_LEFT),
            top: Val::Px(CHALLENGE_TOP),
            ..default()
        },
        Text::new("CHALLENGE MODE"),
        font,
        TextColor(color_from_hex(Colors::CHALLENGE)),
        Visibility::Hidden,
        HudChallengeText,
    ));

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont::from_font_size(COUNTDOWN_FONT_SIZE),
                TextColor(color_from_hex(Colors::TEXT)),
                Visibility::Hidden,
                HudCountdownText,
            ));
        });
}
