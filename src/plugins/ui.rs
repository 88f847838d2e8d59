use bevy::prelude::*;

use crate::plugins::{FlightPhase, ResetRequestEvent};

const PANEL_COLOR: Color = Color::WHITE;
const MESSAGE_COLOR: Color = Color::srgb(0.8, 0.1, 0.1);
const BUTTON_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);

#[derive(Component)]
struct CrashOverlay;

#[derive(Component)]
struct PlayAgainButton;

/// Crash overlay: a centered panel with a message and a "Play Again"
/// button, present only while the game is in the `Crashed` phase.
pub struct OverlayPlugin;

fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            CrashOverlay,
            Name::new("crash overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(16.0),
                        padding: UiRect::all(Val::Px(32.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderRadius::all(Val::Px(12.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Crash detected!"),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(MESSAGE_COLOR),
                    ));
                    panel
                        .spawn((
                            PlayAgainButton,
                            Button,
                            Node {
                                padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                                ..default()
                            },
                            BackgroundColor(BUTTON_COLOR),
                            BorderRadius::all(Val::Px(4.0)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("Play Again"),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::BLACK),
                            ));
                        });
                });
        });
}

fn despawn_overlay(mut commands: Commands, overlays: Query<Entity, With<CrashOverlay>>) {
    for overlay in overlays.iter() {
        commands.entity(overlay).despawn_recursive();
    }
}

fn play_again_button_system(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<PlayAgainButton>),
    >,
    mut reset_events: EventWriter<ResetRequestEvent>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                reset_events.send(ResetRequestEvent);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVER_COLOR),
            Interaction::None => *background = BackgroundColor(BUTTON_COLOR),
        }
    }
}

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(FlightPhase::Crashed), spawn_overlay)
            .add_systems(OnExit(FlightPhase::Crashed), despawn_overlay)
            .add_systems(
                Update,
                play_again_button_system.run_if(in_state(FlightPhase::Crashed)),
            );
    }
}
