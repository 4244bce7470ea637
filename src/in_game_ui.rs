use bevy::{prelude::{default, BuildChildren, Color, Commands, EventReader, NodeBundle, Query, TextBundle, Visibility, With}, text::TextStyle, ui::{AlignItems, FlexDirection, JustifyContent, Style, Val}};
use mb_common::components::{level::Despawnable, ui::WinMessageUi};
use mb_movement::prelude::ControllerEvent;

pub fn spawn_win_message(commands: &mut Commands) {
    let container = NodeBundle {
        style: Style {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        visibility: Visibility::Hidden,
        ..default()
    };

    commands
        .spawn((container, WinMessageUi {}, Despawnable {}))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "You made it!",
                TextStyle {
                    font_size: 40.0,
                    color: Color::WHITE,
                    ..default()
                },
            ));
            parent.spawn(TextBundle::from_section(
                "Press Enter to play again",
                TextStyle {
                    font_size: 20.0,
                    color: Color::rgb(0.8, 0.8, 0.8),
                    ..default()
                },
            ));
        });
}

pub fn show_win_message(
    mut ev_controller: EventReader<ControllerEvent>,
    mut q_win_message: Query<&mut Visibility, With<WinMessageUi>>,
) {
    if ev_controller.iter().filter(|event| **event == ControllerEvent::Won).count() == 0 {
        return;
    }

    for mut visibility in q_win_message.iter_mut() {
        *visibility = Visibility::Visible;
    }
}
