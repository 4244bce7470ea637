use bevy::prelude::{EventWriter, Input, KeyCode, Query, Res, With};
use mb_common::{components::player::Player, events::LevelCommand};
use mb_movement::prelude::{CharacterController, Intent};

const LEFT: [KeyCode; 2] = [KeyCode::A, KeyCode::Left];
const RIGHT: [KeyCode; 2] = [KeyCode::D, KeyCode::Right];
const UP: [KeyCode; 2] = [KeyCode::W, KeyCode::Up];
const DOWN: [KeyCode; 2] = [KeyCode::S, KeyCode::Down];

const CROUCH: KeyCode = KeyCode::ControlLeft;
const JUMP: KeyCode = KeyCode::Space;
const PUSH: KeyCode = KeyCode::J;
const PULL: KeyCode = KeyCode::K;
const CONFIRM: KeyCode = KeyCode::Return;
const RESPAWN: KeyCode = KeyCode::R;

fn axis(keyboard_input: &Input<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard_input.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard_input.any_pressed(positive) {
        value += 1.0;
    }
    value
}

pub fn intent_from_keyboard(keyboard_input: &Input<KeyCode>) -> Intent {
    Intent {
        horizontal: axis(keyboard_input, LEFT, RIGHT),
        vertical: axis(keyboard_input, DOWN, UP),
        crouch: keyboard_input.pressed(CROUCH),
        jump_edge: keyboard_input.just_pressed(JUMP),
        jump_held: keyboard_input.pressed(JUMP),
        push_edge: keyboard_input.just_pressed(PUSH),
        push_held: keyboard_input.pressed(PUSH),
        pull_held: keyboard_input.pressed(PULL),
        confirm_edge: keyboard_input.just_pressed(CONFIRM),
        respawn_edge: keyboard_input.just_pressed(RESPAWN),
    }
}

pub fn latch_player_input(
    keyboard_input: Res<Input<KeyCode>>,
    mut q_player: Query<&mut CharacterController, With<Player>>,
    mut level_commands: EventWriter<LevelCommand>,
) {
    let intent = intent_from_keyboard(&keyboard_input);

    for mut controller in q_player.iter_mut() {
        controller.on_frame_tick(intent, &mut level_commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel_out() {
        let mut keyboard_input = Input::<KeyCode>::default();
        keyboard_input.press(KeyCode::A);
        keyboard_input.press(KeyCode::Right);

        assert_eq!(intent_from_keyboard(&keyboard_input).horizontal, 0.0);
    }

    #[test]
    fn fresh_presses_are_edges() {
        let mut keyboard_input = Input::<KeyCode>::default();
        keyboard_input.press(KeyCode::Space);
        keyboard_input.press(KeyCode::J);
        keyboard_input.press(KeyCode::W);

        let intent = intent_from_keyboard(&keyboard_input);
        assert!(intent.jump_edge && intent.jump_held);
        assert!(intent.push_edge && intent.push_held);
        assert_eq!(intent.vertical, 1.0);

        keyboard_input.clear();
        let intent = intent_from_keyboard(&keyboard_input);
        assert!(!intent.jump_edge && intent.jump_held);
        assert!(!intent.push_edge && intent.push_held);
    }
}
