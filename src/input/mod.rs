//! # Input Module
//!
//! Input handling for pointer clicks and key presses.

pub mod commands;

pub use commands::*;

use crate::{GameEvent, GameState, TileBoard};
use macroquad::prelude::*;

/// Input handler for processing player interactions.
///
/// Collects the raw events macroquad delivered this frame and feeds them,
/// in order, through [`translate`] into the game state.
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// // Ready to poll once the window is open
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Gathers the raw events of the current frame.
    pub fn poll(&self) -> Vec<RawInput> {
        let pointer = is_mouse_button_pressed(MouseButton::Left).then(|| {
            let (x, y) = mouse_position();
            vec2(x, y)
        });
        frame_inputs(get_keys_pressed(), pointer)
    }

    /// Returns true once the window has been asked to close.
    pub fn quit_requested(&self) -> bool {
        is_quit_requested()
    }

    /// Applies every event of a frame before it is rendered.
    ///
    /// Each event is translated against the state left by the previous one, so
    /// a second click in the same frame as an answer is ignored.
    pub fn process_frame(
        &self,
        inputs: &[RawInput],
        game_state: &mut GameState,
        board: &TileBoard,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for input in inputs {
            if let Some(command) = translate(*input, game_state, board) {
                events.extend(game_state.apply(command));
            }
        }
        events
    }
}

/// Orders one frame's raw events.
///
/// macroquad reports the frame's keys as an unordered set, so keys are sorted
/// by key code. Keys always precede the pointer press: an operation switch
/// made in the same frame as a click applies to that click.
pub fn frame_inputs(
    keys: impl IntoIterator<Item = KeyCode>,
    pointer: Option<Vec2>,
) -> Vec<RawInput> {
    let mut keys: Vec<KeyCode> = keys.into_iter().collect();
    keys.sort_by_key(|key| *key as u32);

    let mut events: Vec<RawInput> = keys.into_iter().map(RawInput::KeyDown).collect();
    events.extend(pointer.map(RawInput::PointerDown));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MascotMood, Operation, RoundPhase};

    #[test]
    fn test_process_frame_toggles_then_answers() {
        let handler = InputHandler::new();
        let board = TileBoard::standard();
        let mut state = GameState::with_target(13, 4).unwrap();

        let inputs = [
            RawInput::KeyDown(KeyCode::Minus),
            RawInput::PointerDown(vec2(340.0, 340.0)),
        ];
        let events = handler.process_frame(&inputs, &mut state, &board);

        assert_eq!(events.len(), 2);
        assert_eq!(state.operation(), Operation::Subtract);
        assert_eq!(state.mascot_mood(), MascotMood::Happy);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_frame_inputs_put_sorted_keys_before_pointer() {
        let click = vec2(340.0, 340.0);
        let inputs = frame_inputs([KeyCode::Minus, KeyCode::Equal], Some(click));
        let reversed = frame_inputs([KeyCode::Equal, KeyCode::Minus], Some(click));

        assert_eq!(inputs, reversed);
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[2], RawInput::PointerDown(click));
        assert!(matches!(inputs[0], RawInput::KeyDown(_)));
        assert!(matches!(inputs[1], RawInput::KeyDown(_)));
    }

    #[test]
    fn test_frame_inputs_without_pointer() {
        assert_eq!(
            frame_inputs([KeyCode::Minus], None),
            vec![RawInput::KeyDown(KeyCode::Minus)]
        );
        assert!(frame_inputs(Vec::new(), None).is_empty());
    }

    #[test]
    fn test_operation_key_applies_to_click_in_same_frame() {
        let handler = InputHandler::new();
        let board = TileBoard::standard();
        let mut state = GameState::with_target(13, 4).unwrap();

        let inputs = frame_inputs([KeyCode::Minus], Some(vec2(340.0, 340.0)));
        handler.process_frame(&inputs, &mut state, &board);

        assert_eq!(state.operation(), Operation::Subtract);
        assert_eq!(state.mascot_mood(), MascotMood::Happy);
    }

    #[test]
    fn test_second_click_in_frame_is_ignored() {
        let handler = InputHandler::new();
        let board = TileBoard::standard();
        let mut state = GameState::with_target(7, 4).unwrap();

        let inputs = [
            RawInput::PointerDown(vec2(340.0, 340.0)),
            RawInput::PointerDown(vec2(140.0, 340.0)),
        ];
        handler.process_frame(&inputs, &mut state, &board);

        assert_eq!(state.rounds_played(), 1);
        assert!(matches!(
            state.phase(),
            RoundPhase::AwaitingNextRound { .. }
        ));
    }
}
