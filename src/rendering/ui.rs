//! # User Interface Elements
//!
//! Text layout for the play screen and the end screen. Layout is computed from
//! the game state alone so it can be checked without a window.

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::{GameState, RoundPhase};
use macroquad::prelude::{vec2, Color, Vec2, WHITE, YELLOW};

/// Font size of regular HUD text
pub const TEXT_SIZE: f32 = 36.0;

/// Font size of end screen headlines
pub const LARGE_TEXT_SIZE: f32 = 72.0;

/// Colour of hint lines
pub const HINT_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 1.0, 1.0);

/// One line of text to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Top-left corner of the line
    pub position: Vec2,
    pub color: Color,
    pub font_size: f32,
}

impl TextLine {
    fn new(text: String, x: f32, y: f32, color: Color, font_size: f32) -> Self {
        Self {
            text,
            position: vec2(x, y),
            color,
            font_size,
        }
    }
}

/// Round number shown to the player, never beyond the last round.
pub fn displayed_round(state: &GameState) -> u32 {
    (state.rounds_played() + 1).min(state.total_rounds())
}

/// Prompt, counters and hint for the play screen.
///
/// # Examples
///
/// ```
/// use make_ten::{play_screen_lines, GameState};
///
/// let state = GameState::with_target(7, 1).unwrap();
/// let lines = play_screen_lines(&state);
/// assert_eq!(lines[0].text, "Make 10: 7 + ?");
/// assert_eq!(lines[1].text, "Score: 0/0");
/// assert_eq!(lines[2].text, "Round: 1/10");
/// ```
pub fn play_screen_lines(state: &GameState) -> Vec<TextLine> {
    vec![
        TextLine::new(
            format!(
                "Make 10: {} {} ?",
                state.target_number(),
                state.operation()
            ),
            50.0,
            50.0,
            WHITE,
            TEXT_SIZE,
        ),
        TextLine::new(
            format!("Score: {}/{}", state.score(), state.rounds_played()),
            50.0,
            100.0,
            WHITE,
            TEXT_SIZE,
        ),
        TextLine::new(
            format!("Round: {}/{}", displayed_round(state), state.total_rounds()),
            50.0,
            150.0,
            WHITE,
            TEXT_SIZE,
        ),
        TextLine::new(
            "Press + or - to change symbol".to_string(),
            50.0,
            220.0,
            HINT_COLOR,
            TEXT_SIZE,
        ),
    ]
}

/// Final score and restart prompt for the end screen.
pub fn game_over_lines(state: &GameState) -> Vec<TextLine> {
    let center_x = WINDOW_WIDTH as f32 / 2.0;
    let center_y = WINDOW_HEIGHT as f32 / 2.0;
    vec![
        TextLine::new(
            "Game Over!".to_string(),
            center_x - 150.0,
            center_y - 100.0,
            YELLOW,
            LARGE_TEXT_SIZE,
        ),
        TextLine::new(
            format!("Final Score: {}/{}", state.score(), state.total_rounds()),
            center_x - 150.0,
            center_y,
            WHITE,
            LARGE_TEXT_SIZE,
        ),
        TextLine::new(
            "Click or press any key to play again".to_string(),
            center_x - 250.0,
            center_y + 100.0,
            HINT_COLOR,
            TEXT_SIZE,
        ),
    ]
}

/// Text for whichever screen the state calls for.
pub fn screen_lines(state: &GameState) -> Vec<TextLine> {
    match state.phase() {
        RoundPhase::GameOver => game_over_lines(state),
        _ => play_screen_lines(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ANSWER_DELAY_SECS, TOTAL_ROUNDS};
    use crate::Operation;

    #[test]
    fn test_prompt_shows_operation() {
        let mut state = GameState::with_target(17, 2).unwrap();
        state.set_operation(Operation::Subtract);
        assert_eq!(play_screen_lines(&state)[0].text, "Make 10: 17 - ?");
    }

    #[test]
    fn test_counters_after_answer() {
        let mut state = GameState::with_target(7, 2).unwrap();
        state.select_tile(3);
        let lines = play_screen_lines(&state);
        assert_eq!(lines[1].text, "Score: 1/1");
        assert_eq!(lines[2].text, "Round: 2/10");
    }

    #[test]
    fn test_round_counter_clamps_during_final_wait() {
        let mut state = GameState::new(2);
        for _ in 0..TOTAL_ROUNDS - 1 {
            state.select_tile(1);
            state.tick(ANSWER_DELAY_SECS);
        }
        state.select_tile(1);
        assert!(state.is_awaiting_next_round());
        assert_eq!(displayed_round(&state), 10);
        assert_eq!(play_screen_lines(&state)[2].text, "Round: 10/10");
    }

    #[test]
    fn test_game_over_screen_shows_final_score() {
        let mut state = GameState::with_target(7, 2).unwrap();
        state.select_tile(3);
        state.tick(ANSWER_DELAY_SECS);
        for _ in 1..TOTAL_ROUNDS {
            // Value 0 never makes 10 from a candidate target.
            state.select_tile(0);
            state.tick(ANSWER_DELAY_SECS);
        }

        let lines = screen_lines(&state);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Game Over!");
        assert_eq!(lines[1].text, "Final Score: 1/10");
        assert_eq!(lines[0].position, vec2(250.0, 200.0));
    }
}
