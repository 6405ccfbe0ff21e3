//! # Command Definitions
//!
//! Raw input events and the game commands they translate into.

use crate::{GameState, Operation, RoundPhase, TileBoard};
use macroquad::prelude::{KeyCode, Vec2};

/// A raw input event as delivered by the platform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// A key went down
    KeyDown(KeyCode),
    /// The primary pointer button went down at a screen position
    PointerDown(Vec2),
}

/// Commands understood by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Answer the round with the tile of this value
    SelectTile(u8),
    /// Choose the operation for the round
    SetOperation(Operation),
    /// Start a new game after game over
    Restart,
}

/// Maps a key to the operation it selects, if any.
///
/// `+` shares its key with `=`, so both the equals key and the keypad plus
/// select addition.
pub fn operation_for_key(key: KeyCode) -> Option<Operation> {
    match key {
        KeyCode::Equal | KeyCode::KpAdd => Some(Operation::Add),
        KeyCode::Minus | KeyCode::KpSubtract => Some(Operation::Subtract),
        _ => None,
    }
}

/// Translates one raw event into a command for the current phase.
///
/// While playing, clicks pick the first tile under the pointer and the
/// operation keys switch the operation. After game over any key or click
/// restarts. During the post-answer wait everything is ignored.
///
/// # Examples
///
/// ```
/// use make_ten::{translate, GameCommand, GameState, RawInput, TileBoard};
/// use macroquad::prelude::{vec2, KeyCode};
///
/// let board = TileBoard::standard();
/// let state = GameState::new(1);
///
/// let click = RawInput::PointerDown(vec2(140.0, 340.0));
/// assert_eq!(translate(click, &state, &board), Some(GameCommand::SelectTile(1)));
///
/// let other_key = RawInput::KeyDown(KeyCode::Q);
/// assert_eq!(translate(other_key, &state, &board), None);
/// ```
pub fn translate(input: RawInput, state: &GameState, board: &TileBoard) -> Option<GameCommand> {
    match state.phase() {
        RoundPhase::Playing => match input {
            RawInput::PointerDown(point) => board
                .tile_at(point)
                .map(|tile| GameCommand::SelectTile(tile.value)),
            RawInput::KeyDown(key) => operation_for_key(key).map(GameCommand::SetOperation),
        },
        RoundPhase::AwaitingNextRound { .. } => None,
        RoundPhase::GameOver => Some(GameCommand::Restart),
    }
}
