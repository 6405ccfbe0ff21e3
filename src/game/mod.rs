//! # Game Module
//!
//! Core round logic for Make Ten.
//!
//! This module contains the building blocks of the game:
//! - The arithmetic rules (operations, candidate targets, answer checking)
//! - The round/game state machine
//! - The fixed board of number tiles

pub mod state;
pub mod tiles;

pub use state::*;
pub use tiles::*;

use crate::config::TARGET_SUM;
use rand::seq::SliceRandom;
use rand::Rng;

/// Target numbers a round can start with.
///
/// 10 itself is excluded so no round is solved before the player acts.
pub const CANDIDATE_TARGETS: [i32; 18] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 17, 18, 19,
];

/// Returns true if `target` may be shown as a round's number.
///
/// # Examples
///
/// ```
/// use make_ten::is_candidate_target;
///
/// assert!(is_candidate_target(7));
/// assert!(is_candidate_target(19));
/// assert!(!is_candidate_target(10));
/// assert!(!is_candidate_target(0));
/// ```
pub fn is_candidate_target(target: i32) -> bool {
    CANDIDATE_TARGETS.contains(&target)
}

/// Draws a target uniformly from [`CANDIDATE_TARGETS`].
pub fn draw_target<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    // The candidate array is non-empty, so choose always yields a value.
    *CANDIDATE_TARGETS.choose(rng).unwrap_or(&CANDIDATE_TARGETS[0])
}

/// Arithmetic operation combining the target with the chosen tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
}

impl Operation {
    /// Applies the operation as `target op value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::Operation;
    ///
    /// assert_eq!(Operation::Add.apply(7, 3), 10);
    /// assert_eq!(Operation::Subtract.apply(7, 3), 4);
    /// ```
    pub fn apply(self, target: i32, value: u8) -> i32 {
        match self {
            Operation::Add => target + i32::from(value),
            Operation::Subtract => target - i32::from(value),
        }
    }

    /// The symbol shown in the prompt.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Mascot reaction to the last answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MascotMood {
    #[default]
    Neutral,
    Happy,
    Sad,
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub target: i32,
    pub operation: Operation,
    pub tile_value: u8,
    pub result: i32,
    pub correct: bool,
}

impl AnswerCheck {
    /// Evaluates `target op tile_value` against [`TARGET_SUM`].
    ///
    /// Only an exact match counts; the result itself may be any integer.
    pub fn evaluate(target: i32, operation: Operation, tile_value: u8) -> Self {
        let result = operation.apply(target, tile_value);
        Self {
            target,
            operation,
            tile_value,
            result,
            correct: result == TARGET_SUM,
        }
    }

    /// Mood the mascot takes after this answer.
    pub fn mood(&self) -> MascotMood {
        if self.correct {
            MascotMood::Happy
        } else {
            MascotMood::Sad
        }
    }
}

/// Things that happened during a state transition.
///
/// Every state machine operation returns the events it produced; the driver
/// logs them and tests assert on them.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A tile was chosen and checked
    AnswerChecked(AnswerCheck),
    /// The operation selection changed
    OperationChanged { operation: Operation },
    /// A new round began
    RoundStarted { round: u32, target: i32 },
    /// All rounds have been played
    GameOver { score: u32, total_rounds: u32 },
    /// A finished game was reset
    GameRestarted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_candidate_set_excludes_ten() {
        assert_eq!(CANDIDATE_TARGETS.len(), 18);
        assert!(!CANDIDATE_TARGETS.contains(&10));
        assert!(CANDIDATE_TARGETS.iter().all(|t| (1..=19).contains(t)));
    }

    #[test]
    fn test_draw_target_stays_in_candidate_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(is_candidate_target(draw_target(&mut rng)));
        }
    }

    #[test]
    fn test_draw_target_reaches_both_halves() {
        let mut rng = StdRng::seed_from_u64(7);
        let drawn: Vec<i32> = (0..200).map(|_| draw_target(&mut rng)).collect();
        assert!(drawn.iter().any(|t| *t < 10));
        assert!(drawn.iter().any(|t| *t > 10));
    }

    #[test]
    fn test_operation_apply_allows_any_integer() {
        assert_eq!(Operation::Subtract.apply(1, 9), -8);
        assert_eq!(Operation::Add.apply(19, 9), 28);
        assert_eq!(Operation::Add.apply(5, 0), 5);
    }

    #[test]
    fn test_answer_check_success_iff_ten() {
        for &target in CANDIDATE_TARGETS.iter() {
            for value in 0..=9u8 {
                let add = AnswerCheck::evaluate(target, Operation::Add, value);
                assert_eq!(add.correct, target + i32::from(value) == 10);

                let sub = AnswerCheck::evaluate(target, Operation::Subtract, value);
                assert_eq!(sub.correct, target - i32::from(value) == 10);
            }
        }
    }

    #[test]
    fn test_answer_check_mood() {
        assert_eq!(
            AnswerCheck::evaluate(7, Operation::Add, 3).mood(),
            MascotMood::Happy
        );
        assert_eq!(
            AnswerCheck::evaluate(7, Operation::Subtract, 3).mood(),
            MascotMood::Sad
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Add.to_string(), "+");
        assert_eq!(Operation::Subtract.to_string(), "-");
        assert_eq!(Operation::default(), Operation::Add);
    }
}
