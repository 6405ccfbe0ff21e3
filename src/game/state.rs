//! # Game State Module
//!
//! The round/game state machine.
//!
//! [`GameState`] is the single container for everything that changes while the
//! game runs: the current target, the selected operation, the mascot mood, the
//! score and round counters, and the post-answer wait. It is mutated only through
//! the operations below, each of which returns the [`GameEvent`]s it produced.

use crate::config::{ANSWER_DELAY_SECS, TOTAL_ROUNDS};
use crate::{
    draw_target, is_candidate_target, AnswerCheck, GameCommand, GameEvent, MakeTenError,
    MakeTenResult, MascotMood, Operation,
};
use rand::{rngs::StdRng, SeedableRng};

/// Phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Waiting for the player to pick a tile
    Playing,
    /// An answer was given; the mascot reacts until the timer runs out
    AwaitingNextRound { remaining_seconds: f32 },
    /// All rounds played; any key or click restarts
    GameOver,
}

/// Central game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    target_number: i32,
    operation: Operation,
    mascot_mood: MascotMood,
    score: u32,
    rounds_played: u32,
    total_rounds: u32,
    phase: RoundPhase,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game with a seeded random target sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::{is_candidate_target, GameState, RoundPhase};
    ///
    /// let state = GameState::new(12345);
    /// assert_eq!(state.phase(), RoundPhase::Playing);
    /// assert_eq!(state.score(), 0);
    /// assert!(is_candidate_target(state.target_number()));
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a new game whose first round shows `target`.
    ///
    /// Later rounds are drawn from the seeded generator as usual.
    ///
    /// # Errors
    ///
    /// Returns [`MakeTenError::InvalidTarget`] if `target` is not a candidate.
    pub fn with_target(target: i32, seed: u64) -> MakeTenResult<Self> {
        if !is_candidate_target(target) {
            return Err(MakeTenError::InvalidTarget(target));
        }
        let mut state = Self::new(seed);
        state.target_number = target;
        Ok(state)
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let target_number = draw_target(&mut rng);
        Self {
            target_number,
            operation: Operation::default(),
            mascot_mood: MascotMood::default(),
            score: 0,
            rounds_played: 0,
            total_rounds: TOTAL_ROUNDS,
            phase: RoundPhase::Playing,
            rng,
        }
    }

    /// The number shown in the current prompt.
    pub fn target_number(&self) -> i32 {
        self.target_number
    }

    /// The currently selected operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn mascot_mood(&self) -> MascotMood {
        self.mascot_mood
    }

    /// Number of correct answers in this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of answered rounds in this game.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// False once the game is over.
    pub fn is_game_active(&self) -> bool {
        self.phase != RoundPhase::GameOver
    }

    pub fn is_awaiting_next_round(&self) -> bool {
        matches!(self.phase, RoundPhase::AwaitingNextRound { .. })
    }

    /// Seconds left before the next round, or 0 when not waiting.
    pub fn remaining_wait_seconds(&self) -> f32 {
        match self.phase {
            RoundPhase::AwaitingNextRound { remaining_seconds } => remaining_seconds,
            _ => 0.0,
        }
    }

    /// Applies a command from the input handler.
    pub fn apply(&mut self, command: GameCommand) -> Vec<GameEvent> {
        match command {
            GameCommand::SelectTile(value) => self.select_tile(value),
            GameCommand::SetOperation(operation) => self.set_operation(operation),
            GameCommand::Restart => self.restart(),
        }
    }

    /// Answers the current round with the tile `value`.
    ///
    /// Ignored unless the phase is [`RoundPhase::Playing`].
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::{GameState, MascotMood};
    ///
    /// let mut state = GameState::with_target(7, 1).unwrap();
    /// state.select_tile(3);
    /// assert_eq!(state.mascot_mood(), MascotMood::Happy);
    /// assert_eq!(state.score(), 1);
    /// assert!(state.is_awaiting_next_round());
    /// ```
    pub fn select_tile(&mut self, value: u8) -> Vec<GameEvent> {
        if self.phase != RoundPhase::Playing {
            return Vec::new();
        }

        let check = AnswerCheck::evaluate(self.target_number, self.operation, value);
        self.mascot_mood = check.mood();
        if check.correct {
            self.score += 1;
        }
        self.rounds_played += 1;
        self.phase = RoundPhase::AwaitingNextRound {
            remaining_seconds: ANSWER_DELAY_SECS,
        };

        vec![GameEvent::AnswerChecked(check)]
    }

    /// Selects the operation for the current round.
    ///
    /// Ignored unless the phase is [`RoundPhase::Playing`]. Selecting the
    /// operation that is already active produces no event.
    pub fn set_operation(&mut self, operation: Operation) -> Vec<GameEvent> {
        if self.phase != RoundPhase::Playing || self.operation == operation {
            return Vec::new();
        }
        self.operation = operation;
        vec![GameEvent::OperationChanged { operation }]
    }

    /// Starts a fresh game after the last one ended.
    ///
    /// Only honoured in [`RoundPhase::GameOver`]; the final wait before game
    /// over does not accept a restart.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        if self.phase != RoundPhase::GameOver {
            return Vec::new();
        }
        self.score = 0;
        self.rounds_played = 0;

        let mut events = vec![GameEvent::GameRestarted];
        events.push(self.start_round());
        events
    }

    /// Advances the post-answer timer by `elapsed_seconds`.
    ///
    /// When the wait runs out the next round starts, or the game ends once all
    /// rounds are played. Non-positive deltas are ignored.
    pub fn tick(&mut self, elapsed_seconds: f32) -> Vec<GameEvent> {
        let remaining_seconds = match self.phase {
            RoundPhase::AwaitingNextRound { remaining_seconds } => remaining_seconds,
            _ => return Vec::new(),
        };
        if !(elapsed_seconds > 0.0) {
            return Vec::new();
        }

        let remaining_seconds = remaining_seconds - elapsed_seconds;
        if remaining_seconds > 0.0 {
            self.phase = RoundPhase::AwaitingNextRound { remaining_seconds };
            return Vec::new();
        }

        if self.rounds_played < self.total_rounds {
            vec![self.start_round()]
        } else {
            self.phase = RoundPhase::GameOver;
            vec![GameEvent::GameOver {
                score: self.score,
                total_rounds: self.total_rounds,
            }]
        }
    }

    /// Draws a new target and resets the mascot for the next round.
    fn start_round(&mut self) -> GameEvent {
        self.target_number = draw_target(&mut self.rng);
        self.mascot_mood = MascotMood::Neutral;
        self.phase = RoundPhase::Playing;
        GameEvent::RoundStarted {
            round: self.rounds_played + 1,
            target: self.target_number,
        }
    }

    /// Checks the state machine invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MakeTenError::InvalidState`] describing the first violation.
    pub fn validate(&self) -> MakeTenResult<()> {
        if self.score > self.rounds_played {
            return Err(MakeTenError::InvalidState(format!(
                "score {} exceeds rounds played {}",
                self.score, self.rounds_played
            )));
        }
        if self.rounds_played > self.total_rounds {
            return Err(MakeTenError::InvalidState(format!(
                "rounds played {} exceeds total rounds {}",
                self.rounds_played, self.total_rounds
            )));
        }
        if !is_candidate_target(self.target_number) {
            return Err(MakeTenError::InvalidTarget(self.target_number));
        }
        match self.phase {
            RoundPhase::AwaitingNextRound { remaining_seconds } if remaining_seconds <= 0.0 => {
                Err(MakeTenError::InvalidState(
                    "awaiting next round with an expired timer".to_string(),
                ))
            }
            RoundPhase::GameOver if self.rounds_played != self.total_rounds => {
                Err(MakeTenError::InvalidState(format!(
                    "game over after {} of {} rounds",
                    self.rounds_played, self.total_rounds
                )))
            }
            RoundPhase::Playing if self.mascot_mood != MascotMood::Neutral => {
                Err(MakeTenError::InvalidState(
                    "mascot still reacting during play".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_entropy()
    }
}
