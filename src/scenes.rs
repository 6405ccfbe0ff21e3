//! # Scene Management System
//!
//! The frame loop: measure elapsed time, apply the frame's input, advance the
//! round timer, render, and cap the frame rate.

use crate::config::TARGET_FPS;
use crate::{
    FrameClock, FrameLimiter, GameAssets, GameEvent, GameState, InputHandler, MacroquadDisplay,
    MakeTenResult, RoundPhase, TileBoard,
};
use log::{debug, info};
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Rounds in progress, including the wait after an answer
    Playing,
    /// Final score screen
    GameOver,
}

impl SceneType {
    /// The scene shown for a state.
    pub fn for_state(game_state: &GameState) -> Self {
        match game_state.phase() {
            RoundPhase::GameOver => SceneType::GameOver,
            _ => SceneType::Playing,
        }
    }
}

/// The main scene manager that owns the game and drives the loop
pub struct SceneManager {
    game_state: GameState,
    board: TileBoard,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    clock: FrameClock,
    limiter: FrameLimiter,
}

impl SceneManager {
    /// Creates a scene manager; textures are uploaded here, so the window must exist.
    pub fn new(
        game_state: GameState,
        board: TileBoard,
        assets: &GameAssets,
        input_handler: InputHandler,
    ) -> Self {
        let display = MacroquadDisplay::new(assets, &board);
        Self {
            game_state,
            board,
            display,
            input_handler,
            clock: FrameClock::new(),
            limiter: FrameLimiter::new(TARGET_FPS),
        }
    }

    /// Runs the main loop until the window is closed
    pub async fn run(&mut self) -> MakeTenResult<()> {
        prevent_quit();
        info!(
            "Round 1: make 10 from {}",
            self.game_state.target_number()
        );

        loop {
            if self.update_frame()? {
                info!("Quit requested");
                break;
            }
            next_frame().await;
            self.limiter.wait();
        }
        Ok(())
    }

    /// Runs one frame, returns true if exit is requested
    fn update_frame(&mut self) -> MakeTenResult<bool> {
        if self.input_handler.quit_requested() {
            return Ok(true);
        }

        let elapsed = self.clock.tick();
        let inputs = self.input_handler.poll();
        let scene_before = SceneType::for_state(&self.game_state);

        let mut events =
            self.input_handler
                .process_frame(&inputs, &mut self.game_state, &self.board);
        events.extend(self.game_state.tick(elapsed));
        for event in &events {
            log_event(event);
        }

        #[cfg(debug_assertions)]
        self.game_state.validate()?;

        let scene_after = SceneType::for_state(&self.game_state);
        if scene_before != scene_after {
            debug!("Scene changed: {:?} -> {:?}", scene_before, scene_after);
        }

        self.display.render(&self.game_state);
        Ok(false)
    }
}

/// Writes a game event to the log.
pub fn log_event(event: &GameEvent) {
    match event {
        GameEvent::AnswerChecked(check) => debug!(
            "{} {} {} = {} ({})",
            check.target,
            check.operation,
            check.tile_value,
            check.result,
            if check.correct { "correct" } else { "wrong" }
        ),
        GameEvent::OperationChanged { operation } => {
            debug!("Operation set to {}", operation)
        }
        GameEvent::RoundStarted { round, target } => {
            info!("Round {}: make 10 from {}", round, target)
        }
        GameEvent::GameOver {
            score,
            total_rounds,
        } => info!("Game over: {}/{}", score, total_rounds),
        GameEvent::GameRestarted => info!("New game started"),
    }
}
