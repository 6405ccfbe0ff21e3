//! # Make Ten
//!
//! A single-screen arithmetic learning game. The player is shown a target number
//! and picks the tile that, added to or subtracted from the target, makes 10.
//!
//! ## Architecture Overview
//!
//! The game is one interactive loop driving a small state machine:
//!
//! - **Game State**: the round/game state machine, the only stateful logic
//! - **Tiles**: the fixed board of clickable number tiles
//! - **Input**: translation of raw pointer and key events into game commands
//! - **Assets**: image loading with placeholder fallback behind [`ImageSource`]
//! - **Rendering**: HUD layout and macroquad drawing, a pure view of the state
//! - **Scenes**: the frame loop tying everything together
//!
//! Everything except [`MacroquadDisplay`] and [`SceneManager`] runs without a
//! window, so the state machine and input translation are unit-testable.

pub mod assets;
pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use assets::*;
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use utils::*;

/// Core error type for the Make Ten game.
#[derive(thiserror::Error, Debug)]
pub enum MakeTenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An image could not be read or decoded
    #[error("Failed to load asset '{name}': {reason}")]
    AssetLoad { name: String, reason: String },

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Target number outside the candidate set
    #[error("Invalid target number: {0}")]
    InvalidTarget(i32),
}

/// Result type used throughout the Make Ten codebase.
pub type MakeTenResult<T> = Result<T, MakeTenError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Window width in pixels
    pub const WINDOW_WIDTH: i32 = 800;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Window title
    pub const WINDOW_TITLE: &str = "Make 10 Game - Ocean Quest";

    /// Default asset directory, relative to the working directory
    pub const DEFAULT_ASSETS_DIR: &str = "assets";

    /// Background image file name
    pub const BACKGROUND_IMAGE: &str = "game_bg.png";

    /// Happy mascot image file name
    pub const MASCOT_HAPPY_IMAGE: &str = "bubbly_happy.png";

    /// Sad mascot image file name
    pub const MASCOT_SAD_IMAGE: &str = "bubbly_sad.png";

    /// Number the player has to reach
    pub const TARGET_SUM: i32 = 10;

    /// Rounds per game
    pub const TOTAL_ROUNDS: u32 = 10;

    /// Pause after an answer before the next round, in seconds
    pub const ANSWER_DELAY_SECS: f32 = 1.0;

    /// Frames per second target for the game loop
    pub const TARGET_FPS: u32 = 60;

    /// Number of tiles on the board
    pub const TILE_COUNT: usize = 10;

    /// Tiles per board row
    pub const TILES_PER_ROW: usize = 5;

    /// Tile edge length in pixels
    pub const TILE_SIZE: f32 = 80.0;

    /// Distance between tile origins in pixels
    pub const TILE_SPACING: f32 = 120.0;

    /// Top-left corner of the first tile
    pub const TILE_ORIGIN: (f32, f32) = (100.0, 300.0);

    /// Mascot top-left corner
    pub const MASCOT_POSITION: (f32, f32) = (650.0, 50.0);

    /// Mascot edge length in pixels
    pub const MASCOT_SIZE: f32 = 100.0;

    /// Placeholder colours as RGB
    pub const BACKGROUND_RGB: (u8, u8, u8) = (0, 0, 100);
    pub const TILE_RGB: (u8, u8, u8) = (100, 200, 100);
    pub const MASCOT_HAPPY_RGB: (u8, u8, u8) = (255, 255, 0);
    pub const MASCOT_SAD_RGB: (u8, u8, u8) = (255, 0, 0);
}
