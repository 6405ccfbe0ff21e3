//! # Make Ten Main Entry Point
//!
//! Parses the command line, loads the images, and runs the frame loop.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use make_ten::config::{DEFAULT_ASSETS_DIR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use make_ten::{
    DirectoryImageSource, GameAssets, GameState, ImageSource, InputHandler, MakeTenResult,
    PlaceholderImageSource, SceneManager, TileBoard,
};
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for Make Ten.
#[derive(Parser, Debug)]
#[command(name = "make-ten")]
#[command(about = "Pick the tile that makes 10")]
#[command(version)]
struct Args {
    /// Random seed for the sequence of target numbers
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory containing the tile, mascot and background images
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: String,

    /// Skip loading images and draw placeholders only
    #[arg(long)]
    no_assets: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> MakeTenResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Make Ten v{}", make_ten::VERSION);

    let game_state = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            GameState::new(seed)
        }
        None => GameState::from_entropy(),
    };

    let board = TileBoard::standard();
    let source: Box<dyn ImageSource> = if args.no_assets {
        Box::new(PlaceholderImageSource)
    } else {
        Box::new(DirectoryImageSource::new(&args.assets))
    };
    let assets = GameAssets::load(source.as_ref(), &board);
    info!(
        "Loaded images from '{}' ({} placeholders)",
        args.assets,
        assets.placeholder_count()
    );

    let mut scene_manager = SceneManager::new(game_state, board, &assets, InputHandler::new());
    scene_manager.run().await?;

    info!("Game loop ended");
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}
