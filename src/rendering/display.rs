//! # Display Management
//!
//! Screen drawing with macroquad. The display only reads the game state.

use crate::config::{BACKGROUND_RGB, MASCOT_POSITION};
use crate::rendering::ui::{screen_lines, TextLine};
use crate::{GameAssets, GameState, LoadedImage, MascotMood, RoundPhase, TileBoard};
use macroquad::prelude::*;

/// A texture uploaded from a [`LoadedImage`].
struct Sprite {
    texture: Texture2D,
    size: Vec2,
    label: Option<String>,
}

impl Sprite {
    fn from_loaded(loaded: &LoadedImage) -> Self {
        Self {
            texture: Texture2D::from_image(&loaded.image),
            size: loaded.size,
            label: loaded.placeholder_label.clone(),
        }
    }

    /// Draws the sprite scaled to its target size, with its label centred.
    fn draw(&self, position: Vec2) {
        draw_texture_ex(
            &self.texture,
            position.x,
            position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                ..Default::default()
            },
        );

        if let Some(label) = &self.label {
            let font_size = 40.0;
            let dims = measure_text(label, None, font_size as u16, 1.0);
            draw_text(
                label,
                position.x + (self.size.x - dims.width) / 2.0,
                position.y + (self.size.y + dims.offset_y) / 2.0,
                font_size,
                BLACK,
            );
        }
    }
}

/// Macroquad display manager for the game.
///
/// Holds the textures for the background, mascot and tiles, and draws one
/// frame from a [`GameState`].
pub struct MacroquadDisplay {
    background: Sprite,
    mascot_happy: Sprite,
    mascot_sad: Sprite,
    /// Tile sprites paired with their top-left corner, in board order
    tiles: Vec<(Vec2, Sprite)>,
}

impl MacroquadDisplay {
    /// Uploads the loaded images as textures.
    ///
    /// Must be called after the macroquad window exists.
    pub fn new(assets: &GameAssets, board: &TileBoard) -> Self {
        let tiles = board
            .tiles()
            .iter()
            .zip(assets.tiles.iter())
            .map(|(tile, image)| {
                (
                    vec2(tile.region.x, tile.region.y),
                    Sprite::from_loaded(image),
                )
            })
            .collect();

        Self {
            background: Sprite::from_loaded(&assets.background),
            mascot_happy: Sprite::from_loaded(&assets.mascot_happy),
            mascot_sad: Sprite::from_loaded(&assets.mascot_sad),
            tiles,
        }
    }

    /// Renders the complete screen for the current state.
    pub fn render(&self, game_state: &GameState) {
        if game_state.phase() == RoundPhase::GameOver {
            self.render_game_over(game_state);
        } else {
            clear_background(BLACK);
            self.background.draw(Vec2::ZERO);
            self.render_play_screen(game_state);
        }
    }

    /// Prompt, counters, mascot and tiles.
    fn render_play_screen(&self, game_state: &GameState) {
        draw_text_lines(&screen_lines(game_state));

        let mascot = match game_state.mascot_mood() {
            MascotMood::Happy => Some(&self.mascot_happy),
            MascotMood::Sad => Some(&self.mascot_sad),
            MascotMood::Neutral => None,
        };
        if let Some(sprite) = mascot {
            sprite.draw(vec2(MASCOT_POSITION.0, MASCOT_POSITION.1));
        }

        for (position, sprite) in &self.tiles {
            sprite.draw(*position);
        }
    }

    /// End screen over a plain backdrop.
    fn render_game_over(&self, game_state: &GameState) {
        let (r, g, b) = BACKGROUND_RGB;
        clear_background(Color::from_rgba(r, g, b, 255));
        draw_text_lines(&screen_lines(game_state));
    }
}

/// Draws text lines whose positions are top-left corners.
fn draw_text_lines(lines: &[TextLine]) {
    for line in lines {
        let dims = measure_text(&line.text, None, line.font_size as u16, 1.0);
        draw_text(
            &line.text,
            line.position.x,
            line.position.y + dims.offset_y,
            line.font_size,
            line.color,
        );
    }
}
