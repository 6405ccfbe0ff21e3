//! # Assets Module
//!
//! Image loading for tiles, mascot and background.
//!
//! Loading goes through the [`ImageSource`] capability, which never fails: any
//! missing or undecodable file is replaced by a generated placeholder of the
//! same size, so layout and the rest of the game never see a load error.

pub mod placeholder;

pub use placeholder::*;

use crate::config::{
    BACKGROUND_IMAGE, MASCOT_HAPPY_IMAGE, MASCOT_SAD_IMAGE, MASCOT_SIZE, TILE_SIZE, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::{MakeTenError, MakeTenResult, Tile, TileBoard};
use log::{debug, warn};
use macroquad::prelude::{vec2, Image, Vec2};
use std::path::PathBuf;

/// What an image is used for; decides the placeholder look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Background,
    Tile { value: u8 },
    MascotHappy,
    MascotSad,
}

/// A request for one image at a fixed on-screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    /// File name inside the asset directory
    pub name: String,
    /// Size the image is drawn at
    pub size: Vec2,
    pub kind: AssetKind,
}

impl ImageRequest {
    /// Full-window background.
    pub fn background() -> Self {
        Self {
            name: BACKGROUND_IMAGE.to_string(),
            size: vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            kind: AssetKind::Background,
        }
    }

    /// Image for a board tile.
    pub fn tile(tile: &Tile) -> Self {
        Self {
            name: tile.asset_name.clone(),
            size: vec2(TILE_SIZE, TILE_SIZE),
            kind: AssetKind::Tile { value: tile.value },
        }
    }

    pub fn mascot_happy() -> Self {
        Self {
            name: MASCOT_HAPPY_IMAGE.to_string(),
            size: vec2(MASCOT_SIZE, MASCOT_SIZE),
            kind: AssetKind::MascotHappy,
        }
    }

    pub fn mascot_sad() -> Self {
        Self {
            name: MASCOT_SAD_IMAGE.to_string(),
            size: vec2(MASCOT_SIZE, MASCOT_SIZE),
            kind: AssetKind::MascotSad,
        }
    }
}

/// A CPU-side image ready to be uploaded as a texture.
#[derive(Clone)]
pub struct LoadedImage {
    pub image: Image,
    /// Size the image is drawn at, regardless of its pixel size
    pub size: Vec2,
    /// Text drawn over a placeholder, such as a tile's digit
    pub placeholder_label: Option<String>,
    is_placeholder: bool,
}

impl LoadedImage {
    /// Wraps an image decoded from disk.
    pub fn decoded(image: Image, size: Vec2) -> Self {
        Self {
            image,
            size,
            placeholder_label: None,
            is_placeholder: false,
        }
    }

    pub(crate) fn placeholder(image: Image, size: Vec2, label: Option<String>) -> Self {
        Self {
            image,
            size,
            placeholder_label: label,
            is_placeholder: true,
        }
    }

    /// True if this image was generated instead of loaded.
    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.image.width)
            .field("height", &self.image.height)
            .field("size", &self.size)
            .field("placeholder_label", &self.placeholder_label)
            .field("is_placeholder", &self.is_placeholder)
            .finish()
    }
}

/// Capability for obtaining images. Never fails.
pub trait ImageSource {
    /// Returns the requested image, or a placeholder of the requested size.
    fn load(&self, request: &ImageRequest) -> LoadedImage;
}

/// Loads images from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryImageSource {
    root: PathBuf,
}

impl DirectoryImageSource {
    /// Creates a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads and decodes `name` from the asset directory.
    ///
    /// # Errors
    ///
    /// [`MakeTenError::Io`] if the file cannot be read, and
    /// [`MakeTenError::AssetLoad`] if its contents cannot be decoded.
    pub fn try_load(&self, name: &str) -> MakeTenResult<Image> {
        let bytes = std::fs::read(self.root.join(name))?;
        Image::from_file_with_format(&bytes, None).map_err(|e| MakeTenError::AssetLoad {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl ImageSource for DirectoryImageSource {
    fn load(&self, request: &ImageRequest) -> LoadedImage {
        match self.try_load(&request.name) {
            Ok(image) => {
                debug!(
                    "Loaded {} ({}x{})",
                    request.name, image.width, image.height
                );
                LoadedImage::decoded(image, request.size)
            }
            Err(e) => {
                warn!("Using placeholder for {}: {}", request.name, e);
                generate_placeholder(request)
            }
        }
    }
}

/// Source that never touches the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImageSource;

impl ImageSource for PlaceholderImageSource {
    fn load(&self, request: &ImageRequest) -> LoadedImage {
        generate_placeholder(request)
    }
}

/// Every image the game draws.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub background: LoadedImage,
    pub mascot_happy: LoadedImage,
    pub mascot_sad: LoadedImage,
    /// Tile images in board order
    pub tiles: Vec<LoadedImage>,
}

impl GameAssets {
    /// Loads every image the board and screen need.
    pub fn load(source: &dyn ImageSource, board: &TileBoard) -> Self {
        Self {
            background: source.load(&ImageRequest::background()),
            mascot_happy: source.load(&ImageRequest::mascot_happy()),
            mascot_sad: source.load(&ImageRequest::mascot_sad()),
            tiles: board
                .tiles()
                .iter()
                .map(|tile| source.load(&ImageRequest::tile(tile)))
                .collect(),
        }
    }

    /// Number of images that fell back to placeholders.
    pub fn placeholder_count(&self) -> usize {
        [&self.background, &self.mascot_happy, &self.mascot_sad]
            .into_iter()
            .chain(self.tiles.iter())
            .filter(|image| image.is_placeholder())
            .count()
    }
}
