//! # Placeholder Images
//!
//! Solid-colour stand-ins for images that could not be loaded.

use crate::config::{BACKGROUND_RGB, MASCOT_HAPPY_RGB, MASCOT_SAD_RGB, TILE_RGB};
use crate::{AssetKind, ImageRequest, LoadedImage};
use macroquad::prelude::{Color, Image};

/// Fill colour used for a placeholder of the given kind.
pub fn placeholder_color(kind: AssetKind) -> Color {
    let (r, g, b) = match kind {
        AssetKind::Background => BACKGROUND_RGB,
        AssetKind::Tile { .. } => TILE_RGB,
        AssetKind::MascotHappy => MASCOT_HAPPY_RGB,
        AssetKind::MascotSad => MASCOT_SAD_RGB,
    };
    Color::from_rgba(r, g, b, 255)
}

/// Builds a placeholder with the requested size and a digit label for tiles.
///
/// # Examples
///
/// ```
/// use make_ten::{generate_placeholder, ImageRequest};
///
/// let placeholder = generate_placeholder(&ImageRequest::background());
/// assert!(placeholder.is_placeholder());
/// assert_eq!(placeholder.image.width, 800);
/// assert_eq!(placeholder.image.height, 600);
/// ```
pub fn generate_placeholder(request: &ImageRequest) -> LoadedImage {
    let image = Image::gen_image_color(
        request.size.x.round() as u16,
        request.size.y.round() as u16,
        placeholder_color(request.kind),
    );
    let label = match request.kind {
        AssetKind::Tile { value } => Some(value.to_string()),
        _ => None,
    };
    LoadedImage::placeholder(image, request.size, label)
}
