//! # Rendering Module
//!
//! Screen layout and 2D drawing with macroquad.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
