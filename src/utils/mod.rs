//! # Utilities Module
//!
//! Frame timing helpers for the game loop.

pub mod timing;

pub use timing::*;
