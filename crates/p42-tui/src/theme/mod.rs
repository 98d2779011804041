//! Terminal theme for widget trees.
//!
//! This module provides:
//! - `palette` - Widget colors mapped onto terminal colors
//! - `styles` - Style builders for text, images and backgrounds
//! - `icons` - Glyphs for icon ids, Nerd Font or plain Unicode

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
