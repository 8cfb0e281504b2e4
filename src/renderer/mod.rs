//! Rendering seam
//!
//! The host engine owns the window, textures and fonts. Contexts only see
//! these traits and look assets up by symbolic type.

pub mod trace;

use glam::Vec2;
use thiserror::Error;

pub use trace::{DrawCommand, TraceCanvas};

/// Sprites the client draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GfxType {
    Background,
    Puck,
    PaddleCurrent,
    PaddleEnemy,
}

/// Fonts the client draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontType {
    Score,
    Menu,
    StatusBar,
    Banner,
}

/// Pixel size of a loaded sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub width: f32,
    pub height: f32,
}

impl SpriteInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Font state applied to a single text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// ARGB colour, see [`argb`]
    pub color: u32,
    pub scale: f32,
    /// Extra advance between glyphs, in unscaled pixels
    pub spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: argb(255, 255, 255, 255),
            scale: 1.0,
            spacing: 0.0,
        }
    }
}

/// Pack an ARGB colour
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Alpha channel of an ARGB colour
#[inline]
pub const fn alpha(color: u32) -> u8 {
    (color >> 24) as u8
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("sprite {0:?} is not loaded")]
    MissingSprite(GfxType),
    #[error("font {0:?} is not loaded")]
    MissingFont(FontType),
    #[error("sound {0:?} is not loaded")]
    MissingSound(crate::audio::SoundType),
}

/// Asset metadata lookup
pub trait Resources {
    fn sprite_info(&self, gfx: GfxType) -> Result<SpriteInfo, ResourceError>;
}

/// Per-frame drawing surface provided by the host engine
pub trait Canvas: Resources {
    fn begin_scene(&mut self);

    fn clear(&mut self, color: u32);

    fn end_scene(&mut self);

    /// Draw a sprite at its hotspot
    fn draw_sprite(&mut self, gfx: GfxType, pos: Vec2) -> Result<(), ResourceError>;

    /// Rendered width of `text` under `style`
    fn text_width(&self, font: FontType, text: &str, style: &TextStyle) -> Result<f32, ResourceError>;

    fn draw_text(
        &mut self,
        font: FontType,
        pos: Vec2,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), ResourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let c = argb(100, 255, 100, 100);
        assert_eq!(c, 0x64FF6464);
        assert_eq!(alpha(c), 100);
    }
}
