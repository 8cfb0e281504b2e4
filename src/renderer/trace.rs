//! Headless canvas
//!
//! Records draw calls instead of rasterizing them. Used by the demo binary
//! and to check what a context put on screen.

use std::collections::HashMap;

use glam::Vec2;

use super::{Canvas, FontType, GfxType, ResourceError, Resources, SpriteInfo, TextStyle};

/// A draw call as issued by a context
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(u32),
    Sprite {
        gfx: GfxType,
        pos: Vec2,
    },
    Text {
        font: FontType,
        pos: Vec2,
        text: String,
        color: u32,
        scale: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TraceCanvas {
    sprites: HashMap<GfxType, SpriteInfo>,
    /// Unscaled advance per glyph for each monospace font
    fonts: HashMap<FontType, f32>,
    commands: Vec<DrawCommand>,
    in_scene: bool,
    frames: u64,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas with every sprite and font the client uses
    pub fn with_default_assets() -> Self {
        let mut canvas = Self::new();
        canvas.load_sprite(GfxType::Background, SpriteInfo::new(800.0, 600.0));
        canvas.load_sprite(GfxType::Puck, SpriteInfo::new(32.0, 32.0));
        canvas.load_sprite(GfxType::PaddleCurrent, SpriteInfo::new(64.0, 64.0));
        canvas.load_sprite(GfxType::PaddleEnemy, SpriteInfo::new(64.0, 64.0));
        canvas.load_font(FontType::Score, 16.0);
        canvas.load_font(FontType::Menu, 20.0);
        canvas.load_font(FontType::StatusBar, 10.0);
        canvas.load_font(FontType::Banner, 32.0);
        canvas
    }

    pub fn load_sprite(&mut self, gfx: GfxType, info: SpriteInfo) {
        self.sprites.insert(gfx, info);
    }

    pub fn unload_sprite(&mut self, gfx: GfxType) {
        self.sprites.remove(&gfx);
    }

    pub fn load_font(&mut self, font: FontType, glyph_width: f32) {
        self.fonts.insert(font, glyph_width);
    }

    /// Commands recorded since the last `begin_scene`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Completed scenes
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn glyph_width(&self, font: FontType) -> Result<f32, ResourceError> {
        self.fonts
            .get(&font)
            .copied()
            .ok_or(ResourceError::MissingFont(font))
    }
}

impl Resources for TraceCanvas {
    fn sprite_info(&self, gfx: GfxType) -> Result<SpriteInfo, ResourceError> {
        self.sprites
            .get(&gfx)
            .copied()
            .ok_or(ResourceError::MissingSprite(gfx))
    }
}

impl Canvas for TraceCanvas {
    fn begin_scene(&mut self) {
        if self.in_scene {
            log::warn!("begin_scene called twice without end_scene");
        }
        self.commands.clear();
        self.in_scene = true;
    }

    fn clear(&mut self, color: u32) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn end_scene(&mut self) {
        self.in_scene = false;
        self.frames += 1;
    }

    fn draw_sprite(&mut self, gfx: GfxType, pos: Vec2) -> Result<(), ResourceError> {
        self.sprite_info(gfx)?;
        self.commands.push(DrawCommand::Sprite { gfx, pos });
        Ok(())
    }

    fn text_width(&self, font: FontType, text: &str, style: &TextStyle) -> Result<f32, ResourceError> {
        let glyph = self.glyph_width(font)?;
        let count = text.chars().count() as f32;
        let gaps = (count - 1.0).max(0.0);
        Ok((count * glyph + gaps * style.spacing) * style.scale)
    }

    fn draw_text(
        &mut self,
        font: FontType,
        pos: Vec2,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), ResourceError> {
        self.glyph_width(font)?;
        self.commands.push(DrawCommand::Text {
            font,
            pos,
            text: text.to_string(),
            color: style.color,
            scale: style.scale,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sprite_is_an_error() {
        let mut canvas = TraceCanvas::new();
        let err = canvas.draw_sprite(GfxType::Puck, Vec2::ZERO).unwrap_err();
        assert!(matches!(err, ResourceError::MissingSprite(GfxType::Puck)));
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_text_width_scales_with_style() {
        let canvas = TraceCanvas::with_default_assets();
        let style = TextStyle {
            scale: 2.0,
            spacing: 1.0,
            ..Default::default()
        };
        // 4 glyphs * 16 + 3 gaps * 1, doubled
        let width = canvas.text_width(FontType::Score, "1: 2", &style).unwrap();
        assert_eq!(width, 134.0);
    }

    #[test]
    fn test_begin_scene_starts_fresh() {
        let mut canvas = TraceCanvas::with_default_assets();
        canvas.begin_scene();
        canvas.clear(0);
        canvas.end_scene();
        canvas.begin_scene();
        assert!(canvas.commands().is_empty());
        assert_eq!(canvas.frames(), 1);
    }
}
