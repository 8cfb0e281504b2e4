//! Short-lived screen effects
//!
//! Each overlay carries its own elapsed time, is advanced by the frame update
//! and drops out of the collection once it reports completion.

use glam::Vec2;

use crate::consts::{GOAL_BANNER_DURATION, GOAL_BANNER_GROWTH};
use crate::renderer::{Canvas, FontType, ResourceError, TextStyle, argb};

pub trait Overlay {
    /// Advance by `dt`; returns false once the effect is finished
    fn update(&mut self, dt: f32) -> bool;

    fn render(&self, canvas: &mut dyn Canvas, center: Vec2) -> Result<(), ResourceError>;
}

/// "GOAL" text that grows and fades out
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBanner {
    elapsed: f32,
    duration: f32,
    growth: f32,
}

impl Default for GoalBanner {
    fn default() -> Self {
        Self::new(GOAL_BANNER_DURATION, GOAL_BANNER_GROWTH)
    }
}

impl GoalBanner {
    pub const TEXT: &'static str = "GOAL";

    pub fn new(duration: f32, growth: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            growth,
        }
    }

    pub fn scale(&self) -> f32 {
        1.0 + self.elapsed * self.growth
    }

    /// Linear fade from opaque to fully transparent over the lifetime
    pub fn alpha(&self) -> u8 {
        if self.duration <= 0.0 {
            return 0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        ((1.0 - t) * 255.0).round() as u8
    }
}

impl Overlay for GoalBanner {
    fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed < self.duration
    }

    fn render(&self, canvas: &mut dyn Canvas, center: Vec2) -> Result<(), ResourceError> {
        let style = TextStyle {
            color: argb(self.alpha(), 255, 230, 60),
            scale: self.scale(),
            ..Default::default()
        };
        let width = canvas.text_width(FontType::Banner, Self::TEXT, &style)?;
        let pos = Vec2::new(center.x - width / 2.0, center.y);
        canvas.draw_text(FontType::Banner, pos, Self::TEXT, &style)
    }
}

/// Active overlays in start order
#[derive(Default)]
pub struct Overlays {
    items: Vec<Box<dyn Overlay>>,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: impl Overlay + 'static) {
        self.items.push(Box::new(overlay));
    }

    /// Advance every overlay, dropping the finished ones
    pub fn update(&mut self, dt: f32) {
        self.items.retain_mut(|overlay| overlay.update(dt));
    }

    pub fn render(&self, canvas: &mut dyn Canvas, center: Vec2) -> Result<(), ResourceError> {
        for overlay in &self.items {
            overlay.render(canvas, center)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, TraceCanvas, alpha};

    #[test]
    fn test_goal_banner_grows_and_fades() {
        let mut banner = GoalBanner::new(0.3, 6.0);
        assert_eq!(banner.alpha(), 255);
        assert_eq!(banner.scale(), 1.0);

        assert!(banner.update(0.15));
        assert!((banner.scale() - 1.9).abs() < 1e-5);
        assert!(banner.alpha() > 120 && banner.alpha() < 135);

        assert!(!banner.update(0.2));
        assert_eq!(banner.alpha(), 0);
    }

    #[test]
    fn test_overlays_drop_finished_effects() {
        let mut overlays = Overlays::new();
        overlays.push(GoalBanner::new(0.3, 6.0));
        overlays.update(0.1);
        overlays.push(GoalBanner::new(0.3, 6.0));
        assert_eq!(overlays.len(), 2);

        overlays.update(0.25);
        assert_eq!(overlays.len(), 1);
        overlays.update(0.1);
        assert!(overlays.is_empty());
    }

    #[test]
    fn test_banner_renders_centered() {
        let mut canvas = TraceCanvas::with_default_assets();
        let banner = GoalBanner::default();
        banner.render(&mut canvas, Vec2::new(400.0, 300.0)).unwrap();

        let DrawCommand::Text { pos, text, color, .. } = &canvas.commands()[0] else {
            panic!("expected a text command");
        };
        assert_eq!(text, GoalBanner::TEXT);
        // 4 glyphs at 32px
        assert_eq!(pos.x, 400.0 - 64.0);
        assert_eq!(alpha(*color), 255);
    }
}
