//! Paddle bounds policy
//!
//! The paddle sprite must stay inside the board minus the border, except in
//! the goal-mouth band where it may back into its own goal. Whatever the
//! other limits allow, a paddle never crosses the midline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BoardSide, Paddle};
use crate::consts::*;

/// Fixed dimensions of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub width: f32,
    pub height: f32,
    /// Border the paddle may not enter outside the goal mouth
    pub border: f32,
    /// Total height of the goal mouth
    pub goal_mouth: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            border: BORDER_WIDTH,
            goal_mouth: GOAL_MOUTH_HEIGHT,
        }
    }
}

impl BoardGeometry {
    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical range of paddle centers that fit inside the goal mouth
    pub fn goal_band(&self, paddle_half_height: f32) -> (f32, f32) {
        (
            (self.height - self.goal_mouth) / 2.0 + paddle_half_height,
            (self.height + self.goal_mouth) / 2.0 - paddle_half_height,
        )
    }
}

/// Clamp a raw pointer position to where the paddle is allowed to go
///
/// Order matters: general border clamp, then goal-mouth relaxation on the
/// player's own side, then the midline limit, which always wins.
pub fn check_allowed_bounds(
    geometry: &BoardGeometry,
    side: BoardSide,
    paddle: &Paddle,
    raw: Vec2,
) -> Vec2 {
    let half = paddle.half_size();

    let wall_left = geometry.border + half.x;
    let wall_right = geometry.width - geometry.border - half.x;

    let mut x_min = wall_left;
    let mut x_max = wall_right;
    let mut y_min = geometry.border + half.y;
    let mut y_max = geometry.height - geometry.border - half.y;

    let (band_top, band_bottom) = geometry.goal_band(half.y);
    let in_band = paddle.pos.y >= band_top && paddle.pos.y <= band_bottom;

    if in_band {
        match side {
            BoardSide::Left => x_min = half.x,
            BoardSide::Right => x_max = geometry.width - half.x,
        }
    }

    let mut x = clamp_axis(raw.x, x_min, x_max);

    // Past the border, the mouth walls bound y. This holds for a paddle
    // already in the mouth and for a target that would take it there.
    let past_border = |x: f32| match side {
        BoardSide::Left => x < wall_left,
        BoardSide::Right => x > wall_right,
    };
    if in_band && (past_border(paddle.pos.x) || past_border(x)) {
        y_min = band_top;
        y_max = band_bottom;
    }
    let y = clamp_axis(raw.y, y_min, y_max);

    match side {
        BoardSide::Left => x = x.min(geometry.midline() - half.x),
        BoardSide::Right => x = x.max(geometry.midline() + half.x),
    }

    Vec2::new(x, y)
}

/// Like `f32::clamp` but never panics on an inverted range
#[inline]
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
