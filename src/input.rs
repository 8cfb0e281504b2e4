//! Per-frame input snapshot
//!
//! The host samples its input device once per frame and hands the contexts
//! this value.

use glam::Vec2;

/// Menu navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Confirm,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Pointer is over the play area
    pub pointer_over: bool,
    /// Primary button held
    pub primary_down: bool,
    /// Navigation key pressed this frame
    pub nav: Option<NavKey>,
}

impl FrameInput {
    /// A held drag at `pointer`
    pub fn drag(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_over: true,
            primary_down: true,
            nav: None,
        }
    }

    pub fn key(nav: NavKey) -> Self {
        Self {
            nav: Some(nav),
            ..Default::default()
        }
    }

    /// Pointer drag the paddle should follow
    pub fn is_dragging(&self) -> bool {
        self.pointer_over && self.primary_down
    }
}
