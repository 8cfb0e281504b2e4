//! Neon Hockey - network air-hockey client
//!
//! Core modules:
//! - `sim`: Paddle/puck model, bounds policy, smoothing and cooperative timers
//! - `net`: The peer link the contexts poll (injected, never a singleton)
//! - `renderer`: Drawing/resource seam to the host engine
//! - `audio`: Volume, mute and stereo pan for positional effects
//! - `ui`: Menu widget and self-terminating overlays
//! - `context`: Screen contexts and the host-side context manager

pub mod audio;
pub mod context;
pub mod input;
pub mod net;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use context::{Context, ContextData, ContextKind, ContextManager, Transition};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Border around the board the paddle may not enter
    pub const BORDER_WIDTH: f32 = 32.0;
    /// Total height of the goal mouth on each end of the board
    pub const GOAL_MOUTH_HEIGHT: f32 = 200.0;

    /// Paddle covers 1/divisor of the remaining distance per update
    pub const SMOOTH_DIVISOR: f32 = 4.0;
    /// Seconds of drag inactivity before the settled position is re-sent
    pub const IDLE_PUSH_DELAY: f32 = 0.15;

    /// GOAL banner lifetime (seconds), alpha reaches zero at the end
    pub const GOAL_BANNER_DURATION: f32 = 0.3;
    /// GOAL banner scale growth per second
    pub const GOAL_BANNER_GROWTH: f32 = 6.0;

    /// Collision force that plays at full volume
    pub const FULL_VOLUME_FORCE: f32 = 100.0;

    /// Vertical offset of the score line
    pub const SCORE_TOP: f32 = 8.0;
}
