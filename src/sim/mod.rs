//! Engine-free board logic
//!
//! Nothing in here renders or touches the host engine:
//! - Board entities (players, paddles, puck)
//! - Bounds policy for the local paddle
//! - Paddle smoothing
//! - Cooperative timers advanced by the frame update

pub mod bounds;
pub mod mover;
pub mod state;
pub mod timer;

pub use bounds::{BoardGeometry, check_allowed_bounds};
pub use mover::SmoothMover;
pub use state::{BoardSide, Paddle, Player, PlayerSummary, Puck};
pub use timer::DelayTimer;
