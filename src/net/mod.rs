//! Peer link seam
//!
//! The contexts never own the network stack. They poll a `PeerLink` that a
//! background component keeps up to date; every read here is non-blocking.

pub mod loopback;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use thiserror::Error;

pub use loopback::LoopbackPeer;

/// Shared handle passed to each context at construction
pub type PeerHandle = Rc<RefCell<dyn PeerLink>>;

/// A puck impact reported by the peer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Horizontal position of the impact (drives stereo pan)
    pub x: f32,
    /// Impact strength
    pub force: f32,
}

/// A goal reported by the peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvent {
    /// Player credited with the point
    pub scoring_player_id: usize,
    /// That player's new total
    pub points: u32,
}

#[derive(Debug, Error)]
pub enum PeerError {
    #[error("peer link closed")]
    Closed,
    #[error("peer rejected paddle update: {0}")]
    Rejected(String),
    #[error("peer handle is already borrowed")]
    Busy,
}

/// Operations the client consumes from the networking layer
pub trait PeerLink {
    /// Send this player's paddle position; `is_final` marks a settled position
    fn send_paddle_pos(&mut self, pos: Vec2, is_final: bool) -> Result<(), PeerError>;

    /// Own paddle position assigned by the server (initial sync)
    fn paddle_pos(&self) -> Vec2;

    fn enemy_paddle_pos(&self) -> Vec2;

    fn puck_pos(&self) -> Vec2;

    /// Pending collision, consumed on read
    fn take_collision(&mut self) -> Option<CollisionEvent>;

    /// Pending goal, consumed on read
    fn take_goal(&mut self) -> Option<GoalEvent>;

    fn is_game_over(&self) -> bool;

    fn winner_id(&self) -> usize;

    /// Unrecoverable link failure
    fn should_stop(&self) -> bool;
}

/// Borrow the shared link mutably without panicking on re-entry
pub fn borrow_link(
    handle: &PeerHandle,
) -> Result<std::cell::RefMut<'_, dyn PeerLink + 'static>, PeerError> {
    handle.try_borrow_mut().map_err(|_| PeerError::Busy)
}
