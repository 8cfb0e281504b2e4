//! In-process peer
//!
//! Stands in for the network client when no server is involved: the demo
//! binary scripts it, tests inspect what was sent through it.

use std::collections::VecDeque;

use glam::Vec2;

use super::{CollisionEvent, GoalEvent, PeerError, PeerLink};

/// Sent paddle updates kept for inspection, oldest dropped first
pub const SENT_HISTORY: usize = 256;

/// A paddle update as it left the client
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentPaddle {
    pub pos: Vec2,
    pub is_final: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LoopbackPeer {
    paddle: Vec2,
    enemy_paddle: Vec2,
    puck: Vec2,
    scores: [u32; 2],
    collisions: VecDeque<CollisionEvent>,
    goals: VecDeque<GoalEvent>,
    winner: Option<usize>,
    stopped: bool,
    closed: bool,
    sent: Vec<SentPaddle>,
}

impl LoopbackPeer {
    pub fn new(paddle: Vec2, enemy_paddle: Vec2, puck: Vec2) -> Self {
        Self {
            paddle,
            enemy_paddle,
            puck,
            ..Default::default()
        }
    }

    pub fn set_enemy_paddle_pos(&mut self, pos: Vec2) {
        self.enemy_paddle = pos;
    }

    pub fn set_puck_pos(&mut self, pos: Vec2) {
        self.puck = pos;
    }

    pub fn push_collision(&mut self, x: f32, force: f32) {
        self.collisions.push_back(CollisionEvent { x, force });
    }

    /// Credit a point to `player_id` and queue the goal event
    pub fn score_goal(&mut self, player_id: usize) -> u32 {
        let slot = player_id.min(1);
        self.scores[slot] += 1;
        self.goals.push_back(GoalEvent {
            scoring_player_id: slot,
            points: self.scores[slot],
        });
        self.scores[slot]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn finish(&mut self, winner_id: usize) {
        self.winner = Some(winner_id);
    }

    /// Report an unrecoverable failure
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Make every following send fail
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Most recent sends, up to [`SENT_HISTORY`]
    pub fn sent(&self) -> &[SentPaddle] {
        &self.sent
    }

    pub fn last_sent(&self) -> Option<SentPaddle> {
        self.sent.last().copied()
    }

    /// Take the recorded sends, leaving the history empty
    pub fn drain_sent(&mut self) -> Vec<SentPaddle> {
        std::mem::take(&mut self.sent)
    }
}

impl PeerLink for LoopbackPeer {
    fn send_paddle_pos(&mut self, pos: Vec2, is_final: bool) -> Result<(), PeerError> {
        if self.closed {
            return Err(PeerError::Closed);
        }
        if !pos.is_finite() {
            return Err(PeerError::Rejected(format!("non-finite position {pos}")));
        }
        self.paddle = pos;
        if self.sent.len() >= SENT_HISTORY {
            self.sent.drain(..=self.sent.len() - SENT_HISTORY);
        }
        self.sent.push(SentPaddle { pos, is_final });
        Ok(())
    }

    fn paddle_pos(&self) -> Vec2 {
        self.paddle
    }

    fn enemy_paddle_pos(&self) -> Vec2 {
        self.enemy_paddle
    }

    fn puck_pos(&self) -> Vec2 {
        self.puck
    }

    fn take_collision(&mut self) -> Option<CollisionEvent> {
        self.collisions.pop_front()
    }

    fn take_goal(&mut self) -> Option<GoalEvent> {
        self.goals.pop_front()
    }

    fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn winner_id(&self) -> usize {
        self.winner.unwrap_or_default()
    }

    fn should_stop(&self) -> bool {
        self.stopped
    }
}
