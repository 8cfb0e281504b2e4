//! Board entities: players, paddles and the puck
//!
//! Everything here is owned by the in-game context and touched only from the
//! game-loop thread.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Half of the board a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSide {
    Left,
    Right,
}

impl BoardSide {
    /// Side assigned to a player id (0 plays left, 1 plays right)
    pub fn for_player(id: usize) -> Self {
        if id == 0 { BoardSide::Left } else { BoardSide::Right }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardSide::Left => "left",
            BoardSide::Right => "right",
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Sprite center
    pub pos: Vec2,
    /// Sprite dimensions
    pub size: Vec2,
    /// Position restored after a goal
    initial_pos: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            initial_pos: pos,
        }
    }

    pub fn initial_pos(&self) -> Vec2 {
        self.initial_pos
    }

    /// Move back to the position recorded at construction
    pub fn reset(&mut self) {
        self.pos = self.initial_pos;
    }

    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// The puck; position mirrors the remote authoritative state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
}

/// One of the two participants
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    side: BoardSide,
    score: u32,
    paddle: Paddle,
}

impl Player {
    pub fn new(name: impl Into<String>, side: BoardSide, paddle: Paddle) -> Self {
        Self {
            name: name.into(),
            side,
            score: 0,
            paddle,
        }
    }

    pub fn side(&self) -> BoardSide {
        self.side
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply the point total reported by the peer
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            side: self.side,
            score: self.score,
        }
    }
}

/// Final per-player data handed to the game-over screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub side: BoardSide,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_reset_restores_initial_position() {
        let mut paddle = Paddle::new(Vec2::new(100.0, 300.0), Vec2::splat(64.0));
        paddle.pos = Vec2::new(250.0, 120.0);
        paddle.reset();
        assert_eq!(paddle.pos, Vec2::new(100.0, 300.0));
        assert_eq!(paddle.initial_pos(), Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_board_side_for_player() {
        assert_eq!(BoardSide::for_player(0), BoardSide::Left);
        assert_eq!(BoardSide::for_player(1), BoardSide::Right);
    }

    #[test]
    fn test_player_summary_carries_score() {
        let mut player = Player::new(
            "ada",
            BoardSide::Right,
            Paddle::new(Vec2::ZERO, Vec2::splat(32.0)),
        );
        player.set_score(7);
        let summary = player.summary();
        assert_eq!(summary.name, "ada");
        assert_eq!(summary.side, BoardSide::Right);
        assert_eq!(summary.score, 7);
    }
}
