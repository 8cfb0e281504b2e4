//! Per-screen initialization payloads
//!
//! A transition hands one of these to the next context; the variant decides
//! which context gets built.

use crate::sim::PlayerSummary;

/// Screen dimensions every payload carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuData {
    pub screen: ScreenSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectData {
    pub screen: ScreenSize,
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InGameData {
    pub screen: ScreenSize,
    /// Which of the two players (0 or 1) this client controls
    pub current_player_id: usize,
    pub player_name: String,
    pub opponent_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameOverData {
    pub screen: ScreenSize,
    pub win: bool,
    pub current_player_id: usize,
    /// Final standings indexed by player id
    pub players: [PlayerSummary; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameErrorData {
    pub screen: ScreenSize,
    pub message: String,
}

/// Screen kinds the client can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    Menu,
    Connect,
    InGame,
    GameOver,
    GameError,
}

/// Initialization data for the next context
#[derive(Debug, Clone, PartialEq)]
pub enum ContextData {
    Menu(MenuData),
    Connect(ConnectData),
    InGame(InGameData),
    GameOver(GameOverData),
    GameError(GameErrorData),
}

impl ContextData {
    pub fn kind(&self) -> ContextKind {
        match self {
            ContextData::Menu(_) => ContextKind::Menu,
            ContextData::Connect(_) => ContextKind::Connect,
            ContextData::InGame(_) => ContextKind::InGame,
            ContextData::GameOver(_) => ContextKind::GameOver,
            ContextData::GameError(_) => ContextKind::GameError,
        }
    }

    pub fn screen(&self) -> ScreenSize {
        match self {
            ContextData::Menu(d) => d.screen,
            ContextData::Connect(d) => d.screen,
            ContextData::InGame(d) => d.screen,
            ContextData::GameOver(d) => d.screen,
            ContextData::GameError(d) => d.screen,
        }
    }

    pub fn error(screen: ScreenSize, message: impl Into<String>) -> Self {
        ContextData::GameError(GameErrorData {
            screen,
            message: message.into(),
        })
    }
}
