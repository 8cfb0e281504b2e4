//! Screen contexts
//!
//! The host loop calls the active context's `frame` and then its `render`
//! once per tick. `frame` returns the transition to apply: stay, switch to a
//! context built from the supplied payload, or end the session.

pub mod data;
pub mod ingame;
pub mod manager;
pub mod menu;

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use thiserror::Error;

use crate::audio::AudioManager;
use crate::input::FrameInput;
use crate::net::PeerError;
use crate::renderer::{Canvas, ResourceError};

pub use data::{
    ConnectData, ContextData, ContextKind, GameErrorData, GameOverData, InGameData, MenuData,
    ScreenSize,
};
pub use ingame::InGameContext;
pub use manager::{ClientFactory, ContextFactory, ContextManager};
pub use menu::{MenuContext, MenuEntry};

/// Audio shared by every context of a session
pub type AudioHandle = Rc<RefCell<AudioManager>>;

/// Result of a context's frame update
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Keep the current context
    Stay,
    /// Replace the current context with one built from this payload
    Switch(ContextData),
    /// No next context; the session ends
    Exit,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Peer(#[from] PeerError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("no player with id {0}")]
    InvalidPlayer(usize),
    #[error("not connected to a peer")]
    NotConnected,
    #[error("audio is already in use")]
    AudioBusy,
}

/// Borrow the shared audio mutably without panicking on re-entry
pub fn borrow_audio(handle: &AudioHandle) -> Result<RefMut<'_, AudioManager>, ContextError> {
    handle.try_borrow_mut().map_err(|_| ContextError::AudioBusy)
}

/// One screen of the client
pub trait Context {
    fn kind(&self) -> ContextKind;

    /// Called when the context becomes active
    fn show(&mut self) {}

    fn frame(&mut self, input: &FrameInput, dt: f32) -> Transition;

    /// Draw the frame; failures are contained inside the context
    fn render(&mut self, canvas: &mut dyn Canvas);
}
