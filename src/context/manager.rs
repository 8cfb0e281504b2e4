//! Host-side context switching
//!
//! Holds the active context, runs its frame/render pair every tick and
//! builds the next context from the payload of a `Switch` transition.

use log::{debug, error, info, warn};

use super::data::{ContextData, ContextKind};
use super::ingame::InGameContext;
use super::menu::MenuContext;
use super::{AudioHandle, Context, ContextError, Transition};
use crate::input::FrameInput;
use crate::net::PeerHandle;
use crate::renderer::Canvas;
use crate::settings::Settings;

/// Builds contexts from transition payloads
pub trait ContextFactory {
    /// `Ok(None)` means no screen exists for this payload and the session ends
    fn build(
        &mut self,
        data: ContextData,
        canvas: &dyn Canvas,
    ) -> Result<Option<Box<dyn Context>>, ContextError>;
}

/// Factory for the screens this crate implements: menu and match
///
/// Connect, game-over and error screens belong to the host; for those the
/// factory returns `Ok(None)`.
pub struct ClientFactory {
    settings: Settings,
    audio: AudioHandle,
    peer: Option<PeerHandle>,
}

impl ClientFactory {
    pub fn new(settings: Settings, audio: AudioHandle) -> Self {
        Self {
            settings,
            audio,
            peer: None,
        }
    }

    /// Peer used by every match built from now on
    pub fn connect(&mut self, peer: PeerHandle) {
        self.peer = Some(peer);
    }
}

impl ContextFactory for ClientFactory {
    fn build(
        &mut self,
        data: ContextData,
        canvas: &dyn Canvas,
    ) -> Result<Option<Box<dyn Context>>, ContextError> {
        match data {
            ContextData::Menu(data) => Ok(Some(Box::new(MenuContext::new(
                data,
                self.settings.player_name.clone(),
                self.audio.clone(),
            )))),
            ContextData::InGame(data) => {
                let peer = self.peer.clone().ok_or(ContextError::NotConnected)?;
                let ctx = InGameContext::new(data, &self.settings, canvas, peer, self.audio.clone())?;
                Ok(Some(Box::new(ctx)))
            }
            ContextData::Connect(_) | ContextData::GameOver(_) | ContextData::GameError(_) => Ok(None),
        }
    }
}

pub struct ContextManager<F: ContextFactory> {
    factory: F,
    active: Option<Box<dyn Context>>,
}

impl<F: ContextFactory> ContextManager<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            active: None,
        }
    }

    /// Activate the first context
    pub fn start(&mut self, data: ContextData, canvas: &dyn Canvas) {
        debug!("Starting with context {:?}", data.kind());
        self.activate(data, canvas);
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<ContextKind> {
        self.active.as_ref().map(|ctx| ctx.kind())
    }

    /// Run one frame; returns false once the session has ended
    pub fn tick(&mut self, input: &FrameInput, dt: f32, canvas: &mut dyn Canvas) -> bool {
        let Some(ctx) = self.active.as_mut() else {
            return false;
        };

        match ctx.frame(input, dt) {
            Transition::Stay => {}
            Transition::Exit => {
                info!("Context {:?} ended the session", ctx.kind());
                self.active = None;
                return false;
            }
            Transition::Switch(data) => {
                debug!("Switching {:?} -> {:?}", ctx.kind(), data.kind());
                self.activate(data, canvas);
            }
        }

        match self.active.as_mut() {
            Some(ctx) => {
                ctx.render(canvas);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, data: ContextData, canvas: &dyn Canvas) {
        let kind = data.kind();
        let screen = data.screen();

        let built = match self.factory.build(data, canvas) {
            Ok(built) => built,
            Err(e) if kind != ContextKind::GameError => {
                error!("Failed to build {:?} context: {}", kind, e);
                match self.factory.build(ContextData::error(screen, e.to_string()), canvas) {
                    Ok(built) => built,
                    Err(e) => {
                        error!("Failed to build error context: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                error!("Failed to build error context: {}", e);
                None
            }
        };

        self.active = built.map(|mut ctx| {
            ctx.show();
            ctx
        });
        if self.active.is_none() {
            warn!("No context for {:?}, ending session", kind);
        }
    }
}
