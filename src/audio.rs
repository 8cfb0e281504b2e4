//! Audio playback
//!
//! Volume, mute and stereo placement live here; the host engine only has to
//! play a loaded sample at a given volume and pan.

use crate::consts::FULL_VOLUME_FORCE;
use crate::renderer::ResourceError;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundType {
    /// Puck hits a paddle or wall
    Collision,
    /// A goal was scored
    Goal,
    /// Menu item activated
    MenuSelect,
}

/// Playback backend provided by the host engine
pub trait SoundSink {
    /// `volume` in 0..=1, `pan` in -100 (left) ..= 100 (right)
    fn play(&mut self, sound: SoundType, volume: f32, pan: f32) -> Result<(), ResourceError>;
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, sound: SoundType, volume: f32, pan: f32) -> Result<(), ResourceError> {
        log::debug!("sound {:?} volume {:.2} pan {:.0}", sound, volume, pan);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn SoundSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound centered at full strength
    pub fn play(&mut self, sound: SoundType) -> Result<(), ResourceError> {
        self.emit(sound, 1.0, 0.0)
    }

    /// Play a sound placed at `x` on a field `field_width` wide, louder for harder hits
    pub fn play_at(
        &mut self,
        sound: SoundType,
        x: f32,
        force: f32,
        field_width: f32,
    ) -> Result<(), ResourceError> {
        let strength = (force / FULL_VOLUME_FORCE).clamp(0.0, 1.0);
        self.emit(sound, strength, pan_for(x, field_width))
    }

    fn emit(&mut self, sound: SoundType, strength: f32, pan: f32) -> Result<(), ResourceError> {
        let vol = self.effective_volume() * strength;
        if vol <= 0.0 {
            return Ok(());
        }
        self.sink.play(sound, vol, pan)
    }
}

/// Stereo pan for a horizontal position: -100 at the left edge, 100 at the right
pub fn pan_for(x: f32, field_width: f32) -> f32 {
    if field_width <= 0.0 {
        return 0.0;
    }
    ((x / field_width) * 200.0 - 100.0).clamp(-100.0, 100.0)
}
