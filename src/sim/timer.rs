//! Cooperative one-shot timer
//!
//! Advanced explicitly by the frame update; never backed by an OS timer.

/// Fires once `delay` seconds after the last `start`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayTimer {
    delay: f32,
    remaining: Option<f32>,
}

impl DelayTimer {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            remaining: None,
        }
    }

    /// Arm (or re-arm) the timer with the full delay
    pub fn start(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`; returns true on the tick the timer fires
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            false
        }
    }
}
