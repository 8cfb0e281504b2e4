//! Vertical menu widget
//!
//! Items slide in on `enter`, take up/down navigation (wrapping at both
//! ends) while shown, and slide out on `leave`. Once the leave animation has
//! played the widget reports `WidgetSignal::Left` so the owner can act on
//! the item that was chosen.

use glam::Vec2;

use crate::input::NavKey;
use crate::renderer::{Canvas, FontType, ResourceError, TextStyle, argb};

/// Seconds each item takes to slide in or out
const ITEM_ANIM_TIME: f32 = 0.25;
/// Horizontal slide distance
const SLIDE_OFFSET: f32 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub label: String,
    /// Status-bar line shown while the item is focused
    pub hint: String,
    pub pos: Vec2,
    /// Animation start delay
    pub delay: f32,
}

/// What the widget reports after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSignal {
    Idle,
    /// Item activated while shown
    Activated(u32),
    /// Leave animation finished
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Entering(f32),
    Shown,
    Leaving(f32),
}

#[derive(Debug, Clone)]
pub struct MenuWidget {
    items: Vec<MenuItem>,
    focus: Option<u32>,
    phase: Phase,
    item_color: u32,
    shadow_color: u32,
}

impl Default for MenuWidget {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focus: None,
            phase: Phase::Hidden,
            item_color: argb(255, 0, 255, 0),
            shadow_color: argb(200, 255, 0, 0),
        }
    }
}

impl MenuWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Start the slide-in animation
    pub fn enter(&mut self) {
        self.phase = Phase::Entering(0.0);
    }

    /// Start the slide-out animation
    pub fn leave(&mut self) {
        self.phase = Phase::Leaving(0.0);
    }

    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Shown
    }

    pub fn set_focus(&mut self, id: u32) {
        if self.items.iter().any(|item| item.id == id) {
            self.focus = Some(id);
        } else {
            log::warn!("menu has no item {}", id);
        }
    }

    pub fn focus(&self) -> Option<u32> {
        self.focus
    }

    pub fn focused_item(&self) -> Option<&MenuItem> {
        let id = self.focus?;
        self.items.iter().find(|item| item.id == id)
    }

    fn anim_length(&self) -> f32 {
        let last_delay = self.items.iter().map(|i| i.delay).fold(0.0, f32::max);
        last_delay + ITEM_ANIM_TIME
    }

    pub fn update(&mut self, dt: f32, nav: Option<NavKey>) -> WidgetSignal {
        match self.phase {
            Phase::Hidden => WidgetSignal::Idle,
            Phase::Entering(t) => {
                let t = t + dt;
                self.phase = if t >= self.anim_length() {
                    Phase::Shown
                } else {
                    Phase::Entering(t)
                };
                WidgetSignal::Idle
            }
            Phase::Shown => match nav {
                Some(NavKey::Up) => {
                    self.step_focus(-1);
                    WidgetSignal::Idle
                }
                Some(NavKey::Down) => {
                    self.step_focus(1);
                    WidgetSignal::Idle
                }
                Some(NavKey::Confirm) => match self.focus {
                    Some(id) => WidgetSignal::Activated(id),
                    None => WidgetSignal::Idle,
                },
                None => WidgetSignal::Idle,
            },
            Phase::Leaving(t) => {
                let t = t + dt;
                if t >= self.anim_length() {
                    self.phase = Phase::Hidden;
                    WidgetSignal::Left
                } else {
                    self.phase = Phase::Leaving(t);
                    WidgetSignal::Idle
                }
            }
        }
    }

    fn step_focus(&mut self, step: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let current = self
            .focus
            .and_then(|id| self.items.iter().position(|item| item.id == id))
            .map(|i| i as isize)
            .unwrap_or(if step > 0 { -1 } else { 0 });
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = Some(self.items[next].id);
    }

    /// How far an item is into view, 0 (hidden) to 1 (in place)
    fn visibility(&self, item: &MenuItem) -> f32 {
        let ramp = |t: f32| ((t - item.delay) / ITEM_ANIM_TIME).clamp(0.0, 1.0);
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Entering(t) => ramp(t),
            Phase::Shown => 1.0,
            Phase::Leaving(t) => 1.0 - ramp(t),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas, font: FontType) -> Result<(), ResourceError> {
        for item in &self.items {
            let shown = self.visibility(item);
            if shown <= 0.0 {
                continue;
            }
            let base = if self.focus == Some(item.id) {
                self.item_color
            } else {
                self.shadow_color
            };
            let alpha = ((base >> 24) as f32 * shown).round() as u32;
            let style = TextStyle {
                color: (alpha << 24) | (base & 0x00FF_FFFF),
                ..Default::default()
            };
            let pos = item.pos - Vec2::new((1.0 - shown) * SLIDE_OFFSET, 0.0);
            canvas.draw_text(font, pos, &item.label, &style)?;
        }
        Ok(())
    }
}
