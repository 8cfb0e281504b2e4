//! Main menu context
//!
//! Activating an item only starts the menu's leave animation. The choice is
//! acted on once the widget reports it has left, after which the widget is
//! re-entered so it is ready if the player comes back.

use glam::Vec2;

use super::data::{ConnectData, ContextData, ContextKind, MenuData};
use super::{AudioHandle, Context, ContextError, Transition, borrow_audio};
use crate::audio::SoundType;
use crate::input::FrameInput;
use crate::renderer::{Canvas, FontType, ResourceError, TextStyle, argb};
use crate::ui::{MenuItem, MenuWidget, WidgetSignal};

/// Offset of the status line from the bottom of the screen
const STATUS_BAR_HEIGHT: f32 = 32.0;

/// Fixed menu entries, ids as used by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Connect = 1,
    About = 2,
    Exit = 3,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Connect, MenuEntry::About, MenuEntry::Exit];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Connect => "Connect",
            MenuEntry::About => "About",
            MenuEntry::Exit => "Exit",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            MenuEntry::Connect => "Connect to dedicated server",
            MenuEntry::About => "Information about NeonHockey",
            MenuEntry::Exit => "Exit game",
        }
    }
}

pub struct MenuContext {
    data: MenuData,
    player_name: String,
    audio: AudioHandle,
    widget: MenuWidget,
    /// Item chosen before the current leave animation
    last_chosen: Option<MenuEntry>,
}

impl MenuContext {
    pub fn new(data: MenuData, player_name: impl Into<String>, audio: AudioHandle) -> Self {
        let mut widget = MenuWidget::new();
        for (i, entry) in MenuEntry::ALL.into_iter().enumerate() {
            widget.add_item(MenuItem {
                id: entry.id(),
                label: entry.label().to_string(),
                hint: entry.hint().to_string(),
                pos: Vec2::new(data.screen.width / 2.0, 200.0 + 40.0 * i as f32),
                delay: i as f32 / 10.0,
            });
        }

        Self {
            data,
            player_name: player_name.into(),
            audio,
            widget,
            last_chosen: None,
        }
    }

    pub fn widget(&self) -> &MenuWidget {
        &self.widget
    }

    fn reenter(&mut self) {
        self.widget.enter();
        self.widget.set_focus(MenuEntry::Connect.id());
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), ResourceError> {
        self.widget.render(canvas, FontType::Menu)?;
        if let Some(item) = self.widget.focused_item() {
            let style = TextStyle {
                color: argb(255, 200, 200, 200),
                ..Default::default()
            };
            let pos = Vec2::new(10.0, self.data.screen.height - STATUS_BAR_HEIGHT);
            canvas.draw_text(FontType::StatusBar, pos, &item.hint, &style)?;
        }
        Ok(())
    }
}

impl Context for MenuContext {
    fn kind(&self) -> ContextKind {
        ContextKind::Menu
    }

    fn show(&mut self) {
        self.reenter();
    }

    fn frame(&mut self, input: &FrameInput, dt: f32) -> Transition {
        match self.widget.update(dt, input.nav) {
            WidgetSignal::Left => {
                self.reenter();
                match self.last_chosen.take() {
                    Some(MenuEntry::Connect) => {
                        log::debug!("menu: connect");
                        Transition::Switch(ContextData::Connect(ConnectData {
                            screen: self.data.screen,
                            player_name: self.player_name.clone(),
                        }))
                    }
                    Some(MenuEntry::Exit) => {
                        log::info!("menu: exit");
                        Transition::Exit
                    }
                    Some(MenuEntry::About) | None => Transition::Stay,
                }
            }
            WidgetSignal::Activated(id) => {
                self.last_chosen = MenuEntry::from_id(id);
                let played = borrow_audio(&self.audio).and_then(|mut audio| {
                    audio
                        .play(SoundType::MenuSelect)
                        .map_err(ContextError::from)
                });
                if let Err(e) = played {
                    log::warn!("menu sound failed: {}", e);
                }
                self.widget.leave();
                Transition::Stay
            }
            WidgetSignal::Idle => Transition::Stay,
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.begin_scene();
        canvas.clear(0);
        if let Err(e) = self.draw(canvas) {
            log::error!("menu render failed: {}", e);
        }
        canvas.end_scene();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::context::ScreenSize;
    use crate::input::NavKey;
    use crate::renderer::{DrawCommand, TraceCanvas};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shown_menu() -> MenuContext {
        let audio = Rc::new(RefCell::new(AudioManager::default()));
        let mut menu = MenuContext::new(
            MenuData {
                screen: ScreenSize::new(800.0, 600.0),
            },
            "ada",
            audio,
        );
        menu.show();
        assert_eq!(menu.frame(&FrameInput::default(), 1.0), Transition::Stay);
        menu
    }

    /// Activate the focused item and play the leave animation through
    fn choose(menu: &mut MenuContext) -> Transition {
        assert_eq!(menu.frame(&FrameInput::key(NavKey::Confirm), 0.016), Transition::Stay);
        menu.frame(&FrameInput::default(), 1.0)
    }

    #[test]
    fn test_entry_ids_round_trip() {
        for entry in MenuEntry::ALL {
            assert_eq!(MenuEntry::from_id(entry.id()), Some(entry));
        }
        assert_eq!(MenuEntry::from_id(0), None);
    }

    #[test]
    fn test_connect_switches_to_connect_context() {
        let mut menu = shown_menu();
        let transition = choose(&mut menu);
        let Transition::Switch(ContextData::Connect(data)) = transition else {
            panic!("expected connect, got {:?}", transition);
        };
        assert_eq!(data.player_name, "ada");
        assert_eq!(data.screen, ScreenSize::new(800.0, 600.0));
    }

    #[test]
    fn test_busy_audio_does_not_block_selection() {
        let mut menu = shown_menu();
        let audio = menu.audio.clone();
        let _guard = audio.borrow_mut();
        assert!(matches!(
            choose(&mut menu),
            Transition::Switch(ContextData::Connect(_))
        ));
    }

    #[test]
    fn test_about_stays_and_menu_reenters() {
        let mut menu = shown_menu();
        menu.frame(&FrameInput::key(NavKey::Down), 0.016);
        assert_eq!(choose(&mut menu), Transition::Stay);
        assert_eq!(menu.widget().focus(), Some(MenuEntry::Connect.id()));

        menu.frame(&FrameInput::default(), 1.0);
        assert!(menu.widget().is_shown());
    }

    #[test]
    fn test_exit_ends_session() {
        let mut menu = shown_menu();
        menu.frame(&FrameInput::key(NavKey::Up), 0.016);
        assert_eq!(choose(&mut menu), Transition::Exit);
    }

    #[test]
    fn test_render_shows_focused_hint() {
        let mut menu = shown_menu();
        let mut canvas = TraceCanvas::with_default_assets();
        menu.render(&mut canvas);

        let labels: Vec<_> = canvas.texts().collect();
        assert_eq!(labels, ["Connect", "About", "Exit", "Connect to dedicated server"]);
        let status = canvas.commands().last().unwrap();
        assert!(matches!(
            status,
            DrawCommand::Text { font: FontType::StatusBar, pos, .. } if pos.y == 568.0
        ));
    }
}
