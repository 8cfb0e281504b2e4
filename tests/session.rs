//! Full client session through the context manager:
//! menu -> connect -> match -> game over.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use neon_hockey::audio::AudioManager;
use neon_hockey::context::{
    ClientFactory, Context, ContextData, ContextError, ContextFactory, ContextManager,
    GameOverData, InGameData, MenuData, ScreenSize,
};
use neon_hockey::input::{FrameInput, NavKey};
use neon_hockey::net::LoopbackPeer;
use neon_hockey::renderer::{Canvas, TraceCanvas};
use neon_hockey::{ContextKind, Settings};

const DT: f32 = 1.0 / 60.0;

/// Connects straight to a loopback peer and records where the session ended
struct TestFactory {
    client: ClientFactory,
    peer: Rc<RefCell<LoopbackPeer>>,
    current_player_id: usize,
    game_over: Rc<RefCell<Option<GameOverData>>>,
    error: Rc<RefCell<Option<String>>>,
}

impl ContextFactory for TestFactory {
    fn build(
        &mut self,
        data: ContextData,
        canvas: &dyn Canvas,
    ) -> Result<Option<Box<dyn Context>>, ContextError> {
        match data {
            ContextData::Connect(connect) => {
                self.client.connect(self.peer.clone());
                let ingame = InGameData {
                    screen: connect.screen,
                    current_player_id: self.current_player_id,
                    player_name: connect.player_name,
                    opponent_name: "rival".to_string(),
                };
                self.client.build(ContextData::InGame(ingame), canvas)
            }
            ContextData::GameOver(over) => {
                *self.game_over.borrow_mut() = Some(over);
                Ok(None)
            }
            ContextData::GameError(err) => {
                *self.error.borrow_mut() = Some(err.message);
                Ok(None)
            }
            other => self.client.build(other, canvas),
        }
    }
}

struct Session {
    manager: ContextManager<TestFactory>,
    canvas: TraceCanvas,
    peer: Rc<RefCell<LoopbackPeer>>,
    game_over: Rc<RefCell<Option<GameOverData>>>,
    error: Rc<RefCell<Option<String>>>,
}

impl Session {
    fn new(current_player_id: usize) -> Self {
        let settings = Settings {
            player_name: "ada".to_string(),
            ..Default::default()
        };
        let audio = Rc::new(RefCell::new(AudioManager::default()));
        let peer = Rc::new(RefCell::new(LoopbackPeer::new(
            Vec2::new(120.0, 300.0),
            Vec2::new(680.0, 300.0),
            Vec2::new(400.0, 300.0),
        )));
        let game_over = Rc::new(RefCell::new(None));
        let error = Rc::new(RefCell::new(None));

        let factory = TestFactory {
            client: ClientFactory::new(settings, audio),
            peer: peer.clone(),
            current_player_id,
            game_over: game_over.clone(),
            error: error.clone(),
        };
        let canvas = TraceCanvas::with_default_assets();
        let mut manager = ContextManager::new(factory);
        manager.start(
            ContextData::Menu(MenuData {
                screen: ScreenSize::new(800.0, 600.0),
            }),
            &canvas,
        );

        Self {
            manager,
            canvas,
            peer,
            game_over,
            error,
        }
    }

    fn tick(&mut self, input: FrameInput) -> bool {
        self.manager.tick(&input, DT, &mut self.canvas)
    }

    /// Wait out the menu animation, confirm Connect, wait out the leave
    fn connect(&mut self) {
        for _ in 0..60 {
            self.tick(FrameInput::default());
        }
        self.tick(FrameInput::key(NavKey::Confirm));
        for _ in 0..60 {
            if self.manager.active_kind() == Some(ContextKind::InGame) {
                return;
            }
            self.tick(FrameInput::default());
        }
        panic!("menu never switched to the match");
    }
}

#[test]
fn test_full_session_reaches_game_over() {
    let mut session = Session::new(0);
    assert_eq!(session.manager.active_kind(), Some(ContextKind::Menu));
    session.connect();

    for _ in 0..30 {
        assert!(session.tick(FrameInput::drag(Vec2::new(350.0, 200.0))));
    }
    {
        let peer = session.peer.borrow();
        let last = peer.last_sent().expect("paddle updates were sent");
        assert!(last.pos.x <= 400.0);
        assert!((last.pos.y - 200.0).abs() < 5.0);
    }

    session.peer.borrow_mut().score_goal(0);
    assert!(session.tick(FrameInput::default()));
    assert!(session.canvas.texts().any(|t| t == "(ada) 1 : 0 (rival)"));
    assert!(session.canvas.texts().any(|t| t == "GOAL"));

    session.peer.borrow_mut().finish(0);
    assert!(!session.tick(FrameInput::default()));
    assert!(!session.manager.is_running());

    let over = session.game_over.borrow().clone().expect("game over reached");
    assert!(over.win);
    assert_eq!(over.players[0].name, "ada");
    assert_eq!(over.players[0].score, 1);
    assert_eq!(over.players[1].name, "rival");
    assert!(session.error.borrow().is_none());
}

#[test]
fn test_right_side_player_loses() {
    let mut session = Session::new(1);
    session.connect();

    session.peer.borrow_mut().finish(0);
    assert!(!session.tick(FrameInput::default()));

    let over = session.game_over.borrow().clone().expect("game over reached");
    assert!(!over.win);
    assert_eq!(over.current_player_id, 1);
    assert_eq!(over.players[1].name, "ada");
}

#[test]
fn test_dropped_link_ends_in_error_screen() {
    let mut session = Session::new(0);
    session.connect();

    session.peer.borrow_mut().close();
    assert!(!session.tick(FrameInput::drag(Vec2::new(200.0, 300.0))));
    assert!(session.error.borrow().is_some());
    assert!(session.game_over.borrow().is_none());
}
