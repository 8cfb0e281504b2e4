//! Neon Hockey entry point
//!
//! Runs a headless session: the menu is driven to Connect, a loopback peer
//! stands in for the server, and a seeded pointer plays the left paddle
//! until the peer ends the match.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use neon_hockey::audio::{AudioManager, LogSink};
    use neon_hockey::context::{
        ClientFactory, Context, ContextData, ContextError, ContextFactory, ContextManager,
        InGameData, MenuData, ScreenSize,
    };
    use neon_hockey::input::{FrameInput, NavKey};
    use neon_hockey::net::{LoopbackPeer, PeerLink};
    use neon_hockey::renderer::{Canvas, TraceCanvas};
    use neon_hockey::{ContextKind, Settings};

    /// Fixed host frame step (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Safety cap in case the script never ends the session
    const MAX_FRAMES: u32 = 100_000;

    /// Stands in for the connect/game-over/error screens the host would own
    struct DemoFactory {
        client: ClientFactory,
        peer: Rc<RefCell<LoopbackPeer>>,
    }

    impl ContextFactory for DemoFactory {
        fn build(
            &mut self,
            data: ContextData,
            canvas: &dyn Canvas,
        ) -> Result<Option<Box<dyn Context>>, ContextError> {
            match data {
                ContextData::Connect(connect) => {
                    log::info!("{} connected to loopback peer", connect.player_name);
                    self.client.connect(self.peer.clone());
                    let ingame = InGameData {
                        screen: connect.screen,
                        current_player_id: 0,
                        player_name: connect.player_name,
                        opponent_name: "cpu".to_string(),
                    };
                    self.client.build(ContextData::InGame(ingame), canvas)
                }
                ContextData::GameOver(over) => {
                    let [left, right] = &over.players;
                    log::info!(
                        "{}: {} {} - {} {}",
                        if over.win { "Victory" } else { "Defeat" },
                        left.name,
                        left.score,
                        right.score,
                        right.name
                    );
                    Ok(None)
                }
                ContextData::GameError(err) => {
                    log::error!("Game error: {}", err.message);
                    Ok(None)
                }
                other => self.client.build(other, canvas),
            }
        }
    }

    /// Scripted opponent, puck and pointer
    struct Script {
        rng: Pcg32,
        peer: Rc<RefCell<LoopbackPeer>>,
        screen: ScreenSize,
        puck_vel: Vec2,
        pointer_target: Vec2,
        drag_frames: u32,
        match_frames: u32,
        match_length: u32,
        /// Paddle updates the client has sent so far
        sends: usize,
    }

    impl Script {
        fn new(settings: &Settings, peer: Rc<RefCell<LoopbackPeer>>) -> Self {
            let mut rng = Pcg32::seed_from_u64(settings.demo_seed);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            Self {
                rng,
                peer,
                screen: ScreenSize::new(settings.screen_width, settings.screen_height),
                puck_vel: Vec2::from_angle(angle) * 240.0,
                pointer_target: Vec2::ZERO,
                drag_frames: 0,
                match_frames: 0,
                match_length: settings.demo_frames,
                sends: 0,
            }
        }

        fn menu_input(&self, frame: u32) -> FrameInput {
            // Let the menu slide in, then pick the focused Connect entry
            if frame == 45 {
                FrameInput::key(NavKey::Confirm)
            } else {
                FrameInput::default()
            }
        }

        fn match_input(&mut self) -> FrameInput {
            self.match_frames += 1;
            self.advance_peer();

            if self.drag_frames == 0 {
                if !self.rng.random_bool(0.05) {
                    return FrameInput::default();
                }
                self.pointer_target = Vec2::new(
                    self.rng.random_range(0.0..self.screen.width),
                    self.rng.random_range(0.0..self.screen.height),
                );
                self.drag_frames = self.rng.random_range(10..40);
            }
            self.drag_frames -= 1;
            FrameInput::drag(self.pointer_target)
        }

        fn advance_peer(&mut self) {
            let mut peer = self.peer.borrow_mut();
            self.sends += peer.drain_sent().len();
            let mut puck = peer.puck_pos() + self.puck_vel * FRAME_DT;
            if puck.x < 0.0 || puck.x > self.screen.width {
                self.puck_vel.x = -self.puck_vel.x;
                peer.push_collision(puck.x, self.rng.random_range(20.0..100.0));
            }
            if puck.y < 0.0 || puck.y > self.screen.height {
                self.puck_vel.y = -self.puck_vel.y;
                peer.push_collision(puck.x, self.rng.random_range(20.0..100.0));
            }
            puck = puck.clamp(Vec2::ZERO, Vec2::new(self.screen.width, self.screen.height));
            peer.set_puck_pos(puck);

            let enemy_y = self.screen.height / 2.0 + (self.match_frames as f32 * 0.05).sin() * 120.0;
            peer.set_enemy_paddle_pos(Vec2::new(self.screen.width * 0.85, enemy_y));

            if self.rng.random_bool(0.004) {
                let scorer = self.rng.random_range(0..2);
                peer.score_goal(scorer);
                peer.set_puck_pos(Vec2::new(self.screen.width / 2.0, self.screen.height / 2.0));
            }

            if self.match_frames == self.match_length {
                let [left, right] = peer.scores();
                peer.finish(if left >= right { 0 } else { 1 });
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Neon Hockey (headless demo) starting...");

        let settings = Settings::load();
        let screen = ScreenSize::new(settings.screen_width, settings.screen_height);

        let mut audio = AudioManager::new(Box::new(LogSink));
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        let audio = Rc::new(RefCell::new(audio));

        let center = Vec2::new(screen.width / 2.0, screen.height / 2.0);
        let peer = Rc::new(RefCell::new(LoopbackPeer::new(
            Vec2::new(screen.width * 0.15, center.y),
            Vec2::new(screen.width * 0.85, center.y),
            center,
        )));

        let mut script = Script::new(&settings, peer.clone());
        let factory = DemoFactory {
            client: ClientFactory::new(settings, audio),
            peer,
        };

        let mut canvas = TraceCanvas::with_default_assets();
        let mut manager = ContextManager::new(factory);
        manager.start(ContextData::Menu(MenuData { screen }), &canvas);

        let mut frame = 0;
        while frame < MAX_FRAMES {
            let input = match manager.active_kind() {
                Some(ContextKind::InGame) => script.match_input(),
                _ => script.menu_input(frame),
            };
            if !manager.tick(&input, FRAME_DT, &mut canvas) {
                break;
            }
            frame += 1;
        }

        log::info!(
            "Session ended after {} frames ({} rendered, {} paddle updates sent)",
            frame,
            canvas.frames(),
            script.sends
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by the embedding engine
}
