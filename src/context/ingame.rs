//! In-game context
//!
//! Owns both players and the puck, steers the local paddle from the pointer,
//! mirrors the remote state and decides when the match screen ends.
//!
//! Per frame:
//! 1. Pointer drag: clamp the pointer, retarget the mover, re-arm the idle push
//! 2. Step the mover (sends the paddle position every tick while active)
//! 3. Pull enemy paddle and puck positions
//! 4. Collision -> positional sound
//! 5. Goal -> score, reset paddles, resend position, GOAL banner
//! 6. Advance overlays and the idle push
//! 7. Game over / link failure / stay
//!
//! Any failure along the way ends the match in the error screen.

use glam::Vec2;

use super::data::{ContextData, ContextKind, GameOverData, InGameData, ScreenSize};
use super::{AudioHandle, Context, ContextError, Transition, borrow_audio};
use crate::audio::SoundType;
use crate::consts::SCORE_TOP;
use crate::input::FrameInput;
use crate::net::{GoalEvent, PeerHandle, PeerLink, borrow_link};
use crate::renderer::{Canvas, FontType, GfxType, ResourceError, Resources, TextStyle, argb};
use crate::settings::Settings;
use crate::sim::{
    BoardGeometry, BoardSide, DelayTimer, Paddle, Player, Puck, SmoothMover, check_allowed_bounds,
};
use crate::ui::{GoalBanner, Overlays};

pub struct InGameContext {
    data: InGameData,
    geometry: BoardGeometry,
    peer: PeerHandle,
    audio: AudioHandle,
    players: [Player; 2],
    puck: Puck,
    mover: SmoothMover,
    idle_push: DelayTimer,
    overlays: Overlays,
}

impl InGameContext {
    /// Build the match from the peer's initial positions
    ///
    /// Geometry and timing come from `settings` and are not re-read later.
    pub fn new<R: Resources + ?Sized>(
        data: InGameData,
        settings: &Settings,
        resources: &R,
        peer: PeerHandle,
        audio: AudioHandle,
    ) -> Result<Self, ContextError> {
        let current = data.current_player_id;
        if current > 1 {
            return Err(ContextError::InvalidPlayer(current));
        }

        let own_size = resources.sprite_info(GfxType::PaddleCurrent)?.size();
        let enemy_size = resources.sprite_info(GfxType::PaddleEnemy)?.size();

        let (own_pos, enemy_pos, puck_pos) = {
            let link = borrow_link(&peer)?;
            (link.paddle_pos(), link.enemy_paddle_pos(), link.puck_pos())
        };

        let own = Player::new(
            data.player_name.clone(),
            BoardSide::for_player(current),
            Paddle::new(own_pos, own_size),
        );
        let enemy = Player::new(
            data.opponent_name.clone(),
            BoardSide::for_player(1 - current),
            Paddle::new(enemy_pos, enemy_size),
        );
        let players = if current == 0 { [own, enemy] } else { [enemy, own] };

        log::info!(
            "match started: {} ({}) vs {}",
            data.player_name,
            BoardSide::for_player(current).as_str(),
            data.opponent_name
        );

        Ok(Self {
            geometry: BoardGeometry {
                width: data.screen.width,
                height: data.screen.height,
                ..settings.geometry()
            },
            data,
            peer,
            audio,
            players,
            puck: Puck { pos: puck_pos },
            mover: SmoothMover::new(settings.smooth_divisor),
            idle_push: DelayTimer::new(settings.idle_push_delay),
            overlays: Overlays::new(),
        })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.data.current_player_id]
    }

    pub fn puck(&self) -> &Puck {
        &self.puck
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn mover(&self) -> &SmoothMover {
        &self.mover
    }

    /// "(name) score : score (name)", left player first
    pub fn score_line(&self) -> String {
        let [left, right] = &self.players;
        format!(
            "({}) {} : {} ({})",
            left.name,
            left.score(),
            right.score(),
            right.name
        )
    }

    fn screen(&self) -> ScreenSize {
        self.data.screen
    }

    fn step(&mut self, input: &FrameInput, dt: f32) -> Result<Transition, ContextError> {
        let current = self.data.current_player_id;
        let enemy = 1 - current;
        let mut link = borrow_link(&self.peer)?;

        if input.is_dragging() {
            self.idle_push.stop();
            let player = &self.players[current];
            let target =
                check_allowed_bounds(&self.geometry, player.side(), player.paddle(), input.pointer);
            self.mover.move_to(target);
            self.idle_push.start();
        }

        self.mover
            .update(dt, self.players[current].paddle_mut(), &mut *link)?;

        self.players[enemy].paddle_mut().pos = link.enemy_paddle_pos();
        self.puck.pos = link.puck_pos();

        if let Some(hit) = link.take_collision() {
            borrow_audio(&self.audio)?.play_at(
                SoundType::Collision,
                hit.x,
                hit.force,
                self.geometry.width,
            )?;
        }

        if let Some(goal) = link.take_goal() {
            apply_goal(
                goal,
                &mut self.players,
                &mut self.mover,
                &mut self.idle_push,
                current,
                &mut *link,
            )?;
            self.overlays.push(GoalBanner::default());
            borrow_audio(&self.audio)?.play(SoundType::Goal)?;
        }

        self.overlays.update(dt);
        if self.idle_push.update(dt) {
            link.send_paddle_pos(self.players[current].paddle().pos, true)?;
        }

        if link.is_game_over() {
            let winner = link.winner_id();
            let data = GameOverData {
                screen: self.screen(),
                win: winner == current,
                current_player_id: current,
                players: [self.players[0].summary(), self.players[1].summary()],
            };
            log::info!("match over: {} (winner {})", self.score_line(), winner);
            return Ok(Transition::Switch(ContextData::GameOver(data)));
        }

        if link.should_stop() {
            log::warn!("peer link stopped during match");
            return Ok(Transition::Switch(ContextData::error(
                self.screen(),
                "connection to the server was lost",
            )));
        }

        Ok(Transition::Stay)
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), ResourceError> {
        let current = self.data.current_player_id;
        let enemy = 1 - current;

        canvas.draw_sprite(GfxType::Background, Vec2::ZERO)?;
        canvas.draw_sprite(GfxType::Puck, self.puck.pos)?;
        canvas.draw_sprite(GfxType::PaddleCurrent, self.players[current].paddle().pos)?;
        canvas.draw_sprite(GfxType::PaddleEnemy, self.players[enemy].paddle().pos)?;

        let score = self.score_line();
        let style = TextStyle {
            color: argb(255, 255, 100, 100),
            ..Default::default()
        };
        let width = canvas.text_width(FontType::Score, &score, &style)?;
        let pos = Vec2::new((self.geometry.width - width) / 2.0, SCORE_TOP);
        canvas.draw_text(FontType::Score, pos, &score, &style)?;

        self.overlays.render(canvas, self.geometry.center())
    }
}

/// Score the goal and put both paddles back on their marks
fn apply_goal(
    goal: GoalEvent,
    players: &mut [Player; 2],
    mover: &mut SmoothMover,
    idle_push: &mut DelayTimer,
    current: usize,
    link: &mut dyn PeerLink,
) -> Result<(), ContextError> {
    let scorer = players
        .get_mut(goal.scoring_player_id)
        .ok_or(ContextError::InvalidPlayer(goal.scoring_player_id))?;
    scorer.set_score(goal.points);
    log::debug!("goal for {}: {} points", scorer.name, goal.points);

    for player in players.iter_mut() {
        player.paddle_mut().reset();
    }
    mover.stop();
    idle_push.stop();

    link.send_paddle_pos(players[current].paddle().pos, false)?;
    Ok(())
}

impl Context for InGameContext {
    fn kind(&self) -> ContextKind {
        ContextKind::InGame
    }

    fn frame(&mut self, input: &FrameInput, dt: f32) -> Transition {
        match self.step(input, dt) {
            Ok(transition) => transition,
            Err(e) => {
                log::error!("in-game update failed: {}", e);
                Transition::Switch(ContextData::error(self.screen(), e.to_string()))
            }
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.begin_scene();
        canvas.clear(0);
        if let Err(e) = self.draw(canvas) {
            log::error!("in-game render failed: {}", e);
        }
        canvas.end_scene();
    }
}
