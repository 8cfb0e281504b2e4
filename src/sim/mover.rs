//! Paddle smoothing toward the pointer target

use glam::Vec2;

use super::state::Paddle;
use crate::net::{PeerError, PeerLink};

/// Eases a paddle toward a target, one fixed fraction per update
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothMover {
    target: Option<Vec2>,
    divisor: f32,
}

impl SmoothMover {
    /// `divisor` below 1 would overshoot, so it is raised to 1
    pub fn new(divisor: f32) -> Self {
        Self {
            target: None,
            divisor: divisor.max(1.0),
        }
    }

    pub fn move_to(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Drop the target; the mover goes quiet until the next `move_to`
    pub fn stop(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Step the paddle toward the target and report the new position
    ///
    /// The step is `distance / divisor` per call regardless of `dt`, so
    /// the glide speed follows the frame rate.
    pub fn update(
        &mut self,
        _dt: f32,
        paddle: &mut Paddle,
        link: &mut dyn PeerLink,
    ) -> Result<(), PeerError> {
        let Some(target) = self.target else {
            return Ok(());
        };

        paddle.pos += (target - paddle.pos) / self.divisor;
        link.send_paddle_pos(paddle.pos, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::LoopbackPeer;
    use proptest::prelude::*;

    #[test]
    fn test_inactive_mover_sends_nothing() {
        let mut mover = SmoothMover::new(4.0);
        let mut paddle = Paddle::new(Vec2::new(100.0, 100.0), Vec2::splat(40.0));
        let mut peer = LoopbackPeer::default();
        mover.update(0.016, &mut paddle, &mut peer).unwrap();
        assert!(peer.sent().is_empty());
        assert_eq!(paddle.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_update_moves_fraction_and_sends_every_tick() {
        let mut mover = SmoothMover::new(4.0);
        let mut paddle = Paddle::new(Vec2::ZERO, Vec2::splat(40.0));
        let mut peer = LoopbackPeer::default();

        mover.move_to(Vec2::new(100.0, 40.0));
        mover.update(0.016, &mut paddle, &mut peer).unwrap();
        assert_eq!(paddle.pos, Vec2::new(25.0, 10.0));

        mover.update(0.016, &mut paddle, &mut peer).unwrap();
        assert_eq!(peer.sent().len(), 2);
        assert!(peer.sent().iter().all(|s| !s.is_final));
        assert_eq!(peer.last_sent().map(|s| s.pos), Some(paddle.pos));
    }

    #[test]
    fn test_step_ignores_dt() {
        let mut fast = Paddle::new(Vec2::ZERO, Vec2::splat(40.0));
        let mut slow = fast.clone();
        let mut peer = LoopbackPeer::default();
        let mut mover = SmoothMover::new(5.0);
        mover.move_to(Vec2::new(50.0, 50.0));

        mover.update(0.001, &mut fast, &mut peer).unwrap();
        mover.update(1.0, &mut slow, &mut peer).unwrap();
        assert_eq!(fast.pos, slow.pos);
    }

    #[test]
    fn test_send_failure_propagates() {
        let mut mover = SmoothMover::new(4.0);
        let mut paddle = Paddle::new(Vec2::ZERO, Vec2::splat(40.0));
        let mut peer = LoopbackPeer::default();
        peer.close();
        mover.move_to(Vec2::ONE);
        assert!(mover.update(0.016, &mut paddle, &mut peer).is_err());
    }

    proptest! {
        #[test]
        fn prop_converges_without_overshoot(
            sx in -1000.0f32..1000.0,
            sy in -1000.0f32..1000.0,
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
            divisor in 1.0f32..20.0,
            steps in 1usize..60,
        ) {
            let target = Vec2::new(tx, ty);
            let mut paddle = Paddle::new(Vec2::new(sx, sy), Vec2::splat(40.0));
            let mut peer = LoopbackPeer::default();
            let mut mover = SmoothMover::new(divisor);
            mover.move_to(target);

            let mut last_dist = paddle.pos.distance(target);
            for _ in 0..steps {
                let before = paddle.pos;
                mover.update(0.016, &mut paddle, &mut peer).unwrap();
                let dist = paddle.pos.distance(target);
                prop_assert!(dist <= last_dist + 1e-3);
                // Never passes the target on either axis
                for (after, prior) in [
                    (target.x - paddle.pos.x, target.x - before.x),
                    (target.y - paddle.pos.y, target.y - before.y),
                ] {
                    prop_assert!(after.abs() < 1e-2 || after.signum() == prior.signum());
                }
                last_dist = dist;
            }
        }
    }
}
