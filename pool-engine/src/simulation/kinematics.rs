use super::*;

use crate::physics_utils::length;

/// Result of checking whether a rolling ball came to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopCheck {
    Stopped(StillBall),
    Rolling(RollingBall),
}

impl StopCheck {
    pub fn is_stopped(&self) -> bool {
        matches!(self, StopCheck::Stopped(_))
    }

    pub fn into_object(self) -> TableObject {
        match self {
            StopCheck::Stopped(ball) => ball.into(),
            StopCheck::Rolling(ball) => ball.into(),
        }
    }
}

impl RollingBall {
    /// State of the ball after rolling freely for `elapsed` seconds from
    /// this state.
    ///
    /// Drag can bring an axis to rest but never reverse it: if the velocity
    /// along an axis changed sign, that axis' velocity and acceleration are
    /// zeroed.
    pub fn advance(&self, elapsed: f64) -> RollingBall {
        let t = elapsed;
        let mut next = RollingBall {
            pos: DVec2::new(
                self.pos.x + self.vel.x * t + 0.5 * self.acc.x * t * t,
                self.pos.y + self.vel.y * t + 0.5 * self.acc.y * t * t,
            ),
            vel: DVec2::new(
                self.vel.x + self.acc.x * t,
                self.vel.y + self.acc.y * t,
            ),
            ..*self
        };

        if (self.vel.x < 0.) != (next.vel.x < 0.) {
            next.vel.x = 0.;
            next.acc.x = 0.;
        }
        if (self.vel.y < 0.) != (next.vel.y < 0.) {
            next.vel.y = 0.;
            next.acc.y = 0.;
        }

        next
    }

    pub fn is_at_rest(&self) -> bool {
        length(self.vel) < VEL_EPSILON
    }

    /// Turns the ball into a still ball at the same place if it is slower
    /// than [`VEL_EPSILON`]
    pub fn check_stopped(self) -> StopCheck {
        if self.is_at_rest() {
            StopCheck::Stopped(self.into_still())
        }
        else {
            StopCheck::Rolling(self)
        }
    }
}

impl TableObject {
    /// The object after `elapsed` seconds, only rolling balls move
    pub fn rolled(&self, elapsed: f64) -> TableObject {
        match self {
            TableObject::RollingBall(ball) => ball.advance(elapsed).into(),
            other => *other,
        }
    }
}
