use super::*;

use crate::physics_utils::{ drag_acceleration, resolve_ball_collision };

/// What is left of a rolling ball and the object it reached after impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// `None` once the ball dropped into a hole
    pub ball: Option<RollingBall>,
    pub other: TableObject,
}

impl RollingBall {
    /// Applies the response of this ball reaching `other`
    pub fn bounce(self, other: TableObject) -> Bounce {
        match other {
            TableObject::HorizontalCushion(_) => {
                let mut ball = self;
                ball.vel.y = -ball.vel.y;
                ball.acc.y = -ball.acc.y;
                Bounce { ball: Some(ball), other }
            }
            TableObject::VerticalCushion(_) => {
                let mut ball = self;
                ball.vel.x = -ball.vel.x;
                ball.acc.x = -ball.acc.x;
                Bounce { ball: Some(ball), other }
            }
            TableObject::Hole(_) => Bounce { ball: None, other },
            TableObject::StillBall(still) => {
                let (ball, other) = self.collide(still.into_rolling());
                Bounce { ball: Some(ball), other: other.into() }
            }
            TableObject::RollingBall(rolling) => {
                let (ball, other) = self.collide(rolling);
                Bounce { ball: Some(ball), other: other.into() }
            }
        }
    }

    /// Elastic impact between two balls of equal mass, drag of both balls is
    /// re-aimed against their new velocities
    pub fn collide(self, other: RollingBall) -> (RollingBall, RollingBall) {
        let (vel, other_vel) = resolve_ball_collision(self.pos, self.vel, other.pos, other.vel);
        (self.with_vel(vel), other.with_vel(other_vel))
    }

    /// Too slow for drag to have a direction means no drag at all, so the
    /// next stop check catches the ball instead of drag pushing it backwards.
    /// Unlike a bare exchange, the old drag is not carried over in that case.
    fn with_vel(self, vel: DVec2) -> Self {
        Self {
            vel,
            acc: drag_acceleration(vel).unwrap_or(DVec2::ZERO),
            ..self
        }
    }
}
