use super::*;

use crate::physics_utils::{ length, sub };

impl RollingBall {
    /// Signed gap between the collision surfaces of this ball and `other`,
    /// zero or less means they touch
    pub fn distance_to(&self, other: &TableObject) -> f64 {
        match other {
            TableObject::StillBall(ball) => length(sub(self.pos, ball.pos)) - BALL_DIAMETER,
            TableObject::RollingBall(ball) => length(sub(self.pos, ball.pos)) - BALL_DIAMETER,
            TableObject::Hole(hole) => length(sub(self.pos, hole.pos)) - HOLE_RADIUS,
            TableObject::HorizontalCushion(cushion) => (self.pos.y - cushion.y).abs() - BALL_RADIUS,
            TableObject::VerticalCushion(cushion) => (self.pos.x - cushion.x).abs() - BALL_RADIUS,
        }
    }
}

/// Distance from `subject` to `other`, only defined when `subject` is a
/// rolling ball
pub fn distance(subject: &TableObject, other: &TableObject) -> Result<f64, SimError> {
    subject.as_rolling()
        .map(|ball| ball.distance_to(other))
        .ok_or(SimError::NotApplicable { kind: subject.kind() })
}
