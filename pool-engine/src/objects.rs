use std::fmt;

use arbitrary_int::u4;
use glam::DVec2;

use crate::SimError;

/// Number painted on a ball, 0 is the cue ball
pub type BallNumber = u4;

pub fn ball_number(number: u8) -> Result<BallNumber, SimError> {
    u4::try_new(number)
        .map_err(|_| SimError::InvalidArgument(format!("ball number {number} is not in 0..=15")))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StillBall {
    pub number: BallNumber,
    pub pos: DVec2,
}

impl StillBall {
    pub fn new(number: BallNumber, pos: DVec2) -> Self {
        Self { number, pos }
    }

    pub fn is_cue(&self) -> bool {
        self.number.value() == 0
    }

    /// The same ball set in motion with no velocity nor acceleration yet
    pub fn into_rolling(self) -> RollingBall {
        RollingBall {
            number: self.number,
            pos: self.pos,
            vel: DVec2::ZERO,
            acc: DVec2::ZERO,
        }
    }
}

/// A ball in motion. Its acceleration models drag and, when non-zero,
/// points against its velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingBall {
    pub number: BallNumber,
    pub pos: DVec2,
    pub vel: DVec2,
    pub acc: DVec2,
}

impl RollingBall {
    pub fn new(number: BallNumber, pos: DVec2, vel: DVec2, acc: DVec2) -> Self {
        Self { number, pos, vel, acc }
    }

    pub fn into_still(self) -> StillBall {
        StillBall {
            number: self.number,
            pos: self.pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub pos: DVec2,
}

/// Infinite cushion along the line `y = self.y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCushion {
    pub y: f64,
}

/// Infinite cushion along the line `x = self.x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalCushion {
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    StillBall,
    RollingBall,
    Hole,
    HorizontalCushion,
    VerticalCushion,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::StillBall => "still ball",
            ObjectKind::RollingBall => "rolling ball",
            ObjectKind::Hole => "hole",
            ObjectKind::HorizontalCushion => "horizontal cushion",
            ObjectKind::VerticalCushion => "vertical cushion",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableObject {
    StillBall(StillBall),
    RollingBall(RollingBall),
    Hole(Hole),
    HorizontalCushion(HorizontalCushion),
    VerticalCushion(VerticalCushion),
}

impl TableObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            TableObject::StillBall(_) => ObjectKind::StillBall,
            TableObject::RollingBall(_) => ObjectKind::RollingBall,
            TableObject::Hole(_) => ObjectKind::Hole,
            TableObject::HorizontalCushion(_) => ObjectKind::HorizontalCushion,
            TableObject::VerticalCushion(_) => ObjectKind::VerticalCushion,
        }
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self, TableObject::RollingBall(_))
    }

    pub fn as_rolling(&self) -> Option<&RollingBall> {
        match self {
            TableObject::RollingBall(ball) => Some(ball),
            _ => None,
        }
    }

    /// Number of the ball, `None` for holes and cushions
    pub fn ball_number(&self) -> Option<BallNumber> {
        match self {
            TableObject::StillBall(ball) => Some(ball.number),
            TableObject::RollingBall(ball) => Some(ball.number),
            _ => None,
        }
    }

    /// Centre of the object, cushions have none
    pub fn pos(&self) -> Option<DVec2> {
        match self {
            TableObject::StillBall(ball) => Some(ball.pos),
            TableObject::RollingBall(ball) => Some(ball.pos),
            TableObject::Hole(hole) => Some(hole.pos),
            _ => None,
        }
    }
}

impl From<StillBall> for TableObject {
    fn from(ball: StillBall) -> Self {
        Self::StillBall(ball)
    }
}

impl From<RollingBall> for TableObject {
    fn from(ball: RollingBall) -> Self {
        Self::RollingBall(ball)
    }
}

impl From<Hole> for TableObject {
    fn from(hole: Hole) -> Self {
        Self::Hole(hole)
    }
}

impl From<HorizontalCushion> for TableObject {
    fn from(cushion: HorizontalCushion) -> Self {
        Self::HorizontalCushion(cushion)
    }
}

impl From<VerticalCushion> for TableObject {
    fn from(cushion: VerticalCushion) -> Self {
        Self::VerticalCushion(cushion)
    }
}

impl fmt::Display for TableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableObject::StillBall(ball) => write!(
                f,
                "STILL_BALL ({},{:6.1},{:6.1})",
                ball.number.value(),
                ball.pos.x,
                ball.pos.y,
            ),
            TableObject::RollingBall(ball) => write!(
                f,
                "ROLLING_BALL ({},{:6.1},{:6.1},{:6.1},{:6.1},{:6.1},{:6.1})",
                ball.number.value(),
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y,
                ball.acc.x,
                ball.acc.y,
            ),
            TableObject::Hole(hole) => write!(f, "HOLE ({:6.1},{:6.1})", hole.pos.x, hole.pos.y),
            TableObject::HorizontalCushion(cushion) => write!(f, "HCUSHION ({:6.1})", cushion.y),
            TableObject::VerticalCushion(cushion) => write!(f, "VCUSHION ({:6.1})", cushion.x),
        }
    }
}
