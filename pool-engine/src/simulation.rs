mod proximity;
pub use proximity::*;
mod kinematics;
pub use kinematics::*;
mod collision;
pub use collision::*;

use glam::DVec2;
use log::{ debug, warn };

use crate::{
    BALL_DIAMETER, BALL_RADIUS, HOLE_RADIUS, MAX_TICKS, MAX_TIME, RollingBall, SIM_RATE,
    SimError, StillBall, Table, TableObject, VEL_EPSILON,
};

/// Why a segment ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The ball in `slot` came to rest
    Stopped { slot: usize },
    /// The ball in `slot` reached the object in `other`
    Collided { slot: usize, other: usize },
    /// Nothing happened before [`MAX_TIME`]
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// State of the table right after the event that ended the segment
    pub table: Table,
    pub outcome: SegmentOutcome,
}

/// First event found while scanning a tick, with the objects involved as
/// they were at that tick
enum Event {
    Stopped {
        slot: usize,
        ball: StillBall,
    },
    Contact {
        slot: usize,
        ball: RollingBall,
        other: usize,
        object: TableObject,
    },
}

impl Table {
    /// Simulates the table until a ball stops, a ball touches another
    /// object, or [`MAX_TIME`] elapses, and returns the table at that moment.
    ///
    /// Returns `None` when no ball is rolling. `self` is never modified.
    pub fn segment(&self) -> Option<Segment> {
        if self.rolling_count() == 0 {
            return None;
        }
        Some(Simulation::new(self).run())
    }
}

struct Simulation<'a> {
    initial: &'a Table,
    working: Table,
}

impl<'a> Simulation<'a> {
    fn new(initial: &'a Table) -> Self {
        Self {
            initial,
            working: initial.clone(),
        }
    }

    /// Moves every ball that was rolling when the segment started to where
    /// it is `elapsed` seconds later.
    /// Always integrated from the initial state so errors don't pile up
    /// from tick to tick.
    fn roll_all(&mut self, elapsed: f64) {
        for (working, initial) in self.working.slots.iter_mut().zip(&self.initial.slots) {
            if let (Some(TableObject::RollingBall(ball)), Some(TableObject::RollingBall(base))) = (working, initial) {
                *ball = base.advance(elapsed);
            }
        }
    }

    /// Scans rolling balls in slot order, for each one checking first if it
    /// stopped then if it touches any other object, also in slot order
    fn find_event(&self) -> Option<Event> {
        for (slot, object) in self.working.objects() {
            let Some(&ball) = object.as_rolling()
            else {
                continue;
            };

            if let StopCheck::Stopped(ball) = ball.check_stopped() {
                return Some(Event::Stopped { slot, ball });
            }

            let contact = self.working.objects()
                .filter(|&(other, _)| other != slot)
                .find(|(_, other_object)| ball.distance_to(other_object) < 0.);
            if let Some((other, &object)) = contact {
                return Some(Event::Contact { slot, ball, other, object });
            }
        }
        None
    }

    fn apply(&mut self, event: Event) -> SegmentOutcome {
        match event {
            Event::Stopped { slot, ball } => {
                self.working.slots[slot] = Some(ball.into());
                SegmentOutcome::Stopped { slot }
            }
            Event::Contact { slot, ball, other, object } => {
                let bounce = ball.bounce(object);
                self.working.slots[slot] = bounce.ball.map(TableObject::from);
                self.working.slots[other] = Some(bounce.other);
                SegmentOutcome::Collided { slot, other }
            }
        }
    }

    fn run(mut self) -> Segment {
        let mut elapsed = 0.;
        for _ in 0..MAX_TICKS {
            elapsed += SIM_RATE;
            self.roll_all(elapsed);

            if let Some(event) = self.find_event() {
                self.working.time = self.initial.time + elapsed;
                let outcome = self.apply(event);
                debug!("segment ended after {elapsed:.4}s (t = {:.4}s): {outcome:?}", self.working.time);
                return Segment {
                    table: self.working,
                    outcome,
                };
            }
        }

        warn!("no ball stopped nor touched anything within {MAX_TIME}s");
        Segment {
            table: self.working,
            outcome: SegmentOutcome::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ DRAG, HorizontalCushion, ball_number, physics_utils::drag_acceleration };

    fn table_with(objects: impl IntoIterator<Item = TableObject>) -> Table {
        let mut table = Table::new();
        for object in objects {
            table.add_object(object).unwrap();
        }
        table
    }

    fn still(number: u8, x: f64, y: f64) -> TableObject {
        StillBall::new(ball_number(number).unwrap(), DVec2::new(x, y)).into()
    }

    fn rolling(number: u8, pos: (f64, f64), vel: (f64, f64)) -> RollingBall {
        let vel = DVec2::new(vel.0, vel.1);
        RollingBall::new(
            ball_number(number).unwrap(),
            DVec2::new(pos.0, pos.1),
            vel,
            drag_acceleration(vel).unwrap_or(DVec2::ZERO),
        )
    }

    #[test]
    fn test_nothing_rolling() {
        let table = table_with([still(0, 675., 2025.)]);
        assert_eq!(table.segment(), None);
        assert_eq!(Table::new().segment(), None);
    }

    #[test]
    fn test_ball_rolls_to_a_stop() {
        let ball = RollingBall::new(
            ball_number(0).unwrap(),
            DVec2::new(675., 1350.),
            DVec2::new(100., 0.),
            DVec2::new(-150., 0.),
        );
        let table = table_with([ball.into()]);

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::Stopped { slot: 10 });
        assert!((segment.table.time() - 100. / 150.).abs() < 1e-3, "{}", segment.table.time());

        let Some(TableObject::StillBall(rested)) = segment.table[10]
        else {
            panic!("ball should be still, got {:?}", segment.table[10]);
        };
        assert_eq!(rested.number, ball.number);
        // v² / 2a
        assert!((rested.pos.x - (675. + 100. * 100. / 300.)).abs() < 1e-2, "{}", rested.pos.x);
        assert_eq!(rested.pos.y, 1350.);

        // Only the ball changed
        assert_eq!(segment.table.slots[..10], table.slots[..10]);
        assert_eq!(segment.table.segment(), None);
    }

    #[test]
    fn test_ball_bounces_on_cushion() {
        let ball = rolling(0, (675., 200.), (100., -1000.));
        let table = table_with([ball.into()]);

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::Collided { slot: 10, other: 0 });

        let at_impact = ball.advance(segment.table.time());
        assert!(at_impact.distance_to(&HorizontalCushion { y: 0. }.into()) < 0.);

        let after = *segment.table[10].as_ref().and_then(TableObject::as_rolling).unwrap();
        assert_eq!(after.pos, at_impact.pos);
        assert_eq!(after.vel, DVec2::new(at_impact.vel.x, -at_impact.vel.y));
        assert_eq!(after.acc, DVec2::new(at_impact.acc.x, -at_impact.acc.y));
        assert!(after.vel.y > 0.);
        assert_eq!(segment.table[0], table[0]);
    }

    #[test]
    fn test_ball_sinks_in_hole() {
        let ball = rolling(8, (300., 1350.), (-1000., 0.));
        let table = table_with([ball.into(), still(2, 675., 2000.)]);

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::Collided { slot: 10, other: 5 });
        assert_eq!(segment.table[10], None);
        for slot in (0..table.slots.len()).filter(|&slot| slot != 10) {
            assert_eq!(segment.table[slot], table[slot]);
        }
        assert_eq!(segment.table.rolling_count(), 0);
        assert_eq!(segment.table.segment(), None);
    }

    #[test]
    fn test_cue_ball_strikes_still_ball() {
        let cue = rolling(0, (675., 1800.), (0., -1000.));
        let table = table_with([cue.into(), still(1, 675., 1000.)]);

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::Collided { slot: 10, other: 11 });

        let cue_after = *segment.table[10].as_ref().and_then(TableObject::as_rolling).unwrap();
        let target_after = *segment.table[11].as_ref().and_then(TableObject::as_rolling).unwrap();
        assert_eq!(target_after.number.value(), 1);
        assert!(target_after.vel.y < 0.);
        assert_eq!(target_after.acc, DVec2::new(0., DRAG));
        assert!(cue_after.is_at_rest());

        // The cue ball has nothing left and stops right away
        let next = segment.table.segment().unwrap();
        assert_eq!(next.outcome, SegmentOutcome::Stopped { slot: 10 });
        assert!(matches!(next.table[10], Some(TableObject::StillBall(_))));
        assert!(next.table.time() > segment.table.time());
    }

    #[test]
    fn test_first_event_in_slot_order_wins() {
        // Both balls are touching something at the first tick, the lowest
        // slot is reported
        let low = rolling(1, (675., 20.), (10., -10.));
        let high = rolling(2, (20., 600.), (-10., 10.));
        let table = table_with([low.into(), high.into()]);

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::Collided { slot: 10, other: 0 });
        assert_eq!(segment.table.time(), SIM_RATE);
        // The other ball was rolled along but not bounced
        assert_eq!(segment.table[11], Some(high.advance(SIM_RATE).into()));
    }

    #[test]
    fn test_segment_times_out() {
        // No drag and nothing to reach
        let ball = RollingBall::new(ball_number(3).unwrap(), DVec2::ZERO, DVec2::new(1., 0.), DVec2::ZERO);
        let mut table = Table::empty();
        table.add_object(ball).unwrap();

        let segment = table.segment().unwrap();
        assert_eq!(segment.outcome, SegmentOutcome::TimedOut);
        assert_eq!(segment.table.time(), 0.);

        let after = *segment.table[0].as_ref().and_then(TableObject::as_rolling).unwrap();
        assert!((after.pos.x - MAX_TIME).abs() < 1e-6, "{}", after.pos.x);
        assert_eq!(after.pos.y, 0.);
        assert_eq!(after.vel, ball.vel);
        assert_eq!(after.acc, DVec2::ZERO);
    }

    #[test]
    fn test_segment_is_deterministic() {
        let table = table_with([
            rolling(0, (600., 1900.), (130., -1400.)).into(),
            still(1, 675., 1000.),
            still(2, 646., 950.),
            still(3, 704., 950.),
        ]);

        let first = table.segment().unwrap();
        let second = table.segment().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.table.to_string(), second.table.to_string());
        // The input table is left untouched
        assert_eq!(table.time(), 0.);
        assert!(table[10].unwrap().is_rolling());
    }
}
